//! Pure helpers used by the CLI. Keep this crate root free of macOS FFI
//! so tests can run as normal integration tests.

pub mod error;
pub mod model;
pub mod switch;

// Re-export model types for convenience
pub use model::{InputSource, KEYBOARD_CATEGORY};

// Re-export core types for convenience
pub use error::SwitchError;
pub use switch::{InputSourceProvider, InputSourceSwitcher};

/// Render one `list` row: the bare identifier, or the selection marker
/// plus identifier and localized name when verbose.
pub fn format_source(source: &InputSource, verbose: bool) -> String {
    if verbose {
        format!(
            "{} {} ({})",
            source.marker(),
            source.id,
            source.localized_name
        )
    } else {
        source.id.clone()
    }
}

/// Render the transition printed by a verbose `next`.
pub fn format_transition(before: &InputSource, after: &InputSource) -> String {
    format!("{} -> {}", before.localized_name, after.localized_name)
}
