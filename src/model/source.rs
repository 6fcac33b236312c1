//! Input source snapshot (pure Rust, no FFI).
//!
//! The OS exposes input source records through dynamically-typed property
//! lookups; the binding layer reads every property once at enumeration
//! time and hands the rest of the program this typed, read-only snapshot.

/// Category value identifying keyboard input sources.
///
/// This is the documented value of `kTISCategoryKeyboardInputSource`;
/// palette and ink input sources carry other category values and are
/// never eligible for direct selection by this tool.
pub const KEYBOARD_CATEGORY: &str = "TISCategoryKeyboardInputSource";

/// One input source as enumerated by the OS, captured at a single
/// point in time. Snapshots are fetched fresh for every operation and
/// never cached across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSource {
    /// Opaque identifier, reverse-DNS style (e.g. `com.apple.keylayout.ABC`).
    pub id: String,
    /// Human-readable name localized by the OS (e.g. `ABC`, `Hiragana`).
    pub localized_name: String,
    /// Whether the OS permits this source to be made active directly.
    pub select_capable: bool,
    /// OS classification tag; see [`KEYBOARD_CATEGORY`].
    pub category: String,
    /// Whether this source is currently the active one.
    pub selected: bool,
}

impl InputSource {
    /// True for sources that may appear in the selectable keyboard set:
    /// select-capable and classified as a keyboard input source.
    pub fn is_selectable_keyboard(&self) -> bool {
        self.select_capable && self.category == KEYBOARD_CATEGORY
    }

    /// Leading marker for verbose listings: `*` for the active source,
    /// a space for every other row.
    pub fn marker(&self) -> char {
        if self.selected {
            '*'
        } else {
            ' '
        }
    }
}
