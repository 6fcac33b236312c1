//! Error types for im-switch.
//!
//! Every failure is terminal for the invoking command: the surface
//! prints one human-readable message and exits non-zero. There are no
//! retries and no partial successes.

use thiserror::Error;

/// Failures reported by input source operations.
#[derive(Error, Debug, PartialEq)]
pub enum SwitchError {
    /// The OS rejected the select request with a non-success status.
    #[error("Failed to change input source (OS status {status})")]
    SelectionFailed { status: i32 },

    /// The requested identifier is not in the selectable keyboard set.
    #[error("Input source ID is not available: {id}")]
    NotAvailable { id: String },

    /// The active source could not be located in the selectable keyboard
    /// set while cycling. This can happen when the active source is a
    /// non-keyboard input method; it is reported as an error rather than
    /// silently restarting the cycle at the first entry.
    #[error("Current input source could not be located among the selectable keyboard sources")]
    Unknown,
}

pub type Result<T> = std::result::Result<T, SwitchError>;
