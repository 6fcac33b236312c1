//! Domain model.
//!
//! This module contains pure data (no FFI dependencies): the typed
//! snapshot of an OS input source record and its classification helpers.
//!
//! Platform-specific enumeration and selection is in `platform::macos`.

pub mod source;

pub use source::{InputSource, KEYBOARD_CATEGORY};
