//! FFI bindings for macOS frameworks.
//!
//! This module encapsulates all `extern "C"` declarations and types
//! needed to interact with Text Input Source Services (Carbon) and
//! CoreFoundation.

pub mod carbon;
pub mod corefoundation;

// Re-exports for convenient access
pub use carbon::*;
pub use corefoundation::*;
