//! Platform-specific implementations.
//!
//! This module contains the provider that backs the CLI with real OS
//! input sources. Only macOS has one; on other platforms the module is
//! empty and the command layer reports the missing support.

#[cfg(target_os = "macos")]
pub mod macos;

// Re-export the current platform's provider for convenience
#[cfg(target_os = "macos")]
pub use macos::*;
