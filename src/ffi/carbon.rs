//! FFI bindings for Text Input Source Services (Carbon/HIToolbox).
//!
//! This module provides the low-level TIS API declarations needed for
//! enumerating and selecting keyboard input sources on macOS.

use super::corefoundation::{Boolean, CFArrayRef, CFDictionaryRef, CFStringRef};

// === Types ===

/// Opaque reference to a TISInputSource object.
pub type TISInputSourceRef = *mut std::ffi::c_void;

pub type OSStatus = i32;

// === Constants ===

pub const NO_ERR: OSStatus = 0;

// === FFI Declarations ===

#[link(name = "Carbon", kind = "framework")]
extern "C" {
    /// Returns a CFArray of TISInputSourceRef matching `properties`
    /// (pass null to match everything installed and enabled).
    ///
    /// Follows the Create rule: the caller owns the returned array.
    pub fn TISCreateInputSourceList(
        properties: CFDictionaryRef,
        includeAllInstalled: Boolean,
    ) -> CFArrayRef;

    /// Returns the currently selected keyboard input source.
    ///
    /// Follows the Copy rule: the caller owns the returned reference.
    pub fn TISCopyCurrentKeyboardInputSource() -> TISInputSourceRef;

    /// Makes `inputSource` the selected input source. Returns `NO_ERR`
    /// on success.
    pub fn TISSelectInputSource(inputSource: TISInputSourceRef) -> OSStatus;

    /// Returns the property value for `propertyKey`, or null when the
    /// source has no such property.
    ///
    /// Follows the Get rule: the returned value is NOT owned by the
    /// caller and must not be released.
    pub fn TISGetInputSourceProperty(
        inputSource: TISInputSourceRef,
        propertyKey: CFStringRef,
    ) -> *const std::ffi::c_void;

    pub static kTISPropertyInputSourceID: CFStringRef;
    pub static kTISPropertyLocalizedName: CFStringRef;
    pub static kTISPropertyInputSourceCategory: CFStringRef;
    pub static kTISPropertyInputSourceIsSelectCapable: CFStringRef;
    pub static kTISPropertyInputSourceIsSelected: CFStringRef;
}
