//! FFI bindings for CoreFoundation.
//!
//! This module provides the CFArray, CFString, and CFBoolean
//! declarations used to walk the input source list, plus helpers for
//! converting CF values into plain Rust types.

use std::ffi::CStr;

// === Types ===

pub type CFStringRef = *const std::ffi::c_void;
pub type CFArrayRef = *const std::ffi::c_void;
pub type CFDictionaryRef = *const std::ffi::c_void;
pub type CFBooleanRef = *const std::ffi::c_void;
pub type CFIndex = isize;
pub type CFStringEncoding = u32;
pub type Boolean = u8;

// === Constants ===

pub const K_CF_STRING_ENCODING_UTF8: CFStringEncoding = 0x0800_0100;

// === FFI Declarations ===

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    pub fn CFRelease(obj: *const std::ffi::c_void);

    pub fn CFArrayGetCount(theArray: CFArrayRef) -> CFIndex;

    pub fn CFArrayGetValueAtIndex(theArray: CFArrayRef, idx: CFIndex) -> *const std::ffi::c_void;

    pub fn CFStringGetLength(theString: CFStringRef) -> CFIndex;

    pub fn CFStringGetMaximumSizeForEncoding(
        length: CFIndex,
        encoding: CFStringEncoding,
    ) -> CFIndex;

    pub fn CFStringGetCString(
        theString: CFStringRef,
        buffer: *mut std::os::raw::c_char,
        bufferSize: CFIndex,
        encoding: CFStringEncoding,
    ) -> Boolean;

    pub fn CFBooleanGetValue(boolean: CFBooleanRef) -> Boolean;
}

// === Helpers ===

/// Convert a CFString into an owned Rust String.
///
/// Returns `None` for a null reference or when the conversion fails.
/// The reference is borrowed, not consumed.
///
/// # Safety
/// Caller must ensure `string` is null or a valid CFStringRef.
pub unsafe fn cfstring_to_string(string: CFStringRef) -> Option<String> {
    if string.is_null() {
        return None;
    }
    let length = CFStringGetLength(string);
    let max_size = CFStringGetMaximumSizeForEncoding(length, K_CF_STRING_ENCODING_UTF8) + 1;
    let mut buffer = vec![0u8; max_size as usize];
    let ok = CFStringGetCString(
        string,
        buffer.as_mut_ptr() as *mut std::os::raw::c_char,
        max_size,
        K_CF_STRING_ENCODING_UTF8,
    );
    if ok == 0 {
        return None;
    }
    let cstr = CStr::from_ptr(buffer.as_ptr() as *const std::os::raw::c_char);
    Some(cstr.to_string_lossy().into_owned())
}

/// Read a CFBoolean property value, treating null as false.
///
/// # Safety
/// Caller must ensure `value` is null or a valid CFBooleanRef.
pub unsafe fn cfboolean_to_bool(value: CFBooleanRef) -> bool {
    if value.is_null() {
        return false;
    }
    CFBooleanGetValue(value) != 0
}
