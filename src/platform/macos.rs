//! macOS provider backed by Text Input Source Services.
//!
//! All CoreFoundation ownership rules live in this module: the source
//! list and the current-source reference follow the Create/Copy rules
//! and are released before returning, while property values follow the
//! Get rule and are only borrowed.

use crate::ffi::{
    cfboolean_to_bool, cfstring_to_string, kTISPropertyInputSourceCategory,
    kTISPropertyInputSourceID, kTISPropertyInputSourceIsSelectCapable,
    kTISPropertyInputSourceIsSelected, kTISPropertyLocalizedName, CFArrayGetCount,
    CFArrayGetValueAtIndex, CFRelease, OSStatus, TISCopyCurrentKeyboardInputSource,
    TISCreateInputSourceList, TISGetInputSourceProperty, TISInputSourceRef, TISSelectInputSource,
    NO_ERR,
};
use im_switch::error::{Result, SwitchError};
use im_switch::model::InputSource;
use im_switch::switch::InputSourceProvider;

/// Provider that reads and selects the live system's input sources.
pub struct SystemInputSources;

impl InputSourceProvider for SystemInputSources {
    fn all_sources(&self) -> Result<Vec<InputSource>> {
        unsafe {
            let list = TISCreateInputSourceList(std::ptr::null(), 0);
            if list.is_null() {
                return Ok(Vec::new());
            }
            let count = CFArrayGetCount(list);
            let mut sources = Vec::with_capacity(count as usize);
            for index in 0..count {
                let source = CFArrayGetValueAtIndex(list, index) as TISInputSourceRef;
                if let Some(snapshot) = snapshot_source(source) {
                    sources.push(snapshot);
                }
            }
            CFRelease(list);
            Ok(sources)
        }
    }

    fn current_source(&self) -> Result<InputSource> {
        unsafe {
            let current = TISCopyCurrentKeyboardInputSource();
            if current.is_null() {
                return Err(SwitchError::Unknown);
            }
            let snapshot = snapshot_source(current);
            CFRelease(current);
            snapshot.ok_or(SwitchError::Unknown)
        }
    }

    fn select(&self, source: &InputSource) -> Result<()> {
        // Re-resolve a fresh reference by identifier; snapshots do not
        // keep the underlying TIS object alive.
        unsafe {
            let list = TISCreateInputSourceList(std::ptr::null(), 0);
            if list.is_null() {
                return Err(SwitchError::NotAvailable {
                    id: source.id.clone(),
                });
            }
            let count = CFArrayGetCount(list);
            let mut status: Option<OSStatus> = None;
            for index in 0..count {
                let candidate = CFArrayGetValueAtIndex(list, index) as TISInputSourceRef;
                let candidate_id =
                    cfstring_to_string(TISGetInputSourceProperty(candidate, kTISPropertyInputSourceID));
                if candidate_id.as_deref() == Some(source.id.as_str()) {
                    status = Some(TISSelectInputSource(candidate));
                    break;
                }
            }
            CFRelease(list);
            match status {
                Some(NO_ERR) => Ok(()),
                Some(code) => Err(SwitchError::SelectionFailed { status: code }),
                None => Err(SwitchError::NotAvailable {
                    id: source.id.clone(),
                }),
            }
        }
    }
}

/// Read one source's properties into an [`InputSource`].
///
/// Returns `None` when the source has no identifier; such entries
/// cannot be addressed and are skipped. A missing localized name falls
/// back to the identifier, missing booleans read as false.
unsafe fn snapshot_source(source: TISInputSourceRef) -> Option<InputSource> {
    let id = cfstring_to_string(TISGetInputSourceProperty(source, kTISPropertyInputSourceID))?;
    let localized_name =
        cfstring_to_string(TISGetInputSourceProperty(source, kTISPropertyLocalizedName))
            .unwrap_or_else(|| id.clone());
    let category =
        cfstring_to_string(TISGetInputSourceProperty(source, kTISPropertyInputSourceCategory))
            .unwrap_or_default();
    let select_capable = cfboolean_to_bool(TISGetInputSourceProperty(
        source,
        kTISPropertyInputSourceIsSelectCapable,
    ));
    let selected = cfboolean_to_bool(TISGetInputSourceProperty(
        source,
        kTISPropertyInputSourceIsSelected,
    ));
    Some(InputSource {
        id,
        localized_name,
        select_capable,
        category,
        selected,
    })
}
