//! Input source switching logic.
//!
//! [`InputSourceSwitcher`] holds every decision the tool makes: which
//! sources count as selectable, how an identifier is resolved, and how
//! the next source in the cycle is chosen. It talks to the OS only
//! through the [`InputSourceProvider`] trait, so the whole module runs
//! under plain integration tests with a scripted provider.

use crate::error::{Result, SwitchError};
use crate::model::InputSource;

/// Access to the system's input sources.
///
/// The real implementation lives in `platform::macos` and wraps the
/// Text Input Source Services calls. Tests substitute an in-memory
/// provider.
pub trait InputSourceProvider {
    /// Snapshot of every installed input source, unfiltered.
    fn all_sources(&self) -> Result<Vec<InputSource>>;

    /// The currently active keyboard input source.
    fn current_source(&self) -> Result<InputSource>;

    /// Make `source` the active input source.
    fn select(&self, source: &InputSource) -> Result<()>;
}

/// High-level operations over a provider.
pub struct InputSourceSwitcher<P> {
    provider: P,
}

impl<P: InputSourceProvider> InputSourceSwitcher<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Access the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Sources the user can actually switch to: select-capable keyboard
    /// sources, in the order the provider reports them. Palettes,
    /// handwriting panels and other non-keyboard categories are dropped.
    pub fn selectable_sources(&self) -> Result<Vec<InputSource>> {
        let sources = self.provider.all_sources()?;
        Ok(sources
            .into_iter()
            .filter(InputSource::is_selectable_keyboard)
            .collect())
    }

    /// Activate the source whose identifier is exactly `id`.
    ///
    /// The identifier must belong to the selectable keyboard set;
    /// anything else fails with [`SwitchError::NotAvailable`] and
    /// leaves the active source untouched.
    pub fn select_by_id(&self, id: &str) -> Result<()> {
        let sources = self.selectable_sources()?;
        let source = sources
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| SwitchError::NotAvailable { id: id.to_string() })?;
        self.provider.select(source)
    }

    /// Advance to the next source in the selectable cycle.
    ///
    /// The cycle order is the provider's enumeration order, and the
    /// successor of the last entry is the first. Returns the sources
    /// before and after the switch; with a single selectable source the
    /// two are equal and the select is still issued.
    pub fn select_next(&self) -> Result<(InputSource, InputSource)> {
        let sources = self.selectable_sources()?;
        let current = self.provider.current_source()?;
        let index = sources
            .iter()
            .position(|s| s.id == current.id)
            .ok_or(SwitchError::Unknown)?;
        let next = sources[(index + 1) % sources.len()].clone();
        self.provider.select(&next)?;
        Ok((sources[index].clone(), next))
    }
}
