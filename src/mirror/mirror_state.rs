//! Selection mirroring policy
//!
//! Keeps the PRIMARY selection synchronized with the editor's current text
//! selection, without clobbering selections made by other applications.

use crate::clipboard::{PrimarySelection, SUPPORTED_TARGETS, targets};

#[cfg(debug_assertions)]
use log::debug;

/// Who currently holds the PRIMARY selection, as far as we can tell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnershipState {
    /// Nothing mirrored yet, or shut down
    #[default]
    Idle,
    /// Our buffer is what PRIMARY serves
    Owned,
    /// Another application claimed PRIMARY with different content
    Superseded,
}

/// Source of editor text, addressed by absolute char offsets.
///
/// The host editor implements this so the mirror can extract the selected
/// text without holding a reference into the editor's buffer.
pub trait SelectionSource {
    /// Text in `[start, end)`. May return an empty string when the range
    /// no longer maps to any content.
    fn contents_range(&self, start: usize, end: usize) -> String;
}

/// Mirrors the editor's selection into the PRIMARY selection.
///
/// One instance per process, owned by the application and driven entirely
/// from the UI event loop. `buffer` holds the most recently selected text
/// and is non-empty only while we claim (or once claimed) PRIMARY; it is
/// released on shutdown or just before being replaced.
pub struct SelectionMirror<C: PrimarySelection> {
    buffer: Option<String>,
    state: OwnershipState,
    backend: C,
}

impl<C: PrimarySelection> SelectionMirror<C> {
    pub fn new(backend: C) -> Self {
        Self {
            buffer: None,
            state: OwnershipState::Idle,
            backend,
        }
    }

    /// The mirrored text, if any
    pub fn buffer(&self) -> Option<&str> {
        self.buffer.as_deref()
    }

    pub fn state(&self) -> OwnershipState {
        self.state
    }

    /// Host notification: the editor's selection changed.
    ///
    /// A non-empty selection replaces the buffer and claims PRIMARY. A
    /// cleared selection (start == end, e.g. a click elsewhere) re-claims
    /// only when PRIMARY still holds our text or is empty, so selections
    /// made in other applications survive. Offsets must satisfy
    /// `start <= end`; the host orders them before calling.
    pub fn on_selection_changed<S>(&mut self, start: usize, end: usize, source: &S)
    where
        S: SelectionSource + ?Sized,
    {
        if start != end {
            let text = source.contents_range(start, end);

            // Extraction of an empty range is silently ignored
            if text.is_empty() {
                return;
            }

            #[cfg(debug_assertions)]
            debug!("mirroring {} chars from [{}, {})", text.chars().count(), start, end);

            // Old contents are released by the replacement
            self.buffer = Some(text);
            self.reclaim();
        } else if self.buffer.is_some() {
            self.reclaim_if_unclaimed();
        }
    }

    /// Lost-ownership callback from the clipboard subsystem.
    ///
    /// Deliberately leaves the buffer alone: the text must stay available
    /// so a later cleared-selection check can re-claim it.
    pub fn ownership_lost(&mut self) {
        if self.state == OwnershipState::Owned {
            self.state = OwnershipState::Superseded;
        }
    }

    /// Provide callback: supplies the mirrored text for a requested target.
    ///
    /// Returns nothing for targets we never advertised, and nothing after
    /// shutdown.
    pub fn provide(&self, target: &str) -> Option<&str> {
        if !targets::is_supported(target) {
            return None;
        }
        self.buffer.as_deref()
    }

    /// Release the mirrored text.
    ///
    /// Ownership of PRIMARY is not explicitly relinquished; it lapses when
    /// the process exits.
    pub fn shutdown(&mut self) {
        self.buffer = None;
        self.state = OwnershipState::Idle;
    }

    /// Register as PRIMARY owner with the current buffer contents
    fn reclaim(&mut self) {
        let Some(text) = self.buffer.as_deref() else {
            return;
        };

        match self.backend.claim(SUPPORTED_TARGETS, text) {
            Ok(()) => self.state = OwnershipState::Owned,
            Err(_e) => {
                // Best-effort: a missing clipboard manager is a no-op
                #[cfg(debug_assertions)]
                debug!("PRIMARY claim failed: {:?}", _e);
            }
        }
    }

    /// Selection was cleared: re-claim PRIMARY unless another application
    /// has taken it over with different content in the meantime.
    fn reclaim_if_unclaimed(&mut self) {
        let current = match self.backend.read_text() {
            Ok(text) => text,
            Err(_e) => {
                #[cfg(debug_assertions)]
                debug!("PRIMARY read failed: {:?}", _e);
                return;
            }
        };

        match current {
            // Empty selection: safe to reclaim
            None => self.reclaim(),
            // Still our text: re-affirm ownership so it stays pasteable
            // after the visual selection disappears
            Some(ref text) if Some(text.as_str()) == self.buffer.as_deref() => self.reclaim(),
            // Another application owns PRIMARY; do not overwrite it
            Some(_) => self.state = OwnershipState::Superseded,
        }
    }
}

#[cfg(test)]
#[path = "mirror_state_tests.rs"]
mod mirror_state_tests;
