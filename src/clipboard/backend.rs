use crate::config::ClipboardBackend;

use super::{osc52, system};

pub type ClipboardResult = Result<(), ClipboardError>;

#[derive(Debug)]
pub enum ClipboardError {
    SystemUnavailable,
    ReadError,
    WriteError,
}

/// Access to the desktop's PRIMARY selection.
///
/// `claim` registers this process as the current owner of the selection,
/// advertising the given MIME targets. `read_text` is the synchronous
/// current-contents query; `Ok(None)` means the selection is empty, which
/// is a valid outcome rather than an error.
pub trait PrimarySelection {
    fn claim(&mut self, targets: &[&str], text: &str) -> ClipboardResult;
    fn read_text(&mut self) -> Result<Option<String>, ClipboardError>;
}

/// PRIMARY selection handle backed by the configured backend.
pub struct PrimaryClipboard {
    backend: ClipboardBackend,
    system: system::SystemPrimary,
}

impl PrimaryClipboard {
    pub fn new(backend: ClipboardBackend) -> Self {
        Self {
            backend,
            system: system::SystemPrimary::new(),
        }
    }
}

impl PrimarySelection for PrimaryClipboard {
    fn claim(&mut self, targets: &[&str], text: &str) -> ClipboardResult {
        match self.backend {
            ClipboardBackend::System => self.system.claim(targets, text),
            ClipboardBackend::Osc52 => osc52::claim(text),
            ClipboardBackend::Auto => self
                .system
                .claim(targets, text)
                .or_else(|_| osc52::claim(text)),
        }
    }

    fn read_text(&mut self) -> Result<Option<String>, ClipboardError> {
        match self.backend {
            // OSC 52 is write-only; an empty read degrades the mirror's
            // cleared-selection check to an unconditional reclaim.
            ClipboardBackend::Osc52 => Ok(None),
            ClipboardBackend::System | ClipboardBackend::Auto => self.system.read_text(),
        }
    }
}
