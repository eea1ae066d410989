//! System PRIMARY selection backend (arboard)
//!
//! On Linux this targets the X11/Wayland PRIMARY selection. Other platforms
//! have no PRIMARY concept, so mirroring degrades to the regular clipboard.

use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult, PrimarySelection};

/// Handle to the system PRIMARY selection.
///
/// The underlying `Clipboard` must stay alive for as long as we own the
/// selection: on X11 arboard serves paste requests from a worker tied to
/// the handle's lifetime. Dropping it would drop our ownership with it.
pub struct SystemPrimary {
    clipboard: Option<Clipboard>,
}

impl SystemPrimary {
    pub fn new() -> Self {
        Self { clipboard: None }
    }

    /// Lazily connect to the display server's clipboard manager
    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        let handle = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?,
        };
        Ok(self.clipboard.insert(handle))
    }
}

impl PrimarySelection for SystemPrimary {
    // arboard negotiates the text targets itself; the advertised list is
    // fixed for all backends, so it is not forwarded here.
    fn claim(&mut self, _targets: &[&str], text: &str) -> ClipboardResult {
        let clipboard = self.handle()?;
        set_primary_text(clipboard, text).map_err(|_| ClipboardError::WriteError)
    }

    fn read_text(&mut self) -> Result<Option<String>, ClipboardError> {
        let clipboard = self.handle()?;
        match get_primary_text(clipboard) {
            Ok(text) => Ok(Some(text)),
            // An empty selection is a valid outcome, not an error
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(_) => Err(ClipboardError::ReadError),
        }
    }
}

#[cfg(target_os = "linux")]
fn set_primary_text(clipboard: &mut Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::{LinuxClipboardKind, SetExtLinux};

    clipboard
        .set()
        .clipboard(LinuxClipboardKind::Primary)
        .text(text.to_owned())
}

#[cfg(target_os = "linux")]
fn get_primary_text(clipboard: &mut Clipboard) -> Result<String, arboard::Error> {
    use arboard::{GetExtLinux, LinuxClipboardKind};

    clipboard.get().clipboard(LinuxClipboardKind::Primary).text()
}

#[cfg(not(target_os = "linux"))]
fn set_primary_text(clipboard: &mut Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_owned())
}

#[cfg(not(target_os = "linux"))]
fn get_primary_text(clipboard: &mut Clipboard) -> Result<String, arboard::Error> {
    clipboard.get_text()
}
