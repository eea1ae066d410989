//! PRIMARY selection access for copysel
//!
//! Provides selection backends with support for:
//! - System PRIMARY selection (via arboard, X11/Wayland on Linux)
//! - OSC 52 escape sequences (for remote terminals, write-only)
//! - Auto mode (system with OSC 52 fallback)

mod backend;
mod osc52;
mod system;
pub mod targets;

pub use backend::{ClipboardError, ClipboardResult, PrimaryClipboard, PrimarySelection};
pub use targets::SUPPORTED_TARGETS;
