//! copysel library - copy-on-select selection mirroring
//!
//! This library exposes the mirroring policy and clipboard backends so they
//! can be tested without a terminal or display server.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod error;
pub mod mirror;
pub mod notification;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use mirror::{OwnershipState, SelectionMirror, SelectionSource};
