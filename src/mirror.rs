//! Selection mirroring for copysel
//!
//! The policy that keeps the X11 PRIMARY selection in sync with the
//! editor's current selection. Testable without a display server through
//! the `PrimarySelection` and `SelectionSource` seams.

mod mirror_state;

pub use mirror_state::{OwnershipState, SelectionMirror, SelectionSource};
