//! Clipboard MIME targets advertised when claiming the PRIMARY selection.

/// Plain-text targets offered to the desktop clipboard manager.
///
/// Matches the set GTK advertises for text owners so that middle-click
/// paste works across toolkits.
pub const SUPPORTED_TARGETS: &[&str] = &[
    "UTF8_STRING",
    "STRING",
    "TEXT",
    "COMPOUND_TEXT",
    "text/plain;charset=utf-8",
    "text/plain",
];

/// Check whether a requested target is one we can serve
pub fn is_supported(target: &str) -> bool {
    SUPPORTED_TARGETS.iter().any(|t| *t == target)
}
