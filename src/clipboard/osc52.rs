//! OSC 52 PRIMARY selection backend
//!
//! Claims the selection via terminal escape sequences, useful for remote
//! sessions (SSH, tmux) where no display server is reachable. Write-only:
//! terminals do not expose a read path for security reasons.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

/// Claim the PRIMARY selection using an OSC 52 escape sequence
///
/// Format: \x1b]52;p;{base64}\x07
///
/// This writes the escape sequence directly to stdout, which terminal
/// emulators that support OSC 52 will interpret as a selection write.
pub fn claim(text: &str) -> ClipboardResult {
    let sequence = encode_osc52(text);

    // Write directly to stdout
    io::stdout()
        .write_all(sequence.as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;

    io::stdout().flush().map_err(|_| ClipboardError::WriteError)
}

/// Encode text for OSC 52 (exposed for testing)
///
/// The sequence consists of:
/// - `\x1b]52;` - OSC 52 introducer
/// - `p;` - selection class (p = primary, c = clipboard)
/// - `{base64}` - base64-encoded content
/// - `\x07` - string terminator (BEL)
pub fn encode_osc52(text: &str) -> String {
    let encoded = STANDARD.encode(text);
    format!("\x1b]52;p;{}\x07", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // *For any* input text, encoding it with OSC 52 format and then decoding
    // the base64 portion should produce the original text.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_osc52_encoding_roundtrip(text in ".*") {
            let encoded = encode_osc52(&text);

            // Verify the format: \x1b]52;p;{base64}\x07
            assert!(encoded.starts_with("\x1b]52;p;"), "Should start with OSC 52 prefix");
            assert!(encoded.ends_with("\x07"), "Should end with BEL terminator");

            // Extract the base64 portion
            let prefix = "\x1b]52;p;";
            let suffix = "\x07";
            let base64_part = &encoded[prefix.len()..encoded.len() - suffix.len()];

            // Decode and verify round-trip
            let decoded_bytes = STANDARD.decode(base64_part)
                .expect("Base64 decoding should succeed");
            let decoded_text = String::from_utf8(decoded_bytes)
                .expect("Decoded bytes should be valid UTF-8");

            assert_eq!(decoded_text, text, "Round-trip should preserve original text");
        }
    }

    #[test]
    fn test_encode_osc52_simple() {
        let result = encode_osc52("hello");
        // "hello" in base64 is "aGVsbG8="
        assert_eq!(result, "\x1b]52;p;aGVsbG8=\x07");
    }

    #[test]
    fn test_encode_osc52_empty() {
        let result = encode_osc52("");
        assert_eq!(result, "\x1b]52;p;\x07");
    }

    #[test]
    fn test_encode_osc52_targets_primary_selection() {
        // Selection class must be `p` so middle-click paste works;
        // `c` would write to the copy/paste clipboard instead.
        let result = encode_osc52("x");
        assert!(result.starts_with("\x1b]52;p;"));
    }

    #[test]
    fn test_encode_osc52_unicode() {
        let result = encode_osc52("日本語");
        assert!(result.starts_with("\x1b]52;p;"));
        assert!(result.ends_with("\x07"));

        // Verify round-trip
        let base64_part = &result[7..result.len() - 1];
        let decoded = STANDARD.decode(base64_part).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "日本語");
    }
}
