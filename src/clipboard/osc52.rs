//! OSC 52 clipboard backend
//!
//! Sets the clipboard through a terminal escape sequence, which works over
//! SSH and inside tmux. Terminals do not answer OSC 52 queries reliably, so
//! this backend is write-only and the monitor refuses it.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{AccessError, AccessResult, ClipboardAccess};

#[derive(Debug, Clone, Copy, Default)]
pub struct Osc52Clipboard;

impl ClipboardAccess for Osc52Clipboard {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn read(&self) -> AccessResult<String> {
        Err(AccessError::Unsupported)
    }

    fn write(&self, text: &str) -> AccessResult<()> {
        let sequence = encode_osc52(text);
        let mut stdout = io::stdout();

        stdout
            .write_all(sequence.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| AccessError::Failed(e.to_string()))
    }

    fn can_read(&self) -> bool {
        false
    }
}

/// Encode text for OSC 52
///
/// Format: \x1b]52;c;{base64}\x07
///
/// - `\x1b]52;` - OSC 52 introducer
/// - `c;` - clipboard selection (c = clipboard, p = primary)
/// - `{base64}` - base64-encoded content
/// - `\x07` - string terminator (BEL)
pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_osc52_format() {
        assert_eq!(encode_osc52("hello"), "\x1b]52;c;aGVsbG8=\x07");
    }

    #[test]
    fn test_encode_osc52_multiline() {
        let encoded = encode_osc52("a\nb");
        let payload = encoded
            .strip_prefix("\x1b]52;c;")
            .and_then(|s| s.strip_suffix('\x07'))
            .unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), b"a\nb");
    }

    #[test]
    fn test_read_is_unsupported() {
        assert_eq!(Osc52Clipboard.read(), Err(AccessError::Unsupported));
        assert!(!Osc52Clipboard.can_read());
    }
}
