use arboard::{Clipboard, Error};

use super::backend::{AccessError, AccessResult, ClipboardAccess};

/// In-process system clipboard via arboard.
///
/// On X11 the copied text only lives as long as some process owns the
/// selection, so `auto` prefers an external utility when one is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Returns `Some` when a system clipboard can be opened at all.
    pub fn probe() -> Option<Self> {
        Clipboard::new().ok().map(|_| SystemClipboard)
    }
}

impl ClipboardAccess for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn read(&self) -> AccessResult<String> {
        let mut clipboard = Clipboard::new().map_err(map_error)?;
        clipboard.get_text().map_err(map_error)
    }

    fn write(&self, text: &str) -> AccessResult<()> {
        let mut clipboard = Clipboard::new().map_err(map_error)?;
        clipboard.set_text(text).map_err(map_error)
    }
}

fn map_error(error: Error) -> AccessError {
    match error {
        Error::ContentNotAvailable | Error::ConversionFailure => AccessError::NonText,
        Error::ClipboardNotSupported => AccessError::Unavailable("no system clipboard".into()),
        other => AccessError::Failed(other.to_string()),
    }
}
