use thiserror::Error;

use crate::clipboard::AccessError;
use crate::history::{IndexError, PersistenceError};

/// Failures that stop the process before the monitor or viewer can run.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(
        "no clipboard mechanism available.\n\nInstall one of: wl-clipboard, xclip, xsel (or run under a desktop session)"
    )]
    ClipboardMissing,

    #[error("clipboard backend '{0}' cannot read the clipboard; choose auto, system or command")]
    WriteOnlyBackend(&'static str),
}

#[derive(Debug, Error)]
pub enum ClipstashError {
    #[error(transparent)]
    Startup(#[from] StartupError),

    #[error("Clipboard error: {0}")]
    Access(#[from] AccessError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Index(#[from] IndexError),
}
