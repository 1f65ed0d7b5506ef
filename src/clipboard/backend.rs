use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::config::{ClipboardBackend, ClipboardConfig};
use crate::error::StartupError;

use super::command::CommandClipboard;
use super::osc52::Osc52Clipboard;
use super::system::SystemClipboard;

/// A failed clipboard read or write. Never fatal: the monitor skips the
/// cycle and tries again on the next poll.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard access timed out after {0:?}")]
    Timeout(Duration),

    #[error("clipboard holds non-text content")]
    NonText,

    #[error("clipboard backend cannot read")]
    Unsupported,

    #[error("clipboard command failed: {0}")]
    Failed(String),
}

pub type AccessResult<T> = Result<T, AccessError>;

/// Raw access to one clipboard mechanism.
///
/// Implementations may block; [`Clipboard`] bounds every call with a timeout.
pub trait ClipboardAccess: Send + Sync {
    fn name(&self) -> &'static str;

    fn read(&self) -> AccessResult<String>;

    fn write(&self, text: &str) -> AccessResult<()>;

    fn can_read(&self) -> bool {
        true
    }
}

/// Clipboard adapter used by the monitor and the viewer.
///
/// Holds no state beyond the selected mechanism. Each call runs on a helper
/// thread and is abandoned once `timeout` elapses, so a wedged clipboard
/// owner cannot freeze the poll loop.
#[derive(Clone)]
pub struct Clipboard {
    access: Arc<dyn ClipboardAccess>,
    timeout: Duration,
}

impl std::fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clipboard")
            .field("backend", &self.access.name())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Clipboard {
    pub fn new(access: Arc<dyn ClipboardAccess>, timeout: Duration) -> Self {
        Self { access, timeout }
    }

    /// Resolve the configured backend to a concrete mechanism.
    ///
    /// Fails with [`StartupError::ClipboardMissing`] when nothing usable
    /// exists on this system.
    pub fn from_config(config: &ClipboardConfig) -> Result<Self, StartupError> {
        let timeout = config.timeout();
        let access: Arc<dyn ClipboardAccess> = match config.backend {
            ClipboardBackend::Command => {
                Arc::new(CommandClipboard::detect(timeout).ok_or(StartupError::ClipboardMissing)?)
            }
            ClipboardBackend::System => {
                Arc::new(SystemClipboard::probe().ok_or(StartupError::ClipboardMissing)?)
            }
            ClipboardBackend::Osc52 => Arc::new(Osc52Clipboard),
            ClipboardBackend::Auto => match CommandClipboard::detect(timeout) {
                Some(command) => Arc::new(command),
                None => Arc::new(SystemClipboard::probe().ok_or(StartupError::ClipboardMissing)?),
            },
        };

        log::debug!("Using clipboard backend {}", access.name());
        Ok(Self::new(access, timeout))
    }

    pub fn backend_name(&self) -> &'static str {
        self.access.name()
    }

    pub fn can_read(&self) -> bool {
        self.access.can_read()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn read(&self) -> AccessResult<String> {
        let access = Arc::clone(&self.access);
        with_timeout(self.timeout, move || access.read())
    }

    pub fn write(&self, text: &str) -> AccessResult<()> {
        let access = Arc::clone(&self.access);
        let text = text.to_string();
        with_timeout(self.timeout, move || access.write(&text))
    }
}

/// Run `f` on a helper thread and wait at most `timeout` for its result.
///
/// On timeout the helper is detached; its eventual result is dropped.
pub(crate) fn with_timeout<T, F>(timeout: Duration, f: F) -> AccessResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> AccessResult<T> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("clipboard-access".into())
        .spawn(move || {
            let _ = tx.send(f());
        })
        .map_err(|e| AccessError::Unavailable(e.to_string()))?;

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => Err(AccessError::Timeout(timeout)),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(AccessError::Failed(
            "clipboard helper thread exited without a result".into(),
        )),
    }
}
