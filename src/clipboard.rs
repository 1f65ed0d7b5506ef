//! Clipboard access for clipstash
//!
//! Provides a timeout-bounded adapter over several mechanisms:
//! - External utilities (wl-clipboard, xclip, xsel, pbcopy/pbpaste)
//! - System clipboard (via arboard)
//! - OSC 52 escape sequences (write-only, for remote terminals)
//! - Auto mode (external utility with system clipboard fallback)

mod backend;
mod command;
mod osc52;
mod system;

pub use backend::{AccessError, AccessResult, Clipboard, ClipboardAccess};
pub use command::{CommandClipboard, Tool};
pub use osc52::Osc52Clipboard;
pub use system::SystemClipboard;
