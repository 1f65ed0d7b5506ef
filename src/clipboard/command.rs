//! External clipboard utilities
//!
//! Shells out to wl-clipboard, xclip, xsel or pbcopy/pbpaste. Every child
//! process runs under a deadline and is killed when it overstays.

use std::io::{Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use super::backend::{AccessError, AccessResult, ClipboardAccess};

/// How often a running child is checked for exit.
const WAIT_STEP: Duration = Duration::from_millis(10);

/// A clipboard utility pair (reader and writer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    WlClipboard,
    Xclip,
    Xsel,
    Pasteboard,
}

impl Tool {
    /// Probe order for `auto` and `command` backends.
    pub const PROBE_ORDER: [Tool; 4] = [Tool::WlClipboard, Tool::Xclip, Tool::Xsel, Tool::Pasteboard];

    pub fn name(self) -> &'static str {
        match self {
            Tool::WlClipboard => "wl-clipboard",
            Tool::Xclip => "xclip",
            Tool::Xsel => "xsel",
            Tool::Pasteboard => "pbpaste",
        }
    }

    fn read_command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Tool::WlClipboard => ("wl-paste", &["--no-newline", "--type", "text"]),
            Tool::Xclip => ("xclip", &["-selection", "clipboard", "-o"]),
            Tool::Xsel => ("xsel", &["--clipboard", "--output"]),
            Tool::Pasteboard => ("pbpaste", &[]),
        }
    }

    fn write_command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Tool::WlClipboard => ("wl-copy", &["--type", "text/plain"]),
            Tool::Xclip => ("xclip", &["-selection", "clipboard", "-i"]),
            Tool::Xsel => ("xsel", &["--clipboard", "--input"]),
            Tool::Pasteboard => ("pbcopy", &[]),
        }
    }

    fn is_installed(self) -> bool {
        // wl-paste is often installed on X11 desktops too, where it cannot connect
        if self == Tool::WlClipboard && std::env::var_os("WAYLAND_DISPLAY").is_none() {
            return false;
        }
        which::which(self.read_command().0).is_ok() && which::which(self.write_command().0).is_ok()
    }
}

#[derive(Debug, Clone)]
pub struct CommandClipboard {
    tool: Tool,
    deadline: Duration,
}

impl CommandClipboard {
    pub fn new(tool: Tool, deadline: Duration) -> Self {
        Self { tool, deadline }
    }

    /// First installed utility in [`Tool::PROBE_ORDER`].
    pub fn detect(deadline: Duration) -> Option<Self> {
        Tool::PROBE_ORDER
            .into_iter()
            .find(|tool| tool.is_installed())
            .map(|tool| Self::new(tool, deadline))
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }
}

impl ClipboardAccess for CommandClipboard {
    fn name(&self) -> &'static str {
        self.tool.name()
    }

    fn read(&self) -> AccessResult<String> {
        let (program, args) = self.tool.read_command();
        let mut command = Command::new(program);
        command.args(args);

        let stdout = run_with_deadline(command, None, self.deadline)?;
        String::from_utf8(stdout).map_err(|_| AccessError::NonText)
    }

    fn write(&self, text: &str) -> AccessResult<()> {
        let (program, args) = self.tool.write_command();
        let mut command = Command::new(program);
        command.args(args);

        run_with_deadline(command, Some(text), self.deadline).map(|_| ())
    }
}

/// Spawn `command`, optionally feed it `input`, and collect stdout.
///
/// Writers get a null stdout: xclip and wl-copy fork a server that keeps
/// inherited pipes open long after the parent exits.
fn run_with_deadline(mut command: Command, input: Option<&str>, deadline: Duration) -> AccessResult<Vec<u8>> {
    let capture = input.is_none();
    command
        .stdin(if input.is_some() { Stdio::piped() } else { Stdio::null() })
        .stdout(if capture { Stdio::piped() } else { Stdio::null() })
        .stderr(Stdio::null());

    let mut child = command.spawn().map_err(|e| AccessError::Unavailable(e.to_string()))?;

    // Fed from a thread so a child that never reads still hits the deadline
    let writer = match (input, child.stdin.take()) {
        (Some(text), Some(mut stdin)) => {
            let bytes = text.as_bytes().to_vec();
            // stdin dropped at the end of the thread so the utility sees EOF
            Some(thread::spawn(move || stdin.write_all(&bytes)))
        }
        _ => None,
    };

    let reader = child.stdout.take().map(|mut stdout| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = stdout.read_to_end(&mut buf);
            buf
        })
    });

    let status = wait_until(&mut child, Instant::now() + deadline).ok_or(AccessError::Timeout(deadline))?;
    if !status.success() {
        return Err(AccessError::Failed(format!("exited with {}", status)));
    }

    if let Some(handle) = writer {
        match handle.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(AccessError::Failed(format!("writing input: {}", e))),
            Err(_) => return Err(AccessError::Failed("stdin writer panicked".into())),
        }
    }

    match reader {
        Some(handle) => handle
            .join()
            .map_err(|_| AccessError::Failed("stdout reader panicked".into())),
        None => Ok(Vec::new()),
    }
}

/// Wait for `child` until `deadline`; kill and reap it if it is still running.
fn wait_until(child: &mut Child, deadline: Instant) -> Option<ExitStatus> {
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Some(status),
            Ok(None) if Instant::now() >= deadline => break,
            Ok(None) => thread::sleep(WAIT_STEP),
            Err(e) => {
                log::debug!("try_wait failed: {}", e);
                break;
            }
        }
    }

    let _ = child.kill();
    let _ = child.wait();
    None
}
