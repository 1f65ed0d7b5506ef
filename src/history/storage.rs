//! On-disk history format
//!
//! One record per line, newest first. Inside a record `\` is written as
//! `\\`, LF as `\n` and CR as `\r`, so multi-line clips survive a round
//! trip while ordinary single-line text is stored verbatim. A leading `-`
//! is written as `\-`, so no record can look like the legacy separator.
//!
//! Files written by older clipboard-history scripts, which put entries
//! between `---CLIPBOARD_ENTRY_SEPARATOR---` lines, are still readable.

use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use super::entry::ClipboardEntry;

const HISTORY_FILE: &str = ".clipboard_history";
const LEGACY_SEPARATOR: &str = "---CLIPBOARD_ENTRY_SEPARATOR---";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read history file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("history file {path} is not valid UTF-8")]
    Encoding { path: PathBuf },

    #[error("failed to write history file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

pub fn default_history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(HISTORY_FILE)
}

/// Read up to `capacity` entries. A missing file is an empty history.
pub fn load_history(path: &Path, capacity: usize) -> Result<Vec<ClipboardEntry>, PersistenceError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(PersistenceError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let contents = String::from_utf8(bytes).map_err(|_| PersistenceError::Encoding {
        path: path.to_path_buf(),
    })?;

    Ok(parse_history(&contents, capacity))
}

/// Atomically replace `path` with `entries`.
///
/// The temp file lives next to the target so the final rename never
/// crosses a filesystem; readers see either the old or the new history.
pub fn save_history(path: &Path, entries: &[ClipboardEntry]) -> Result<(), PersistenceError> {
    let write_err = |source: io::Error| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(write_err)?;

    let mut file = NamedTempFile::new_in(parent).map_err(write_err)?;
    file.write_all(serialize_history(entries).as_bytes())
        .map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

pub fn serialize_history(entries: &[ClipboardEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&encode_record(entry.content()));
        out.push('\n');
    }
    out
}

/// Parse file contents, skipping blanks and repeats, keeping the first `capacity`.
pub fn parse_history(contents: &str, capacity: usize) -> Vec<ClipboardEntry> {
    let records: Vec<String> = if is_legacy_format(contents) {
        contents
            .split(LEGACY_SEPARATOR)
            .map(|chunk| chunk.trim().to_string())
            .collect()
    } else {
        contents.lines().map(decode_record).collect()
    };

    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter_map(ClipboardEntry::new)
        .filter(|entry| seen.insert(entry.content().to_string()))
        .take(capacity)
        .collect()
}

fn is_legacy_format(contents: &str) -> bool {
    contents.lines().any(|line| line == LEGACY_SEPARATOR)
}

pub fn encode_record(content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 1);
    for (i, c) in content.chars().enumerate() {
        match c {
            '-' if i == 0 => out.push_str("\\-"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Inverse of [`encode_record`]. Unknown escapes are kept literally.
pub fn decode_record(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('-') => out.push('-'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
