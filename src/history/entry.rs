use std::fmt;

use serde::Serialize;

/// One clipboard value kept in history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClipboardEntry {
    content: String,
}

impl ClipboardEntry {
    /// Returns `None` for empty or whitespace-only content, which is never stored.
    pub fn new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count().max(1)
    }

    pub fn is_multiline(&self) -> bool {
        self.line_count() > 1
    }

    /// One-line rendering for lists: first non-blank line, cut to
    /// `max_chars` with `...`, plus a `[+N lines]` marker when more follow.
    pub fn summary(&self, max_chars: usize) -> String {
        let trimmed = self.content.trim();
        let first_line = trimmed.lines().next().unwrap_or_default();

        let mut summary = if first_line.chars().count() > max_chars {
            let keep = max_chars.saturating_sub(3);
            let mut cut: String = first_line.chars().take(keep).collect();
            cut.push_str("...");
            cut
        } else {
            first_line.to_string()
        };

        let extra_lines = trimmed.lines().count().saturating_sub(1);
        if extra_lines > 0 {
            summary.push_str(&format!(" [+{} lines]", extra_lines));
        }

        summary
    }
}

impl fmt::Display for ClipboardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl AsRef<str> for ClipboardEntry {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_content_is_rejected() {
        assert!(ClipboardEntry::new("").is_none());
        assert!(ClipboardEntry::new("   ").is_none());
        assert!(ClipboardEntry::new("\n\t \n").is_none());
    }

    #[test]
    fn test_content_is_kept_verbatim() {
        let entry = ClipboardEntry::new("  padded  ").unwrap();
        assert_eq!(entry.content(), "  padded  ");
    }

    #[test]
    fn test_summary_short_single_line() {
        let entry = ClipboardEntry::new("hello").unwrap();
        assert_eq!(entry.summary(60), "hello");
        assert!(!entry.is_multiline());
    }

    #[test]
    fn test_summary_truncates_long_line() {
        let entry = ClipboardEntry::new("a".repeat(80)).unwrap();
        let summary = entry.summary(60);
        assert_eq!(summary.chars().count(), 60);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_summary_marks_extra_lines() {
        let entry = ClipboardEntry::new("fn main() {\n    println!();\n}").unwrap();
        assert_eq!(entry.summary(60), "fn main() { [+2 lines]");
        assert_eq!(entry.line_count(), 3);
    }

    #[test]
    fn test_summary_skips_leading_blank_lines() {
        let entry = ClipboardEntry::new("\n\nsecond").unwrap();
        assert_eq!(entry.summary(60), "second");
    }

    #[test]
    fn test_summary_counts_chars_not_bytes() {
        let entry = ClipboardEntry::new("日本語テキスト").unwrap();
        assert_eq!(entry.summary(5), "日本...");
    }
}
