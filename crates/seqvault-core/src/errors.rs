// crates/seqvault-core/src/errors.rs
// ============================================================================
// Module: SeqVault Error Taxonomy
// Description: Closed set of error kinds with normalized, wrapped rendering.
// Purpose: Give every SeqVault failure a category label and a readable block.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every error surfaced by SeqVault belongs to exactly one of three kinds:
//! configuration errors (precondition and usage failures), terminal errors
//! (operator-facing interactive failures, reserved), and file/path errors
//! (filesystem and format validation failures). Errors carry a single
//! human-readable message, normalized at construction. [`render`] turns a
//! kind and message into the fixed-width block printed at the process
//! boundary; it is pure presentation and must not influence control flow.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Column width messages are wrapped to before rendering.
const WRAP_WIDTH: usize = 80;
/// ANSI sequence for the category label color.
const LABEL_COLOR: &str = "\x1b[1;31m";
/// ANSI reset sequence.
const LABEL_RESET: &str = "\x1b[0m";
/// Substituted when a caller constructs an error from an empty message.
const EMPTY_MESSAGE_FALLBACK: &str = "(no message was provided for this error)";

// ============================================================================
// SECTION: Error Kinds
// ============================================================================

/// Category of a SeqVault error.
///
/// # Invariants
/// - The set is closed; no other kind is surfaced to callers of validated
///   operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Precondition or usage failure (wrong version, missing path, bad
    /// arguments).
    Config,
    /// Interactive, operator-facing failure. Reserved; unused by the
    /// persistence core.
    Terminal,
    /// Filesystem or format validation failure.
    FilesNPaths,
}

impl ErrorKind {
    /// Returns the category label shown before the first rendered line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Config => "Config Error",
            Self::Terminal => "Terminal Error",
            Self::FilesNPaths => "File/Path Error",
        }
    }
}

// ============================================================================
// SECTION: Error Type
// ============================================================================

/// SeqVault error: one of three kinds, each wrapping a display message.
///
/// # Invariants
/// - The message is normalized (no run of two or more spaces) and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqVaultError {
    /// Precondition or usage failure.
    #[error("{}", render(ErrorKind::Config, .0))]
    Config(String),
    /// Operator-facing interactive failure.
    #[error("{}", render(ErrorKind::Terminal, .0))]
    Terminal(String),
    /// Filesystem or format validation failure.
    #[error("{}", render(ErrorKind::FilesNPaths, .0))]
    FilesNPaths(String),
}

impl SeqVaultError {
    /// Constructs a configuration error from a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(prepare_message(&message.into()))
    }

    /// Constructs a terminal error from a message.
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal(prepare_message(&message.into()))
    }

    /// Constructs a file/path error from a message.
    #[must_use]
    pub fn files_n_paths(message: impl Into<String>) -> Self {
        Self::FilesNPaths(prepare_message(&message.into()))
    }

    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::Terminal(_) => ErrorKind::Terminal,
            Self::FilesNPaths(_) => ErrorKind::FilesNPaths,
        }
    }

    /// Returns the normalized message carried by this error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Config(message) | Self::Terminal(message) | Self::FilesNPaths(message) => message,
        }
    }
}

/// Result alias for operations reporting through the SeqVault taxonomy.
pub type SeqVaultResult<T> = Result<T, SeqVaultError>;

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Collapses every run of two or more consecutive space characters into a
/// single space. Tabs, newlines, and all other characters pass through
/// unchanged. Total and idempotent.
#[must_use]
pub fn normalize_message(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut previous_was_space = false;
    for ch in text.chars() {
        if ch == ' ' {
            if !previous_was_space {
                normalized.push(ch);
            }
            previous_was_space = true;
        } else {
            normalized.push(ch);
            previous_was_space = false;
        }
    }
    normalized
}

/// Normalizes a caller-supplied message, substituting an explicit fallback
/// for empty input so no error ever renders with an empty message.
fn prepare_message(message: &str) -> String {
    let normalized = normalize_message(message);
    if normalized.is_empty() {
        EMPTY_MESSAGE_FALLBACK.to_string()
    } else {
        normalized
    }
}

// ============================================================================
// SECTION: Rendering
// ============================================================================

/// Renders a kind and message as the block printed at the process boundary:
/// the normalized message word-wrapped to 80 columns, every line padded to
/// the longest line's width, a colored `<label>: ` prefix on the first line,
/// continuation lines indented by the label width, and a blank line before
/// and after the block.
#[must_use]
pub fn render(kind: ErrorKind, message: &str) -> String {
    let normalized = normalize_message(message);
    let lines = wrap_message(&normalized, WRAP_WIDTH);
    let widest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let label = kind.label();
    let indent = " ".repeat(label.chars().count() + 2);
    let mut rendered = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let padding = " ".repeat(widest - line.chars().count());
        if index == 0 {
            rendered.push(format!("{LABEL_COLOR}{label}{LABEL_RESET}: {line}{padding}"));
        } else {
            rendered.push(format!("{indent}{line}{padding}"));
        }
    }
    format!("\n\n{}\n\n", rendered.join("\n"))
}

/// Greedily wraps a message into lines of at most `width` characters,
/// splitting on whitespace. Words longer than the width are broken into
/// width-sized pieces so no line ever exceeds the width.
fn wrap_message(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_width = 0_usize;
    for word in text.split_whitespace() {
        for piece in break_long_word(word, width) {
            let piece_width = piece.chars().count();
            let needed = if current.is_empty() {
                piece_width
            } else {
                current_width + 1 + piece_width
            };
            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += 1;
                }
                current.push_str(&piece);
                current_width += piece_width;
            } else {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current.push_str(&piece);
                current_width = piece_width;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Splits a single word into pieces no longer than `width` characters.
fn break_long_word(word: &str, width: usize) -> Vec<String> {
    if word.chars().count() <= width {
        return vec![word.to_string()];
    }
    let characters: Vec<char> = word.chars().collect();
    characters.chunks(width).map(|chunk| chunk.iter().collect()).collect()
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions and helpers are permitted."
    )]

    use super::ErrorKind;
    use super::SeqVaultError;
    use super::normalize_message;
    use super::render;
    use super::wrap_message;

    #[test]
    fn normalize_collapses_space_runs_only() {
        assert_eq!(normalize_message("a  b   c"), "a b c");
        assert_eq!(normalize_message("a\t\tb\n\nc"), "a\t\tb\n\nc");
        assert_eq!(normalize_message(" \t "), " \t ");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_message("x    y  z");
        assert_eq!(normalize_message(&once), once);
    }

    #[test]
    fn empty_message_is_defaulted_explicitly() {
        let error = SeqVaultError::config("");
        assert!(!error.message().is_empty());
    }

    #[test]
    fn wrap_respects_width_and_breaks_long_words() {
        let long_word = "x".repeat(95);
        let lines = wrap_message(&long_word, 80);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.chars().count() <= 80));
    }

    #[test]
    fn render_pads_lines_and_labels_first_line() {
        let message = "word ".repeat(40);
        let block = render(ErrorKind::Config, &message);
        assert!(block.starts_with("\n\n"));
        assert!(block.ends_with("\n\n"));
        assert!(block.contains("Config Error"));
        let body: Vec<&str> = block.trim_matches('\n').lines().collect();
        assert!(body.len() > 1);
        let continuation_indent = " ".repeat("Config Error".len() + 2);
        for line in &body[1 ..] {
            assert!(line.starts_with(&continuation_indent));
        }
    }

    #[test]
    fn kinds_carry_distinct_labels() {
        assert_eq!(ErrorKind::Config.label(), "Config Error");
        assert_eq!(ErrorKind::Terminal.label(), "Terminal Error");
        assert_eq!(ErrorKind::FilesNPaths.label(), "File/Path Error");
    }
}
