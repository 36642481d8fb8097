// crates/seqvault-core/src/reporter.rs
// ============================================================================
// Module: SeqVault Terminal Reporters
// Description: Progress and warning reporters injected into long operations.
// Purpose: Keep user-facing status text out of control flow and off stdout.
// Dependencies: std::io
// ============================================================================

//! ## Overview
//! Long-running operations report status through two narrow traits:
//! [`ProgressReporter`] for begin/update/end status lines and
//! [`RunReporter`] for non-fatal warnings. Implementations write to stderr
//! and swallow write failures; reporting never influences control flow.
//! Reporters are passed explicitly by callers (no shared global instances);
//! the silent implementations serve as per-call defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;

// ============================================================================
// SECTION: Reporter Traits
// ============================================================================

/// Receiver for begin/update/end status text of one operation.
pub trait ProgressReporter {
    /// Starts a new progress section with a title.
    fn begin(&mut self, title: &str);

    /// Updates the current progress section's status line.
    fn update(&mut self, status: &str);

    /// Ends the current progress section.
    fn end(&mut self);
}

/// Receiver for non-fatal warnings raised during an operation.
pub trait RunReporter {
    /// Reports a non-fatal notice to the operator.
    fn warning(&mut self, message: &str);
}

// ============================================================================
// SECTION: Terminal Implementations
// ============================================================================

/// Progress reporter that writes status lines to stderr.
#[derive(Debug, Default)]
pub struct TerminalProgress {
    /// Title of the currently open section, if any.
    current: Option<String>,
}

impl TerminalProgress {
    /// Creates a terminal progress reporter with no open section.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: None,
        }
    }
}

impl ProgressReporter for TerminalProgress {
    fn begin(&mut self, title: &str) {
        self.current = Some(title.to_string());
        write_stderr_line(title);
    }

    fn update(&mut self, status: &str) {
        if self.current.is_some() {
            write_stderr_line(&format!("    {status}"));
        }
    }

    fn end(&mut self) {
        self.current = None;
    }
}

/// Run reporter that writes warnings to stderr.
#[derive(Debug, Default)]
pub struct TerminalRun;

impl RunReporter for TerminalRun {
    fn warning(&mut self, message: &str) {
        write_stderr_line(&format!("WARNING: {message}"));
    }
}

// ============================================================================
// SECTION: Silent Implementations
// ============================================================================

/// Progress reporter that discards all status text.
#[derive(Debug, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn begin(&mut self, _title: &str) {}

    fn update(&mut self, _status: &str) {}

    fn end(&mut self) {}
}

/// Run reporter that discards all warnings.
#[derive(Debug, Default)]
pub struct SilentRun;

impl RunReporter for SilentRun {
    fn warning(&mut self, _message: &str) {}
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Writes one line to stderr, discarding write failures. Status text is
/// best-effort and must never fail the surrounding operation.
fn write_stderr_line(message: &str) {
    let mut stderr = std::io::stderr();
    let _ = writeln!(&mut stderr, "{message}");
}

// ============================================================================
// SECTION: Tests
// ============================================================================
