// crates/seqvault-core/src/lib.rs
// ============================================================================
// Module: SeqVault Core
// Description: Error taxonomy and terminal reporting for the SeqVault
//              persistence layer.
// Purpose: Provide the diagnostics every other SeqVault crate reports through.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! This crate defines the closed error taxonomy used throughout SeqVault
//! (configuration, terminal, and file/path errors), the message
//! normalization and rendering rules applied before any error reaches a
//! user, and the progress/warning reporter traits injected into long-running
//! operations. Rendering is pure presentation and never alters control flow.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod errors;
pub mod reporter;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use errors::ErrorKind;
pub use errors::SeqVaultError;
pub use errors::SeqVaultResult;
pub use errors::normalize_message;
pub use errors::render;
pub use reporter::ProgressReporter;
pub use reporter::RunReporter;
pub use reporter::SilentProgress;
pub use reporter::SilentRun;
pub use reporter::TerminalProgress;
pub use reporter::TerminalRun;
