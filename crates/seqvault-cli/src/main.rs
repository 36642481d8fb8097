// crates/seqvault-cli/src/main.rs
// ============================================================================
// Module: SeqVault Migration CLI Entry Point
// Description: Command-line driver for the contigs v13 -> v14 migration.
// Purpose: Take one database path, run the migration, report the outcome.
// Dependencies: clap, seqvault-core, seqvault-migrate
// ============================================================================

//! ## Overview
//! A single-purpose upgrade command: it takes the path of a contigs database
//! at schema version 13 and migrates it in place to version 14. Success
//! exits 0 with progress text only; failure prints the rendered error block
//! to stderr and exits non-zero. This is the only place SeqVault errors are
//! caught for final reporting.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use seqvault_core::SeqVaultResult;
use seqvault_core::TerminalProgress;
use seqvault_migrate::contigs_v13_to_v14;

// ============================================================================
// SECTION: Arguments
// ============================================================================

/// Upgrades a contigs database from schema version 13 to version 14.
#[derive(Debug, Parser)]
#[command(name = "seqvault-migrate-contigs", version)]
struct Cli {
    /// Contigs database at version 13.
    #[arg(value_name = "CONTIGS_DB")]
    contigs_db: PathBuf,
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => emit_error(&error.to_string()),
    }
}

/// Parses arguments and runs the migration with terminal reporters.
fn run() -> SeqVaultResult<ExitCode> {
    let cli = Cli::parse();
    let mut progress = TerminalProgress::new();
    contigs_v13_to_v14::migrate(&cli.contigs_db, &mut progress)?;
    Ok(ExitCode::SUCCESS)
}

/// Writes a rendered error block to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let mut stderr = std::io::stderr();
    let _ = writeln!(&mut stderr, "{message}");
    ExitCode::FAILURE
}
