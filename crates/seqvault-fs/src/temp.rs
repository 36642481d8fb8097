// crates/seqvault-fs/src/temp.rs
// ============================================================================
// Module: Temporary Path Helpers
// Description: Creation of caller-owned temporary files and directories.
// Purpose: Hand out temp paths whose cleanup belongs to the caller.
// Dependencies: seqvault-core, tempfile
// ============================================================================

//! ## Overview
//! Thin wrappers over the `tempfile` crate that persist what they create:
//! the returned paths survive the call, and removing them is the caller's
//! responsibility.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use seqvault_core::SeqVaultError;
use seqvault_core::SeqVaultResult;
use tempfile::NamedTempFile;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Creates a new temporary directory and returns its path. The directory is
/// not removed automatically.
///
/// # Errors
///
/// Returns a file/path error when the directory cannot be created.
pub fn get_temp_directory_path() -> SeqVaultResult<PathBuf> {
    let directory = tempfile::tempdir().map_err(|error| {
        SeqVaultError::files_n_paths(format!("Failed to create a temporary directory: {error}"))
    })?;
    Ok(directory.keep())
}

/// Creates a new empty temporary file and returns its path. The file is not
/// removed automatically.
///
/// # Errors
///
/// Returns a file/path error when the file cannot be created or persisted.
pub fn get_temp_file_path() -> SeqVaultResult<PathBuf> {
    let file = NamedTempFile::new().map_err(|error| {
        SeqVaultError::files_n_paths(format!("Failed to create a temporary file: {error}"))
    })?;
    let (_, path) = file.keep().map_err(|error| {
        SeqVaultError::files_n_paths(format!("Failed to persist a temporary file: {error}"))
    })?;
    Ok(path)
}
