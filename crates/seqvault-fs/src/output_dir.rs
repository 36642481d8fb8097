// crates/seqvault-fs/src/output_dir.rs
// ============================================================================
// Module: Output Directory Manager
// Description: Validation and creation of output directories.
// Purpose: Guarantee a writable output directory, refusing silent overwrite.
// Dependencies: seqvault-core
// ============================================================================

//! ## Overview
//! [`check_output_directory`] is pure validation: it resolves a path and
//! refuses to reuse an existing directory unless told otherwise.
//! [`gen_output_directory`] creates (and optionally first removes) the
//! directory and verifies write permission, reporting the removal through an
//! injected [`RunReporter`] and ending the injected [`ProgressReporter`]
//! before every failure return.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use seqvault_core::ProgressReporter;
use seqvault_core::RunReporter;
use seqvault_core::SeqVaultError;
use seqvault_core::SeqVaultResult;

use crate::validate::directory_is_writable;

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Resolves an output directory path to its absolute form, refusing an
/// existing directory unless `ok_if_exists` is set. Validation only; nothing
/// is created.
///
/// # Errors
///
/// Returns a file/path error when the path is empty, cannot be resolved, or
/// names an existing directory while `ok_if_exists` is false.
pub fn check_output_directory(
    output_directory: &Path,
    ok_if_exists: bool,
) -> SeqVaultResult<PathBuf> {
    if output_directory.as_os_str().is_empty() {
        return Err(SeqVaultError::files_n_paths(
            "Sorry. You must declare an output directory path.",
        ));
    }
    let absolute = std::path::absolute(output_directory).map_err(|error| {
        SeqVaultError::files_n_paths(format!(
            "Failed to resolve '{}' to an absolute path: {error}",
            output_directory.display()
        ))
    })?;
    if absolute.exists() && !ok_if_exists {
        return Err(SeqVaultError::files_n_paths(
            "The output directory already exists. SeqVault does not like overwriting stuff.",
        ));
    }
    Ok(absolute)
}

// ============================================================================
// SECTION: Creation
// ============================================================================

/// Ensures an output directory exists and is writable. When the directory
/// exists and `delete_if_exists` is set, it is recursively removed first and
/// the removal is reported as a warning. The progress reporter is ended
/// before every failure return.
///
/// # Errors
///
/// Returns a file/path error when removal fails, creation fails, or the
/// resulting directory refuses writes.
pub fn gen_output_directory(
    output_directory: &Path,
    progress: &mut dyn ProgressReporter,
    run: &mut dyn RunReporter,
    delete_if_exists: bool,
) -> SeqVaultResult<PathBuf> {
    if output_directory.exists() && delete_if_exists {
        run.warning(&format!(
            "gen_output_directory: the client asked the existing directory '{}' to be \
             removed.. Just so you know :/",
            output_directory.display()
        ));
        if let Err(error) = fs::remove_dir_all(output_directory) {
            progress.end();
            return Err(SeqVaultError::files_n_paths(format!(
                "I was instructed to remove this directory, but I failed: '{}' ({error}) :/",
                output_directory.display()
            )));
        }
    }

    if !output_directory.exists()
        && let Err(error) = fs::create_dir_all(output_directory)
    {
        progress.end();
        return Err(SeqVaultError::files_n_paths(format!(
            "Output directory does not exist (attempt to create one failed as well): '{}' \
             ({error})",
            output_directory.display()
        )));
    }

    if !directory_is_writable(output_directory) {
        progress.end();
        return Err(SeqVaultError::files_n_paths(format!(
            "You do not have write permission for the output directory: '{}'",
            output_directory.display()
        )));
    }

    Ok(output_directory.to_path_buf())
}
