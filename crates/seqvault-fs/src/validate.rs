// crates/seqvault-fs/src/validate.rs
// ============================================================================
// Module: Path/File Validators
// Description: Stateless predicates over filesystem paths and file contents.
// Purpose: Reject unusable inputs before any SeqVault operation trusts them.
// Dependencies: seqvault-core, serde_json, tempfile
// ============================================================================

//! ## Overview
//! Each validator either returns `Ok(())` (or a counted value) or fails with
//! a file/path error naming the specific violation. Validators have no side
//! effects beyond read-only opens, except [`is_output_file_writable`], which
//! probes the target's parent directory with an unnamed temporary file that
//! is removed before the function returns.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

use seqvault_core::SeqVaultError;
use seqvault_core::SeqVaultResult;

use crate::fasta::SequenceSource;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Field separator assumed by tabular input files.
pub const DEFAULT_FIELD_SEPARATOR: char = '\t';

// ============================================================================
// SECTION: Existence & Writability
// ============================================================================

/// Checks that `path` is non-empty and names an existing filesystem entry.
///
/// # Errors
///
/// Returns a file/path error when the path is empty or nothing exists at it.
pub fn is_file_exists(path: &Path) -> SeqVaultResult<()> {
    if path.as_os_str().is_empty() {
        return Err(SeqVaultError::files_n_paths("No input file is declared..."));
    }
    if !path.exists() {
        return Err(SeqVaultError::files_n_paths(format!(
            "No such file: '{}' :/",
            path.display()
        )));
    }
    Ok(())
}

/// Checks that the parent directory of `path` is writable. Whether `path`
/// itself already exists is not checked.
///
/// # Errors
///
/// Returns a file/path error when the path is empty or the resolved parent
/// directory refuses writes.
pub fn is_output_file_writable(path: &Path) -> SeqVaultResult<()> {
    if path.as_os_str().is_empty() {
        return Err(SeqVaultError::files_n_paths("No output file is declared..."));
    }
    let absolute = std::path::absolute(path).map_err(|error| {
        SeqVaultError::files_n_paths(format!(
            "Failed to resolve '{}' to an absolute path: {error}",
            path.display()
        ))
    })?;
    let parent = absolute.parent().unwrap_or_else(|| Path::new("/"));
    if !directory_is_writable(parent) {
        return Err(SeqVaultError::files_n_paths(format!(
            "You do not have permission to generate the output file '{}'",
            path.display()
        )));
    }
    Ok(())
}

/// Reports whether a directory accepts new files, by briefly creating an
/// unnamed temporary file inside it.
pub(crate) fn directory_is_writable(directory: &Path) -> bool {
    tempfile::tempfile_in(directory).is_ok()
}

// ============================================================================
// SECTION: Format Checks
// ============================================================================

/// Checks that a tabular file uses `separator` consistently: after skipping
/// leading `#` comment lines, the first data line must contain the
/// separator, and every line in the file (comment lines included) must
/// split into the same number of fields.
///
/// # Errors
///
/// Returns a file/path error when the file is missing, contains only
/// comment lines, has a separator-free first data line, or has lines with
/// differing field counts.
pub fn is_file_tab_delimited(path: &Path, separator: char) -> SeqVaultResult<()> {
    is_file_exists(path)?;
    let content = fs::read_to_string(path).map_err(|error| {
        SeqVaultError::files_n_paths(format!(
            "Failed to read '{}': {error}",
            path.display()
        ))
    })?;
    let first_data_line = content
        .lines()
        .find(|line| !line.trim_matches(' ').starts_with('#'));
    let Some(first_data_line) = first_data_line else {
        return Err(SeqVaultError::files_n_paths(format!(
            "File '{}' contains only comment lines, so there is no data line to inspect.",
            path.display()
        )));
    };
    if first_data_line.split(separator).count() == 1 {
        return Err(SeqVaultError::files_n_paths(format!(
            "File '{}' does not seem to have TAB characters. Did you export this file on \
             MAC using EXCEL? :(",
            path.display()
        )));
    }
    let field_counts: BTreeSet<usize> =
        content.lines().map(|line| line.split(separator).count()).collect();
    if field_counts.len() != 1 {
        return Err(SeqVaultError::files_n_paths(format!(
            "Not all lines in the file '{}' have equal number of fields...",
            path.display()
        )));
    }
    Ok(())
}

/// Checks that a file parses as well-formed JSON.
///
/// # Errors
///
/// Returns a file/path error wrapping the parser's message when the content
/// is not valid JSON.
pub fn is_file_json_formatted(path: &Path) -> SeqVaultResult<()> {
    is_file_exists(path)?;
    let file = File::open(path).map_err(|error| {
        SeqVaultError::files_n_paths(format!(
            "Failed to open '{}': {error}",
            path.display()
        ))
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader::<_, serde_json::Value>(reader).map_err(|error| {
        SeqVaultError::files_n_paths(format!(
            "File '{}' does not seem to be a properly formatted JSON file ('{error}', \
             cries the library).",
            path.display()
        ))
    })?;
    Ok(())
}

/// Checks that a file opens as a FASTA record stream and that every record
/// is well-formed. Format knowledge lives in [`crate::fasta`].
///
/// # Errors
///
/// Returns a file/path error wrapping the reader's message when the file is
/// not FASTA-formatted.
pub fn is_file_fasta_formatted(path: &Path) -> SeqVaultResult<()> {
    is_file_exists(path)?;
    let wrap = |error: crate::fasta::FastaError| {
        SeqVaultError::files_n_paths(format!(
            "Someone is not happy with your FASTA file '{}' (this is what the lib says: \
             '{error}').",
            path.display()
        ))
    };
    let mut source = SequenceSource::open(path).map_err(wrap)?;
    while source.next_record().map_err(wrap)?.is_some() {}
    Ok(())
}

// ============================================================================
// SECTION: Executable Lookup
// ============================================================================

/// Checks that `program` is available: a name containing a path separator
/// must itself be an executable regular file; a bare name is searched for in
/// every `PATH` directory.
///
/// # Errors
///
/// Returns a file/path error when no executable match is found.
pub fn is_program_exists(program: &str) -> SeqVaultResult<()> {
    if program.contains(std::path::MAIN_SEPARATOR) {
        if is_executable_file(Path::new(program)) {
            return Ok(());
        }
    } else if let Some(search_path) = env::var_os("PATH") {
        for directory in env::split_paths(&search_path) {
            if is_executable_file(&directory.join(program)) {
                return Ok(());
            }
        }
    }
    Err(SeqVaultError::files_n_paths(format!("'{program}' is not found")))
}

/// Reports whether a path names an executable regular file.
#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .is_ok_and(|metadata| metadata.is_file() && metadata.permissions().mode() & 0o111 != 0)
}

/// Reports whether a path names a regular file (non-unix platforms carry no
/// executable bit).
#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|metadata| metadata.is_file())
}

// ============================================================================
// SECTION: Line Counting
// ============================================================================

/// Counts the lines in a file. A zero-byte file counts zero lines; a final
/// line without a trailing newline counts as one line.
///
/// # Errors
///
/// Returns a file/path error when the file cannot be opened or read.
pub fn get_num_lines_in_file(path: &Path) -> SeqVaultResult<usize> {
    is_file_exists(path)?;
    let metadata = fs::metadata(path).map_err(|error| {
        SeqVaultError::files_n_paths(format!(
            "Failed to stat '{}': {error}",
            path.display()
        ))
    })?;
    if metadata.len() == 0 {
        return Ok(0);
    }
    let file = File::open(path).map_err(|error| {
        SeqVaultError::files_n_paths(format!(
            "Failed to open '{}': {error}",
            path.display()
        ))
    })?;
    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();
    let mut num_lines = 0_usize;
    loop {
        buffer.clear();
        let bytes_read = reader.read_until(b'\n', &mut buffer).map_err(|error| {
            SeqVaultError::files_n_paths(format!(
                "Failed to read '{}': {error}",
                path.display()
            ))
        })?;
        if bytes_read == 0 {
            break;
        }
        num_lines += 1;
    }
    Ok(num_lines)
}
