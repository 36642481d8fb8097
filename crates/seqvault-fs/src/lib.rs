// crates/seqvault-fs/src/lib.rs
// ============================================================================
// Module: SeqVault Filesystem Checks
// Description: Path/file validation and output directory management.
// Purpose: Validate filesystem inputs and outputs before SeqVault uses them.
// Dependencies: seqvault-core, serde_json, tempfile
// ============================================================================

//! ## Overview
//! Stateless predicates over filesystem paths and file contents (existence,
//! writability, delimiter consistency, JSON and FASTA well-formedness,
//! executable lookup, line counting), plus output directory creation with
//! injected reporters and temp-path helpers. Every check opens files
//! read-only and releases them on all exit paths; failures are reported
//! through the SeqVault error taxonomy.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod fasta;
pub mod output_dir;
pub mod temp;
pub mod validate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use output_dir::check_output_directory;
pub use output_dir::gen_output_directory;
pub use temp::get_temp_directory_path;
pub use temp::get_temp_file_path;
pub use validate::DEFAULT_FIELD_SEPARATOR;
pub use validate::get_num_lines_in_file;
pub use validate::is_file_exists;
pub use validate::is_file_fasta_formatted;
pub use validate::is_file_json_formatted;
pub use validate::is_file_tab_delimited;
pub use validate::is_output_file_writable;
pub use validate::is_program_exists;
