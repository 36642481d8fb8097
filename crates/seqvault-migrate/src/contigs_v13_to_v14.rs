// crates/seqvault-migrate/src/contigs_v13_to_v14.rs
// ============================================================================
// Module: Contigs Database Migration v13 -> v14
// Description: Adds the single-copy gene taxonomy table and bumps the version.
// Purpose: Carry a contigs database from schema version 13 to 14 in place.
// Dependencies: seqvault-core, seqvault-db, seqvault-fs
// ============================================================================

//! ## Overview
//! The v13 -> v14 schema delta introduces the `scg_taxonomy` table holding
//! per-gene taxonomic assignments (identifier, gene caller id, gene name,
//! source, accession, percent identity, and seven taxonomic ranks from
//! domain down to species), then advances the version tag. Preconditions:
//! the path names an existing, recognized contigs database whose declared
//! version equals `13` exactly. On any failure the procedure stops where it
//! is; there is no automatic rollback, and a failure between the metadata
//! remove and the version write leaves the database without a version tag
//! until an operator intervenes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use seqvault_core::ProgressReporter;
use seqvault_core::SeqVaultError;
use seqvault_core::SeqVaultResult;
use seqvault_db::ColumnType;
use seqvault_db::Database;
use seqvault_db::VERSION_KEY;
use seqvault_db::is_contigs_db;
use seqvault_fs::is_file_exists;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Schema version this migration consumes.
pub const CURRENT_VERSION: &str = "13";
/// Schema version this migration produces.
pub const NEXT_VERSION: &str = "14";

/// Name of the table added by this migration.
pub const SCG_TAXONOMY_TABLE_NAME: &str = "scg_taxonomy";

/// Ordered column names of the single-copy gene taxonomy table.
pub const SCG_TAXONOMY_COLUMN_NAMES: [&str; 13] = [
    "id",
    "gene_caller_id",
    "gene_name",
    "source",
    "accession",
    "pourcentage_identity",
    "t_domain",
    "t_phylum",
    "t_class",
    "t_order",
    "t_family",
    "t_genus",
    "t_species",
];

/// Column types parallel to [`SCG_TAXONOMY_COLUMN_NAMES`].
pub const SCG_TAXONOMY_COLUMN_TYPES: [ColumnType; 13] = [
    ColumnType::Numeric,
    ColumnType::Numeric,
    ColumnType::Text,
    ColumnType::Text,
    ColumnType::Text,
    ColumnType::Text,
    ColumnType::Text,
    ColumnType::Text,
    ColumnType::Text,
    ColumnType::Text,
    ColumnType::Text,
    ColumnType::Text,
    ColumnType::Text,
];

// ============================================================================
// SECTION: Migration Procedure
// ============================================================================

/// Migrates the contigs database at `db_path` from version 13 to version 14.
///
/// Runs once per database: validate preconditions, create the taxonomy
/// table, swap the version tag, disconnect. Errors propagate from whichever
/// step failed; nothing is retried or rolled back.
///
/// # Errors
///
/// Returns a configuration error when the path is empty, the file is not a
/// recognized contigs database, or its version is not `13`; a file/path
/// error when the path names nothing; and whatever the handle layer raises
/// for schema failures (e.g. the table already exists from a partial prior
/// run).
pub fn migrate(db_path: &Path, progress: &mut dyn ProgressReporter) -> SeqVaultResult<()> {
    if db_path.as_os_str().is_empty() {
        return Err(SeqVaultError::config("No database path is given."));
    }
    is_file_exists(db_path)?;
    is_contigs_db(db_path)?;

    let contigs_db = Database::open(db_path)?;
    let version = contigs_db.get_version()?;
    if version != CURRENT_VERSION {
        return Err(SeqVaultError::config(format!(
            "Version of this contigs database is not {CURRENT_VERSION} (hence, this \
             script cannot really do anything)."
        )));
    }

    progress.begin("Upgrading the contigs database");
    progress.update("Creating the single-copy gene taxonomy table");
    contigs_db.create_table(
        SCG_TAXONOMY_TABLE_NAME,
        &SCG_TAXONOMY_COLUMN_NAMES,
        &SCG_TAXONOMY_COLUMN_TYPES,
    )?;

    progress.update("Updating the version tag");
    contigs_db.remove_meta_key_value_pair(VERSION_KEY)?;
    contigs_db.set_version(NEXT_VERSION)?;

    progress.update("Committing changes");
    contigs_db.disconnect()?;

    progress.end();
    Ok(())
}
