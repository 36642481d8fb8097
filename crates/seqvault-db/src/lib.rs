// crates/seqvault-db/src/lib.rs
// ============================================================================
// Module: SeqVault Database
// Description: Versioned handle over an embedded SQLite database file.
// Purpose: Read and advance the schema version, manage metadata and tables.
// Dependencies: rusqlite, seqvault-core
// ============================================================================

//! ## Overview
//! This crate wraps one SQLite database file behind a minimal accessor: a
//! key/value metadata store (the `self` table) holding the schema version
//! tag, typed table creation from a closed column-type set, and a consuming
//! disconnect that flushes and closes the file. The handle assumes exclusive
//! single-writer access for the duration of one operation sequence.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod database;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use database::ColumnType;
pub use database::Database;
pub use database::METADATA_TABLE_NAME;
pub use database::VERSION_KEY;
pub use database::is_contigs_db;
