// crates/seqvault-db/tests/database_unit.rs
// ============================================================================
// Module: Versioned Database Handle Unit Tests
// Description: Tests for metadata access, table creation, and disconnect.
// Purpose: Validate version reads, closed column types, no-op removals,
//          and structural recognition of contigs databases.
// ============================================================================

//! ## Overview
//! Unit-level tests for the database handle:
//! - Version tag reads, including the malformed (missing-entry) case
//! - Table creation with ordered typed columns, duplicate refusal, and
//!   parallel-list length checks
//! - Metadata removal (absent key is a no-op) and atomic version overwrite
//! - Structural recognition of contigs databases by type marker

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::path::Path;
use std::path::PathBuf;

use rusqlite::Connection;
use rusqlite::params;
use seqvault_core::ErrorKind;
use seqvault_db::ColumnType;
use seqvault_db::Database;
use seqvault_db::is_contigs_db;
use tempfile::TempDir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn seed_database(directory: &TempDir, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = directory.path().join(name);
    let connection = Connection::open(&path).expect("create fixture db");
    connection
        .execute_batch("CREATE TABLE self (key TEXT, value TEXT);")
        .expect("create metadata table");
    for (key, value) in entries {
        connection
            .execute("INSERT INTO self (key, value) VALUES (?1, ?2)", params![key, value])
            .expect("seed metadata");
    }
    connection.close().map_err(|(_, error)| error).expect("close fixture db");
    path
}

fn contigs_db_at(directory: &TempDir, version: &str) -> PathBuf {
    seed_database(directory, "CONTIGS.db", &[("db_type", "contigs"), ("version", version)])
}

// ============================================================================
// SECTION: Version Tag
// ============================================================================

#[test]
fn get_version_reads_the_stored_tag() {
    let directory = TempDir::new().expect("tempdir");
    let path = contigs_db_at(&directory, "13");
    let database = Database::open(&path).expect("open");
    assert_eq!(database.get_version().expect("version"), "13");
    database.disconnect().expect("disconnect");
}

#[test]
fn missing_version_entry_is_a_config_error() {
    let directory = TempDir::new().expect("tempdir");
    let path = seed_database(&directory, "broken.db", &[("db_type", "contigs")]);
    let database = Database::open(&path).expect("open");
    let error = database.get_version().expect_err("no version entry");
    assert_eq!(error.kind(), ErrorKind::Config);
}

#[test]
fn set_version_overwrites_the_sole_entry() {
    let directory = TempDir::new().expect("tempdir");
    let path = contigs_db_at(&directory, "13");
    let database = Database::open(&path).expect("open");
    database.set_version("14").expect("set version");
    assert_eq!(database.get_version().expect("version"), "14");
    database.disconnect().expect("disconnect");
    let connection = Connection::open(&path).expect("reopen");
    let count: i64 = connection
        .query_row("SELECT count(*) FROM self WHERE key = 'version'", [], |row| row.get(0))
        .expect("count versions");
    assert_eq!(count, 1);
}

// ============================================================================
// SECTION: Metadata Store
// ============================================================================

#[test]
fn removing_an_absent_key_is_a_no_op() {
    let directory = TempDir::new().expect("tempdir");
    let path = contigs_db_at(&directory, "13");
    let database = Database::open(&path).expect("open");
    database.remove_meta_key_value_pair("no_such_key").expect("no-op removal");
    assert_eq!(database.get_version().expect("version"), "13");
}

#[test]
fn meta_values_round_trip() {
    let directory = TempDir::new().expect("tempdir");
    let path = contigs_db_at(&directory, "13");
    let database = Database::open(&path).expect("open");
    database.set_meta_value("creation_date", "1584000000").expect("set");
    assert_eq!(
        database.get_meta_value("creation_date").expect("get"),
        Some("1584000000".to_string())
    );
    assert_eq!(database.get_meta_value("absent").expect("get"), None);
}

// ============================================================================
// SECTION: Table Creation
// ============================================================================

#[test]
fn create_table_persists_ordered_typed_columns() {
    let directory = TempDir::new().expect("tempdir");
    let path = contigs_db_at(&directory, "13");
    let database = Database::open(&path).expect("open");
    database
        .create_table(
            "genes",
            &["gene_caller_id", "gene_name"],
            &[ColumnType::Numeric, ColumnType::Text],
        )
        .expect("create table");
    assert!(database.table_exists("genes").expect("exists"));
    database.disconnect().expect("disconnect");
    let connection = Connection::open(&path).expect("reopen");
    let mut statement = connection.prepare("PRAGMA table_info(genes)").expect("table info");
    let columns: Vec<(String, String)> = statement
        .query_map([], |row| Ok((row.get(1)?, row.get(2)?)))
        .expect("query columns")
        .collect::<Result<_, _>>()
        .expect("collect columns");
    assert_eq!(
        columns,
        vec![
            ("gene_caller_id".to_string(), "numeric".to_string()),
            ("gene_name".to_string(), "text".to_string()),
        ]
    );
}

#[test]
fn create_table_refuses_duplicates() {
    let directory = TempDir::new().expect("tempdir");
    let path = contigs_db_at(&directory, "13");
    let database = Database::open(&path).expect("open");
    database
        .create_table("genes", &["id"], &[ColumnType::Numeric])
        .expect("create table");
    let error = database
        .create_table("genes", &["id"], &[ColumnType::Numeric])
        .expect_err("duplicate table");
    assert_eq!(error.kind(), ErrorKind::Config);
}

#[test]
fn create_table_refuses_mismatched_parallel_lists() {
    let directory = TempDir::new().expect("tempdir");
    let path = contigs_db_at(&directory, "13");
    let database = Database::open(&path).expect("open");
    let error = database
        .create_table("genes", &["id", "name"], &[ColumnType::Numeric])
        .expect_err("length mismatch");
    assert_eq!(error.kind(), ErrorKind::Config);
    assert!(!database.table_exists("genes").expect("exists"));
}

// ============================================================================
// SECTION: Structural Checks
// ============================================================================

#[test]
fn contigs_databases_are_recognized() {
    let directory = TempDir::new().expect("tempdir");
    let path = contigs_db_at(&directory, "13");
    is_contigs_db(&path).expect("recognized contigs db");
}

#[test]
fn other_database_types_are_rejected() {
    let directory = TempDir::new().expect("tempdir");
    let path =
        seed_database(&directory, "PROFILE.db", &[("db_type", "profile"), ("version", "1")]);
    let error = is_contigs_db(&path).expect_err("wrong type");
    assert_eq!(error.kind(), ErrorKind::Config);
    assert!(error.message().contains("profile"));
}

#[test]
fn non_database_files_are_rejected() {
    let directory = TempDir::new().expect("tempdir");
    let path = directory.path().join("not-a-db.txt");
    std::fs::write(&path, "plain text, not sqlite").expect("write fixture");
    assert!(is_contigs_db(&path).is_err());
}

#[test]
fn open_does_not_create_missing_files() {
    let directory = TempDir::new().expect("tempdir");
    let path = directory.path().join("missing.db");
    let error = Database::open(&path).expect_err("missing file");
    assert_eq!(error.kind(), ErrorKind::FilesNPaths);
    assert!(!Path::new(&path).exists());
}
