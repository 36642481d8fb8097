// crates/seqvault-db/src/database.rs
// ============================================================================
// Module: Versioned Database Handle
// Description: Minimal accessor over a persisted SQLite database.
// Purpose: Schema version marker, metadata store, and typed table creation.
// Dependencies: rusqlite, seqvault-core
// ============================================================================

//! ## Overview
//! A SeqVault database is a SQLite file carrying a key/value metadata table
//! named `self` with at least a `version` entry. [`Database`] exposes the
//! handful of operations the persistence layer needs: read the version tag,
//! create an empty table with an ordered, typed column list, remove or set
//! metadata entries, and disconnect. Disconnecting consumes the handle, so
//! the terminal "disconnected" state is enforced by move semantics and no
//! further operation can reach a closed connection.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use rusqlite::Connection;
use rusqlite::OpenFlags;
use rusqlite::OptionalExtension;
use rusqlite::params;
use seqvault_core::SeqVaultError;
use seqvault_core::SeqVaultResult;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Name of the key/value metadata table inside every SeqVault database.
pub const METADATA_TABLE_NAME: &str = "self";
/// Metadata key carrying the schema version tag.
pub const VERSION_KEY: &str = "version";
/// Metadata key carrying the database type marker.
const DB_TYPE_KEY: &str = "db_type";
/// Database type marker expected of a contigs database.
const CONTIGS_DB_TYPE: &str = "contigs";

// ============================================================================
// SECTION: Column Types
// ============================================================================

/// Closed set of column types a SeqVault table may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Numeric affinity column.
    Numeric,
    /// Text affinity column.
    Text,
}

impl ColumnType {
    /// Returns the SQL type name persisted in the table definition.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Text => "text",
        }
    }
}

// ============================================================================
// SECTION: Database Handle
// ============================================================================

/// Handle bound to one SQLite database file for one operation sequence.
#[derive(Debug)]
pub struct Database {
    /// Open SQLite connection to the database file.
    connection: Connection,
}

impl Database {
    /// Opens an existing database read/write. The file is never created.
    ///
    /// # Errors
    ///
    /// Returns a file/path error when the file cannot be opened as SQLite.
    pub fn open(path: &Path) -> SeqVaultResult<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE;
        let connection = Connection::open_with_flags(path, flags).map_err(|error| {
            SeqVaultError::files_n_paths(format!(
                "Failed to open the database at '{}': {error}",
                path.display()
            ))
        })?;
        Ok(Self {
            connection,
        })
    }

    /// Opens an existing database read-only, for structural inspection.
    ///
    /// # Errors
    ///
    /// Returns a file/path error when the file cannot be opened as SQLite.
    pub fn open_read_only(path: &Path) -> SeqVaultResult<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY;
        let connection = Connection::open_with_flags(path, flags).map_err(|error| {
            SeqVaultError::files_n_paths(format!(
                "Failed to open the database at '{}': {error}",
                path.display()
            ))
        })?;
        Ok(Self {
            connection,
        })
    }

    /// Reads the schema version tag from the metadata store.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the database carries no version
    /// entry (malformed database).
    pub fn get_version(&self) -> SeqVaultResult<String> {
        self.get_meta_value(VERSION_KEY)?.ok_or_else(|| {
            SeqVaultError::config(
                "This database does not carry a version entry in its metadata table, which \
                 means it is either very old or very broken. Either way, this tool cannot \
                 work with it.",
            )
        })
    }

    /// Reads one metadata value, or `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the metadata table cannot be read.
    pub fn get_meta_value(&self, key: &str) -> SeqVaultResult<Option<String>> {
        self.connection
            .query_row(
                "SELECT value FROM self WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|error| {
                SeqVaultError::config(format!(
                    "Failed to read the metadata key '{key}': {error}"
                ))
            })
    }

    /// Creates an empty table with an ordered, typed column list.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a table with `name` already
    /// exists, the name and type lists differ in length, or the statement
    /// fails.
    pub fn create_table(
        &self,
        name: &str,
        column_names: &[&str],
        column_types: &[ColumnType],
    ) -> SeqVaultResult<()> {
        if column_names.len() != column_types.len() {
            return Err(SeqVaultError::config(format!(
                "Table '{name}' cannot be created: {} column names were declared against {} \
                 column types.",
                column_names.len(),
                column_types.len()
            )));
        }
        if self.table_exists(name)? {
            return Err(SeqVaultError::config(format!(
                "Table '{name}' already exists in this database."
            )));
        }
        let columns: Vec<String> = column_names
            .iter()
            .zip(column_types.iter())
            .map(|(column_name, column_type)| format!("{column_name} {}", column_type.as_sql()))
            .collect();
        let statement = format!("CREATE TABLE {name} ({})", columns.join(", "));
        self.connection.execute_batch(&statement).map_err(|error| {
            SeqVaultError::config(format!("Failed to create the table '{name}': {error}"))
        })
    }

    /// Reports whether a table with `name` exists in this database.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the schema catalog cannot be read.
    pub fn table_exists(&self, name: &str) -> SeqVaultResult<bool> {
        let found: Option<String> = self
            .connection
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()
            .map_err(|error| {
                SeqVaultError::config(format!(
                    "Failed to inspect the schema for table '{name}': {error}"
                ))
            })?;
        Ok(found.is_some())
    }

    /// Removes one metadata entry. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the statement fails.
    pub fn remove_meta_key_value_pair(&self, key: &str) -> SeqVaultResult<()> {
        self.connection
            .execute("DELETE FROM self WHERE key = ?1", params![key])
            .map(|_| ())
            .map_err(|error| {
                SeqVaultError::config(format!(
                    "Failed to remove the metadata key '{key}': {error}"
                ))
            })
    }

    /// Sets one metadata entry, overwriting any prior value for the key.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the statement fails.
    pub fn set_meta_value(&self, key: &str, value: &str) -> SeqVaultResult<()> {
        self.connection
            .execute(
                "INSERT OR REPLACE INTO self (key, value) VALUES (?1, ?2)",
                params![key, value],
            )
            .map(|_| ())
            .map_err(|error| {
                SeqVaultError::config(format!(
                    "Failed to set the metadata key '{key}': {error}"
                ))
            })
    }

    /// Writes `tag` as the sole schema version entry. A single atomic
    /// insert-or-replace, so the database is never left without a version
    /// tag by this call alone.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the statement fails.
    pub fn set_version(&self, tag: &str) -> SeqVaultResult<()> {
        self.set_meta_value(VERSION_KEY, tag)
    }

    /// Flushes pending writes and releases the handle. Consumes the handle;
    /// a second disconnect is unrepresentable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the connection refuses to close.
    pub fn disconnect(self) -> SeqVaultResult<()> {
        self.connection.close().map_err(|(_connection, error)| {
            SeqVaultError::config(format!("Failed to commit and close the database: {error}"))
        })
    }
}

// ============================================================================
// SECTION: Structural Checks
// ============================================================================

/// Checks that the file at `path` is a recognized contigs database: it opens
/// as SQLite and its metadata table declares the `contigs` database type.
///
/// # Errors
///
/// Returns a configuration error naming the failed check.
pub fn is_contigs_db(path: &Path) -> SeqVaultResult<()> {
    let database = Database::open_read_only(path)?;
    let db_type = database.get_meta_value(DB_TYPE_KEY).map_err(|_| {
        SeqVaultError::config(format!(
            "The file at '{}' does not look like a database this tool knows how to work \
             with (its metadata table is missing or unreadable).",
            path.display()
        ))
    })?;
    let result = match db_type {
        Some(value) if value == CONTIGS_DB_TYPE => Ok(()),
        Some(value) => Err(SeqVaultError::config(format!(
            "The database at '{}' is of type '{value}', not a contigs database.",
            path.display()
        ))),
        None => Err(SeqVaultError::config(format!(
            "The database at '{}' does not declare a database type, so it cannot be \
             trusted as a contigs database.",
            path.display()
        ))),
    };
    database.disconnect()?;
    result
}
