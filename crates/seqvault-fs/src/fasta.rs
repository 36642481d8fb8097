// crates/seqvault-fs/src/fasta.rs
// ============================================================================
// Module: FASTA Record Reader
// Description: Minimal sequential reader over FASTA-formatted files.
// Purpose: Back the FASTA well-formedness check; no sequence manipulation.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! A FASTA file is a stream of records, each a `>`-prefixed header line
//! followed by one or more sequence lines. [`SequenceSource`] opens a file,
//! rejects content whose first non-blank line is not a header, and yields
//! records in order, rejecting records with empty bodies. This reader owns
//! all FASTA format knowledge; callers only see [`FastaError`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Lines;
use std::path::Path;

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// FASTA reader errors.
#[derive(Debug, Error)]
pub enum FastaError {
    /// Underlying I/O failure while reading the stream.
    #[error("fasta io error: {0}")]
    Io(String),
    /// Content that violates the FASTA record structure.
    #[error("{0}")]
    Malformed(String),
}

// ============================================================================
// SECTION: Records
// ============================================================================

/// One FASTA record: a header identifier and its concatenated sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Header text following the `>` marker, trimmed.
    pub id: String,
    /// Sequence body with line breaks removed.
    pub sequence: String,
}

// ============================================================================
// SECTION: Source
// ============================================================================

/// Sequential reader over the records of one FASTA file.
pub struct SequenceSource {
    /// Remaining lines of the underlying file.
    lines: Lines<BufReader<File>>,
    /// Header line of the next record, read ahead of its body.
    pending_header: Option<String>,
}

impl SequenceSource {
    /// Opens a FASTA file and positions the reader at its first record.
    ///
    /// # Errors
    ///
    /// Returns [`FastaError`] when the file cannot be opened, is empty, or
    /// its first non-blank line is not a `>` header.
    pub fn open(path: &Path) -> Result<Self, FastaError> {
        let file = File::open(path).map_err(|error| FastaError::Io(error.to_string()))?;
        let mut lines = BufReader::new(file).lines();
        let mut first_line = None;
        for line in lines.by_ref() {
            let line = line.map_err(|error| FastaError::Io(error.to_string()))?;
            if line.trim().is_empty() {
                continue;
            }
            first_line = Some(line);
            break;
        }
        let Some(header) = first_line else {
            return Err(FastaError::Malformed("the file contains no records".to_string()));
        };
        if !header.starts_with('>') {
            return Err(FastaError::Malformed(
                "the first record does not start with a '>' header".to_string(),
            ));
        }
        Ok(Self {
            lines,
            pending_header: Some(header),
        })
    }

    /// Reads the next record, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Returns [`FastaError`] on read failures or when a record carries no
    /// sequence data.
    pub fn next_record(&mut self) -> Result<Option<FastaRecord>, FastaError> {
        let Some(header) = self.pending_header.take() else {
            return Ok(None);
        };
        let id = header.strip_prefix('>').unwrap_or(&header).trim().to_string();
        let mut sequence = String::new();
        loop {
            let Some(line) = self.lines.next() else {
                break;
            };
            let line = line.map_err(|error| FastaError::Io(error.to_string()))?;
            if line.starts_with('>') {
                self.pending_header = Some(line);
                break;
            }
            sequence.push_str(line.trim());
        }
        if sequence.is_empty() {
            return Err(FastaError::Malformed(format!(
                "record '{id}' carries no sequence data"
            )));
        }
        Ok(Some(FastaRecord {
            id,
            sequence,
        }))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
