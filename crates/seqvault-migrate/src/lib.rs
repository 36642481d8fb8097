// crates/seqvault-migrate/src/lib.rs
// ============================================================================
// Module: SeqVault Migrations
// Description: Versioned, in-place schema migrations of SeqVault databases.
// Purpose: Advance a database exactly one schema version, or leave it alone.
// Dependencies: seqvault-core, seqvault-db, seqvault-fs
// ============================================================================

//! ## Overview
//! Each migration module advances a database exactly one schema version:
//! verify the declared version matches the migration's expected source
//! version, apply one deterministic schema delta, bump the version marker,
//! and commit. No migration retries or rolls back; re-invocation policy
//! belongs to the operator or an upgrade orchestrator. Chaining version
//! steps is likewise an orchestration concern, not handled here.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod contigs_v13_to_v14;
