// crates/seqvault-fs/tests/output_dir_unit.rs
// ============================================================================
// Module: Output Directory Manager Unit Tests
// Description: Tests for output directory validation and creation.
// Purpose: Validate overwrite refusal, recreation, and reporter injection.
// ============================================================================

//! ## Overview
//! Unit-level tests for the output directory manager:
//! - Empty-path rejection regardless of flags
//! - Refusal to reuse an existing directory without `ok_if_exists`
//! - Creation with parents, and delete-then-recreate with a warning
//! - Reporter injection (warnings land in the injected reporter)

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

use std::fs;
use std::path::Path;

use seqvault_core::ErrorKind;
use seqvault_core::RunReporter;
use seqvault_core::SilentProgress;
use seqvault_core::SilentRun;
use seqvault_fs::check_output_directory;
use seqvault_fs::gen_output_directory;
use tempfile::TempDir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Run reporter that records every warning it receives.
#[derive(Debug, Default)]
struct RecordingRun {
    warnings: Vec<String>,
}

impl RunReporter for RecordingRun {
    fn warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

#[test]
fn empty_path_fails_regardless_of_ok_if_exists() {
    let error = check_output_directory(Path::new(""), true).expect_err("empty path");
    assert_eq!(error.kind(), ErrorKind::FilesNPaths);
    let error = check_output_directory(Path::new(""), false).expect_err("empty path");
    assert_eq!(error.kind(), ErrorKind::FilesNPaths);
}

#[test]
fn existing_directory_is_refused_unless_allowed() {
    let directory = TempDir::new().expect("tempdir");
    let error = check_output_directory(directory.path(), false).expect_err("existing dir");
    assert_eq!(error.kind(), ErrorKind::FilesNPaths);
    let resolved = check_output_directory(directory.path(), true).expect("allowed");
    assert!(resolved.is_absolute());
}

#[test]
fn missing_directory_resolves_to_absolute_path() {
    let directory = TempDir::new().expect("tempdir");
    let target = directory.path().join("fresh");
    let resolved = check_output_directory(&target, false).expect("missing dir is fine");
    assert!(resolved.is_absolute());
    assert!(!resolved.exists());
}

// ============================================================================
// SECTION: Creation
// ============================================================================

#[test]
fn gen_creates_directory_with_parents() {
    let directory = TempDir::new().expect("tempdir");
    let target = directory.path().join("a").join("b").join("c");
    let mut progress = SilentProgress;
    let mut run = SilentRun;
    let created =
        gen_output_directory(&target, &mut progress, &mut run, false).expect("create with parents");
    assert!(created.is_dir());
}

#[test]
fn gen_removes_and_recreates_with_a_warning() {
    let directory = TempDir::new().expect("tempdir");
    let target = directory.path().join("out");
    fs::create_dir(&target).expect("seed directory");
    fs::write(target.join("stale.txt"), "stale").expect("seed content");
    let mut progress = SilentProgress;
    let mut run = RecordingRun::default();
    let created =
        gen_output_directory(&target, &mut progress, &mut run, true).expect("recreate");
    assert!(created.is_dir());
    assert!(!created.join("stale.txt").exists());
    assert_eq!(run.warnings.len(), 1);
    assert!(run.warnings[0].contains("removed"));
}

#[test]
fn gen_keeps_existing_directory_without_delete_flag() {
    let directory = TempDir::new().expect("tempdir");
    let target = directory.path().join("out");
    fs::create_dir(&target).expect("seed directory");
    fs::write(target.join("kept.txt"), "kept").expect("seed content");
    let mut progress = SilentProgress;
    let mut run = RecordingRun::default();
    gen_output_directory(&target, &mut progress, &mut run, false).expect("existing dir");
    assert!(target.join("kept.txt").exists());
    assert!(run.warnings.is_empty());
}
