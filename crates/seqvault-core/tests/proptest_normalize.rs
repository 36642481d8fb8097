// crates/seqvault-core/tests/proptest_normalize.rs
// ============================================================================
// Module: Message Normalization Property Tests
// Description: Property tests for normalize_message invariants.
// Purpose: Detect panics and invariant violations across wide input ranges.
// ============================================================================

//! Property-based tests for message normalization invariants.

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

use proptest::prelude::*;
use seqvault_core::ErrorKind;
use seqvault_core::normalize_message;
use seqvault_core::render;

proptest! {
    #[test]
    fn normalized_output_never_contains_double_spaces(input in ".*") {
        let normalized = normalize_message(&input);
        prop_assert!(!normalized.contains("  "));
    }

    #[test]
    fn normalization_is_idempotent(input in ".*") {
        let once = normalize_message(&input);
        prop_assert_eq!(normalize_message(&once), once);
    }

    #[test]
    fn normalization_preserves_non_space_characters(input in "[^ ]*") {
        prop_assert_eq!(normalize_message(&input), input);
    }

    #[test]
    fn render_never_panics_and_blocks_are_blank_line_delimited(input in ".{0,200}") {
        let block = render(ErrorKind::FilesNPaths, &input);
        prop_assert!(block.starts_with("\n\n"));
        prop_assert!(block.ends_with("\n\n"));
    }
}
