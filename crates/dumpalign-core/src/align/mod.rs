//! Fuzzy block alignment of a regenerated dump against its baseline.
//!
//! ## Entry point
//!
//! ```
//! use dumpalign_core::align::align_texts;
//!
//! let baseline = "Header\n  x:1\n  y:2\n";
//! let working = "Header\n  y:9\n  x:7\n";
//! let aligned = align_texts(baseline, working, "demo.txt");
//! assert_eq!(aligned.text, "Header\n  x:7\n  y:9\n");
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical output and report.
//! - **Idempotence**: a working text equal to its baseline (with unique
//!   block headers and empty blank lines) is returned unchanged.
//! - **Content preservation**: every working line appears in the output
//!   exactly once unless two anchored blocks overlap on the canvas.

pub mod canvas;
pub mod matcher;
pub mod report;

pub use canvas::{compose, Canvas};
pub use matcher::{align_block, match_blocks, BaselineIndex, BlockPlacement, KeyQueues};
pub use report::{AlignmentReport, DuplicateLine};

use crate::blocks::parse_blocks;

/// Output of one alignment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Realigned text, ending in exactly one newline
    pub text: String,
    pub report: AlignmentReport,
}

/// Realign `working` so its blocks and lines mirror `baseline`.
///
/// `label` names the file in diagnostics only.
pub fn align_texts(baseline: &str, working: &str, label: &str) -> Alignment {
    let baseline_lines: Vec<&str> = baseline.lines().collect();
    let working_len = working.lines().count();
    let mut report = AlignmentReport::default();

    let index = BaselineIndex::build(parse_blocks(baseline), label, &mut report);
    let placements = match_blocks(&index, parse_blocks(working), label, &mut report);
    let text = compose(placements, &baseline_lines, working_len, label, &mut report);

    tracing::debug!(
        component = module_path!(),
        op = "align_texts",
        file = label,
        matched_blocks = report.matched_blocks,
        unplaced_blocks = report.unplaced_blocks,
        duplicates = report.duplicates.len(),
        overlaps = report.overlaps,
    );

    Alignment { text, report }
}
