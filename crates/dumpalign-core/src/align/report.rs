//! Diagnostics collected during one alignment run.

/// Number of characters kept when previewing a line in diagnostics
pub const PREVIEW_CHARS: usize = 50;

/// A working line whose fuzzy key already appeared earlier in its block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateLine {
    /// Start index of the working block containing the line
    pub block_start: usize,
    /// Trimmed, truncated copy of the line
    pub preview: String,
}

/// Summary of what the alignment did to one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignmentReport {
    /// Working blocks placed at a baseline offset
    pub matched_blocks: usize,
    /// Working blocks appended at the end because no baseline header matched
    pub unplaced_blocks: usize,
    /// Repeated fuzzy keys inside a single working block
    pub duplicates: Vec<DuplicateLine>,
    /// Baseline header lines shared by more than one baseline block
    pub baseline_collisions: Vec<String>,
    /// Canvas slots written more than once
    pub overlaps: usize,
}

impl AlignmentReport {
    /// True when the dump looked unstable or malformed
    pub fn has_warnings(&self) -> bool {
        !self.duplicates.is_empty() || !self.baseline_collisions.is_empty() || self.overlaps > 0
    }
}

/// Trimmed preview of `line` for log output
pub fn preview(line: &str) -> String {
    line.trim().chars().take(PREVIEW_CHARS).collect()
}
