//! Sparse line canvas used to rebuild the aligned file.

use crate::align::matcher::BlockPlacement;
use crate::align::report::AlignmentReport;
use crate::blocks::is_blank;
use crate::core_types::schema::EVENT_CANVAS_OVERLAP;

/// Array of optional lines indexed by absolute output position
#[derive(Debug)]
pub struct Canvas<'w> {
    slots: Vec<Option<&'w str>>,
}

impl<'w> Canvas<'w> {
    /// Canvas sized to twice the longer of the two inputs
    pub fn for_inputs(baseline_len: usize, working_len: usize) -> Self {
        Self {
            slots: vec![None; 2 * baseline_len.max(working_len)],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Write `lines` starting at `offset`, replacing whatever is there.
    ///
    /// Returns how many already-occupied slots were overwritten.
    pub fn place(&mut self, offset: usize, lines: &[&'w str]) -> usize {
        let end = offset + lines.len();
        if end > self.slots.len() {
            self.slots.resize(end, None);
        }
        let mut overwritten = 0;
        for (slot, &line) in self.slots[offset..end].iter_mut().zip(lines) {
            if slot.replace(line).is_some() {
                overwritten += 1;
            }
        }
        overwritten
    }

    /// Read the canvas top to bottom.
    ///
    /// Empty slots become an empty line where the baseline had a blank line
    /// at the same index and are dropped otherwise.
    pub fn flatten(self, baseline_lines: &[&str]) -> Vec<&'w str> {
        self.slots
            .into_iter()
            .enumerate()
            .filter_map(|(idx, slot)| match slot {
                Some(line) => Some(line),
                None if baseline_lines.get(idx).is_some_and(|line| is_blank(line)) => Some(""),
                None => None,
            })
            .collect()
    }
}

/// Build the final text from block placements.
///
/// Anchored blocks are written in order at their baseline offsets; unplaced
/// blocks follow the flattened canvas, each separated by one blank line.
/// The result always ends in exactly one newline.
pub fn compose(
    placements: Vec<BlockPlacement<'_>>,
    baseline_lines: &[&str],
    working_len: usize,
    label: &str,
    report: &mut AlignmentReport,
) -> String {
    let mut canvas = Canvas::for_inputs(baseline_lines.len(), working_len);
    let mut unplaced = Vec::new();

    for placement in placements {
        match placement {
            BlockPlacement::Anchored { offset, lines } => {
                let overwritten = canvas.place(offset, &lines);
                if overwritten > 0 {
                    tracing::warn!(
                        component = module_path!(),
                        op = "compose",
                        event = EVENT_CANVAS_OVERLAP,
                        file = label,
                        block_start = offset,
                        overwritten,
                        "Overlapping blocks in {} at line {}",
                        label,
                        offset + 1
                    );
                    report.overlaps += overwritten;
                }
            }
            BlockPlacement::Unplaced(lines) => unplaced.push(lines),
        }
    }

    let mut output = canvas.flatten(baseline_lines);
    for lines in unplaced {
        if output.last().is_some_and(|line| !is_blank(line)) {
            output.push("");
        }
        output.extend(lines);
    }

    let mut text = output.join("\n").trim_end().to_string();
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_is_twice_the_longer_input() {
        assert_eq!(Canvas::for_inputs(10, 4).capacity(), 20);
        assert_eq!(Canvas::for_inputs(3, 8).capacity(), 16);
    }

    #[test]
    fn test_place_grows_instead_of_truncating() {
        let mut canvas = Canvas::for_inputs(1, 1);
        assert_eq!(canvas.place(1, &["a", "b", "c"]), 0);
        assert_eq!(canvas.capacity(), 4);
        assert_eq!(canvas.flatten(&[]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_place_counts_overwrites() {
        let mut canvas = Canvas::for_inputs(5, 5);
        canvas.place(0, &["a", "b", "c"]);
        assert_eq!(canvas.place(2, &["x", "y"]), 1);
        assert_eq!(canvas.flatten(&[]), vec!["a", "b", "x", "y"]);
    }

    #[test]
    fn test_flatten_keeps_baseline_blank_lines_only() {
        let mut canvas = Canvas::for_inputs(5, 5);
        canvas.place(0, &["A"]);
        canvas.place(4, &["B"]);
        // index 1 blank in baseline, 2 and 3 were content
        let baseline = ["A", "", "old", "old", "B"];
        assert_eq!(canvas.flatten(&baseline), vec!["A", "", "B"]);
    }

    #[test]
    fn test_unplaced_blocks_get_single_separator() {
        let placements = vec![
            BlockPlacement::Anchored {
                offset: 0,
                lines: vec!["H", "a"],
            },
            BlockPlacement::Unplaced(vec!["N1", "n"]),
            BlockPlacement::Unplaced(vec!["N2"]),
        ];
        let mut report = AlignmentReport::default();
        let text = compose(placements, &["H", "a"], 6, "t", &mut report);
        assert_eq!(text, "H\na\n\nN1\nn\n\nN2\n");
    }

    #[test]
    fn test_unplaced_after_trailing_blank_adds_no_extra_separator() {
        let placements = vec![
            BlockPlacement::Anchored {
                offset: 0,
                lines: vec!["H"],
            },
            BlockPlacement::Unplaced(vec!["N"]),
        ];
        let mut report = AlignmentReport::default();
        let text = compose(placements, &["H", ""], 2, "t", &mut report);
        assert_eq!(text, "H\n\nN\n");
    }

    #[test]
    fn test_only_unplaced_blocks_have_no_leading_blank() {
        let placements = vec![BlockPlacement::Unplaced(vec!["N"])];
        let mut report = AlignmentReport::default();
        assert_eq!(compose(placements, &[], 1, "t", &mut report), "N\n");
    }

    #[test]
    fn test_overlap_is_reported() {
        let placements = vec![
            BlockPlacement::Anchored {
                offset: 0,
                lines: vec!["A", "a"],
            },
            BlockPlacement::Anchored {
                offset: 1,
                lines: vec!["B"],
            },
        ];
        let mut report = AlignmentReport::default();
        let text = compose(placements, &["A", "B"], 3, "t", &mut report);
        assert_eq!(text, "A\nB\n");
        assert_eq!(report.overlaps, 1);
    }

    #[test]
    fn test_output_ends_with_exactly_one_newline() {
        let placements = vec![BlockPlacement::Anchored {
            offset: 0,
            lines: vec!["A", "   "],
        }];
        let mut report = AlignmentReport::default();
        let text = compose(placements, &["A", "", "", ""], 2, "t", &mut report);
        assert_eq!(text, "A\n");
    }

    #[test]
    fn test_empty_input_yields_single_newline() {
        let mut report = AlignmentReport::default();
        assert_eq!(compose(Vec::new(), &[], 0, "t", &mut report), "\n");
    }
}
