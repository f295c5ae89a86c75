//! Matching working blocks to baseline blocks.
//!
//! Blocks are paired by their verbatim header line. Inside a matched pair,
//! each working line claims the earliest unclaimed baseline position with
//! the same fuzzy key, and the block is reordered by those positions.

use crate::align::report::{preview, AlignmentReport, DuplicateLine};
use crate::blocks::Block;
use crate::core_types::schema::{EVENT_BASELINE_COLLISION, EVENT_DUPLICATE_KEY};
use crate::normalize::fuzzy_key;
use std::collections::{HashMap, HashSet, VecDeque};

/// Baseline blocks keyed by their exact first line
#[derive(Debug, Default)]
pub struct BaselineIndex<'b> {
    by_header: HashMap<&'b str, Block<'b>>,
}

impl<'b> BaselineIndex<'b> {
    /// Index `blocks` by header.
    ///
    /// When two blocks share a header the later one replaces the earlier
    /// one; the collision is logged and recorded in `report`.
    pub fn build(blocks: Vec<Block<'b>>, label: &str, report: &mut AlignmentReport) -> Self {
        let mut by_header = HashMap::with_capacity(blocks.len());
        for block in blocks {
            let header = block.first_line();
            let start = block.start;
            if let Some(previous) = by_header.insert(header, block) {
                tracing::warn!(
                    component = module_path!(),
                    op = "index_baseline",
                    event = EVENT_BASELINE_COLLISION,
                    file = label,
                    block_start = start,
                    replaced_start = previous.start,
                    "Baseline header repeated in {}: {}...",
                    label,
                    preview(header)
                );
                report.baseline_collisions.push(header.to_string());
            }
        }
        Self { by_header }
    }

    pub fn get(&self, header: &str) -> Option<&Block<'b>> {
        self.by_header.get(header)
    }

    pub fn len(&self) -> usize {
        self.by_header.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_header.is_empty()
    }
}

/// Baseline line positions grouped by fuzzy key, earliest first
#[derive(Debug, Default)]
pub struct KeyQueues {
    queues: HashMap<String, VecDeque<usize>>,
}

impl KeyQueues {
    pub fn from_lines(lines: &[&str]) -> Self {
        let mut queues: HashMap<String, VecDeque<usize>> = HashMap::new();
        for (pos, line) in lines.iter().enumerate() {
            queues.entry(fuzzy_key(line)).or_default().push_back(pos);
        }
        Self { queues }
    }

    /// Claim the earliest unclaimed position registered under `key`
    pub fn take(&mut self, key: &str) -> Option<usize> {
        self.queues.get_mut(key)?.pop_front()
    }
}

/// Where a working block ends up in the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockPlacement<'w> {
    /// Reordered lines to be written at a baseline line offset
    Anchored { offset: usize, lines: Vec<&'w str> },
    /// Block without a baseline counterpart, kept in its original order
    Unplaced(Vec<&'w str>),
}

/// Reorder `working` lines to follow the line order of `baseline`.
///
/// Lines with no remaining baseline position keep their relative order and
/// sort after every matched line.
pub fn align_block<'w>(baseline: &Block<'_>, working: &Block<'w>) -> Vec<&'w str> {
    let mut queues = KeyQueues::from_lines(&baseline.lines);
    let mut targeted: Vec<(usize, &'w str)> = working
        .lines
        .iter()
        .map(|&line| {
            let target = queues.take(&fuzzy_key(line)).unwrap_or(usize::MAX);
            (target, line)
        })
        .collect();
    // stable: unmatched lines keep their working order
    targeted.sort_by_key(|&(target, _)| target);
    targeted.into_iter().map(|(_, line)| line).collect()
}

/// Warn about non-empty fuzzy keys that repeat inside `block`
fn scan_duplicates(block: &Block<'_>, label: &str, report: &mut AlignmentReport) {
    let mut seen = HashSet::new();
    for line in &block.lines {
        let key = fuzzy_key(line);
        if key.is_empty() || seen.insert(key) {
            continue;
        }
        let preview = preview(line);
        tracing::warn!(
            component = module_path!(),
            op = "align_blocks",
            event = EVENT_DUPLICATE_KEY,
            file = label,
            block_start = block.start,
            preview = preview.as_str(),
            "Duplicate in {}: {}...",
            label,
            preview
        );
        report.duplicates.push(DuplicateLine {
            block_start: block.start,
            preview,
        });
    }
}

/// Pair every working block with its baseline block and align it.
pub fn match_blocks<'w>(
    index: &BaselineIndex<'_>,
    working: Vec<Block<'w>>,
    label: &str,
    report: &mut AlignmentReport,
) -> Vec<BlockPlacement<'w>> {
    working
        .into_iter()
        .map(|block| {
            scan_duplicates(&block, label, report);
            match index.get(block.first_line()) {
                Some(anchor) => {
                    report.matched_blocks += 1;
                    BlockPlacement::Anchored {
                        offset: anchor.start,
                        lines: align_block(anchor, &block),
                    }
                }
                None => {
                    report.unplaced_blocks += 1;
                    BlockPlacement::Unplaced(block.lines)
                }
            }
        })
        .collect()
}
