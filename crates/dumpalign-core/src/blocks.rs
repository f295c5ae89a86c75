//! Block segmentation of dump text.
//!
//! A block is a run of lines separated from its neighbours by blank lines.
//! Blank lines inside numbered or nested sub-listings are "soft": they stay
//! inside the open block instead of closing it.

/// A contiguous group of lines and the absolute index of its first line.
///
/// Never empty: the parser only emits blocks holding at least one line, and
/// the first line is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub start: usize,
    pub lines: Vec<&'a str>,
}

impl<'a> Block<'a> {
    fn open(start: usize) -> Self {
        Self {
            start,
            lines: Vec::new(),
        }
    }

    /// The header line used to match this block against a baseline
    pub fn first_line(&self) -> &'a str {
        self.lines.first().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn last_content_indent(&self) -> usize {
        self.lines
            .iter()
            .rev()
            .find(|line| !is_blank(line))
            .map(|line| indent_width(line))
            .unwrap_or(0)
    }
}

/// True for empty and whitespace-only lines
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Number of leading spaces
pub fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// A blank line is soft when the line after it is a numbered entry or is
/// indented deeper than the block's last content line.
fn is_soft_blank(block: &Block<'_>, next: Option<&str>) -> bool {
    let Some(next) = next.filter(|line| !is_blank(line)) else {
        return false;
    };
    let numbered = next
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit());
    numbered || indent_width(next) > block.last_content_indent()
}

/// Split `text` into blocks.
///
/// Lines are split on `\n` (a trailing `\r` is dropped). Leading blank
/// lines and hard blank separators are discarded; line indices in the
/// returned blocks refer to the original text.
///
/// # Example
///
/// ```
/// use dumpalign_core::blocks::parse_blocks;
///
/// let blocks = parse_blocks("A\nB\n\nC\nD");
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[1].start, 3);
/// assert_eq!(blocks[1].lines, vec!["C", "D"]);
/// ```
pub fn parse_blocks(text: &str) -> Vec<Block<'_>> {
    let lines: Vec<&str> = text.lines().collect();
    let mut blocks = Vec::new();
    let mut current: Option<Block<'_>> = None;

    for (idx, &line) in lines.iter().enumerate() {
        if !is_blank(line) {
            current
                .get_or_insert_with(|| Block::open(idx))
                .lines
                .push(line);
            continue;
        }

        if let Some(mut block) = current.take() {
            if is_soft_blank(&block, lines.get(idx + 1).copied()) {
                block.lines.push(line);
                current = Some(block);
            } else {
                blocks.push(block);
            }
        }
    }

    if let Some(block) = current {
        blocks.push(block);
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_separates_blocks() {
        let blocks = parse_blocks("A\nB\n\nC\nD");
        assert_eq!(
            blocks,
            vec![
                Block {
                    start: 0,
                    lines: vec!["A", "B"]
                },
                Block {
                    start: 3,
                    lines: vec!["C", "D"]
                },
            ]
        );
    }

    #[test]
    fn test_blank_before_numbered_line_is_soft() {
        let blocks = parse_blocks("Header\n  1 item\n\n  2 item");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines, vec!["Header", "  1 item", "", "  2 item"]);
    }

    #[test]
    fn test_blank_before_deeper_indent_is_soft() {
        let text = "Section\n  child\n\n      grandchild\nNext";
        let blocks = parse_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 5);
    }

    #[test]
    fn test_blank_before_same_indent_is_hard() {
        let blocks = parse_blocks("  a\n\n  b");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].start, 2);
    }

    #[test]
    fn test_leading_and_repeated_blanks_produce_no_blocks() {
        let blocks = parse_blocks("\n\n  \nA\n\n\n\nB\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].start, 3);
        assert_eq!(blocks[1].start, 7);
    }

    #[test]
    fn test_consecutive_blanks_close_even_before_numbered_line() {
        let blocks = parse_blocks("Header\n\n\n1 entry");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].lines, vec!["1 entry"]);
    }

    #[test]
    fn test_trailing_block_is_included() {
        let blocks = parse_blocks("A\n\nB");
        assert_eq!(blocks.last().map(|b| b.lines.clone()), Some(vec!["B"]));
    }

    #[test]
    fn test_crlf_lines() {
        let blocks = parse_blocks("A\r\nB\r\n\r\nC\r\n");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines, vec!["A", "B"]);
        assert_eq!(blocks[1].start, 3);
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_blocks("").is_empty());
        assert!(parse_blocks("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_first_line_is_never_blank() {
        let blocks = parse_blocks("\n  x\n\n    1\n\ny");
        for block in &blocks {
            assert!(!is_blank(block.first_line()));
        }
    }

    #[test]
    fn test_indent_width_counts_spaces_only() {
        assert_eq!(indent_width("    x"), 4);
        assert_eq!(indent_width("\tx"), 0);
        assert_eq!(indent_width("x"), 0);
    }
}
