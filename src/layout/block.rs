//! Line-to-block clustering.

use std::cmp::Ordering;

use crate::model::BBox;

use super::Line;

/// Fallback line height when no character on the page carries a size.
pub const DEFAULT_LINE_HEIGHT: f32 = 12.0;

/// Paragraph gap threshold as a multiple of the median line height.
pub const PARAGRAPH_SPACING_FACTOR: f32 = 1.5;

/// A contiguous run of lines forming one paragraph-like unit.
#[derive(Debug, Clone, Default)]
pub struct Block {
    /// Lines in original top-to-bottom order.
    pub lines: Vec<Line>,
}

impl Block {
    /// Bounding box over every character in the block, `None` when the
    /// block holds no characters.
    pub fn bbox(&self) -> Option<BBox> {
        let mut boxes = self.lines.iter().filter_map(Line::bbox);
        let first = boxes.next()?;
        Some(boxes.fold(first, |acc, b| acc.union(&b)))
    }

    /// Check if the block holds no characters.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(Line::is_empty)
    }
}

/// Median of per-line dominant sizes, used as the page's nominal line
/// height. Lines without a dominant size are ignored; an even count
/// averages the two middle values. Returns [`DEFAULT_LINE_HEIGHT`]
/// when no line has an observable size.
pub fn median_line_height(lines: &[Line]) -> f32 {
    let mut heights: Vec<f32> = lines.iter().filter_map(Line::dominant_size).collect();
    if heights.is_empty() {
        return DEFAULT_LINE_HEIGHT;
    }

    heights.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mid = heights.len() / 2;
    if heights.len() % 2 == 0 {
        (heights[mid - 1] + heights[mid]) / 2.0
    } else {
        heights[mid]
    }
}

/// Cluster ordered lines into paragraph blocks.
///
/// A gap between consecutive lines (next line's top minus previous
/// line's bottom) above `spacing_factor × median_line_height` closes
/// the current block. Empty lines are skipped; every non-empty line
/// lands in exactly one block, in original order.
pub fn group_lines_into_blocks(lines: &[Line], spacing_factor: f32) -> Vec<Block> {
    if lines.is_empty() {
        return Vec::new();
    }

    let threshold = spacing_factor * median_line_height(lines);
    log::debug!("paragraph spacing threshold {threshold:.1}");

    let mut blocks: Vec<Block> = Vec::new();
    let mut current: Vec<Line> = Vec::new();
    let mut prev_bottom: Option<f32> = None;

    for line in lines {
        if line.is_empty() {
            continue;
        }

        if let Some(prev) = prev_bottom {
            if line.top() - prev > threshold && !current.is_empty() {
                blocks.push(Block {
                    lines: std::mem::take(&mut current),
                });
            }
        }

        current.push(line.clone());
        prev_bottom = Some(line.bottom());
    }

    if !current.is_empty() {
        blocks.push(Block { lines: current });
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Char;

    fn line_at(top: f32, size: f32) -> Line {
        Line::from_chars(vec![Char::new("x", size, 0.0, 6.0, top, top + size)])
    }

    #[test]
    fn test_median_odd() {
        let lines = vec![line_at(0.0, 10.0), line_at(20.0, 12.0), line_at(40.0, 30.0)];
        assert_eq!(median_line_height(&lines), 12.0);
    }

    #[test]
    fn test_median_even_averages_middle() {
        let lines = vec![line_at(0.0, 12.0), line_at(20.0, 14.0)];
        assert_eq!(median_line_height(&lines), 13.0);
    }

    #[test]
    fn test_median_defaults_without_sizes() {
        let lines = vec![Line::from_chars(vec![Char::without_size(
            "•", 0.0, 4.0, 0.0, 4.0,
        )])];
        assert_eq!(median_line_height(&lines), DEFAULT_LINE_HEIGHT);
        assert_eq!(median_line_height(&[]), DEFAULT_LINE_HEIGHT);
    }

    #[test]
    fn test_small_gaps_stay_in_one_block() {
        // 12pt lines, threshold 18: a 3pt gap keeps lines together
        let lines = vec![line_at(100.0, 12.0), line_at(115.0, 12.0)];
        let blocks = group_lines_into_blocks(&lines, PARAGRAPH_SPACING_FACTOR);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].lines.len(), 2);
    }

    #[test]
    fn test_large_gap_starts_new_block() {
        // threshold 18, gap 28
        let lines = vec![line_at(100.0, 12.0), line_at(140.0, 12.0)];
        let blocks = group_lines_into_blocks(&lines, PARAGRAPH_SPACING_FACTOR);
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_every_line_lands_once_in_order() {
        let lines = vec![
            line_at(0.0, 12.0),
            line_at(14.0, 12.0),
            line_at(60.0, 12.0),
            line_at(74.0, 12.0),
        ];
        let blocks = group_lines_into_blocks(&lines, PARAGRAPH_SPACING_FACTOR);
        let total: usize = blocks.iter().map(|b| b.lines.len()).sum();
        assert_eq!(total, 4);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines[0].top(), 0.0);
        assert_eq!(blocks[1].lines[0].top(), 60.0);
    }

    #[test]
    fn test_block_bbox_spans_lines() {
        let lines = vec![line_at(100.0, 12.0), line_at(115.0, 12.0)];
        let blocks = group_lines_into_blocks(&lines, PARAGRAPH_SPACING_FACTOR);
        let bbox = blocks[0].bbox().unwrap();
        assert_eq!(bbox.top, 100.0);
        assert_eq!(bbox.bottom, 127.0);
    }
}
