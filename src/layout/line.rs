//! Character-to-line clustering.

use std::cmp::Ordering;

use indexmap::IndexMap;

use crate::model::{BBox, Char};

/// Default vertical-center tolerance for line membership, in page units.
pub const DEFAULT_LINE_TOLERANCE: f32 = 3.0;

/// A horizontal run of characters sharing a baseline region.
#[derive(Debug, Clone, Default)]
pub struct Line {
    /// Characters sorted left to right by `x0`.
    pub chars: Vec<Char>,
}

impl Line {
    /// Build a line, sorting its characters by `x0`.
    pub fn from_chars(mut chars: Vec<Char>) -> Self {
        chars.sort_by(|a, b| a.x0.partial_cmp(&b.x0).unwrap_or(Ordering::Equal));
        Self { chars }
    }

    /// Concatenated glyph text, left to right. Raw: whitespace
    /// normalization happens at render time.
    pub fn text(&self) -> String {
        self.chars.iter().map(|c| c.text.as_str()).collect()
    }

    /// The most frequent character size in the line, first-seen order
    /// breaking ties. `None` when no character carries a size.
    pub fn dominant_size(&self) -> Option<f32> {
        let mut counts: IndexMap<u32, u64> = IndexMap::new();
        for ch in &self.chars {
            if let Some(size) = ch.size {
                *counts.entry(size.to_bits()).or_insert(0) += 1;
            }
        }

        let mut best: Option<(u32, u64)> = None;
        for (&bits, &count) in &counts {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((bits, count)),
            }
        }
        best.map(|(bits, _)| f32::from_bits(bits))
    }

    /// Topmost character edge.
    pub fn top(&self) -> f32 {
        self.chars.iter().map(|c| c.top).fold(f32::INFINITY, f32::min)
    }

    /// Bottommost character edge.
    pub fn bottom(&self) -> f32 {
        self.chars
            .iter()
            .map(|c| c.bottom)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Bounding box over all characters, `None` for an empty line.
    pub fn bbox(&self) -> Option<BBox> {
        let mut boxes = self.chars.iter().map(Char::bbox);
        let first = boxes.next()?;
        Some(boxes.fold(first, |acc, b| acc.union(&b)))
    }

    /// Check if the line holds no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Cluster one page's characters into top-to-bottom lines.
///
/// Characters are sorted by `(top, x0)` and scanned in order; the open
/// line tracks the running average of its members' vertical centers,
/// and a character whose center strays from that average by more than
/// `tolerance` closes the line and starts a new one. A single stray
/// character becomes a one-character line.
pub fn group_chars_into_lines(chars: &[Char], tolerance: f32) -> Vec<Line> {
    if chars.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<Char> = chars.to_vec();
    sorted.sort_by(|a, b| {
        a.top
            .partial_cmp(&b.top)
            .unwrap_or(Ordering::Equal)
            .then(a.x0.partial_cmp(&b.x0).unwrap_or(Ordering::Equal))
    });

    let mut lines: Vec<Line> = Vec::new();
    let mut current: Vec<Char> = Vec::new();
    let mut center_sum = 0.0_f32;

    for ch in sorted {
        if current.is_empty() {
            center_sum = ch.v_center();
            current.push(ch);
            continue;
        }

        let running_center = center_sum / current.len() as f32;
        if (ch.v_center() - running_center).abs() <= tolerance {
            center_sum += ch.v_center();
            current.push(ch);
        } else {
            lines.push(Line::from_chars(std::mem::take(&mut current)));
            center_sum = ch.v_center();
            current.push(ch);
        }
    }

    if !current.is_empty() {
        lines.push(Line::from_chars(current));
    }

    log::debug!("grouped {} chars into {} lines", chars.len(), lines.len());
    lines
}
