//! Document-wide font-size statistics.

use indexmap::IndexMap;

use crate::model::PageInput;

/// Histogram of rounded font sizes across an entire document.
///
/// The profile is built exactly once, before any page is rendered, and
/// is read-only afterwards; pages rendered in parallel share it by
/// reference. The most frequent size is taken as the body text size,
/// the baseline every heading decision is measured against.
#[derive(Debug, Clone, Default)]
pub struct FontProfile {
    /// Size in tenths of a point → occurrence count, in first-seen order.
    histogram: IndexMap<i32, u64>,
}

impl FontProfile {
    /// Build the profile from every sized character in the document.
    pub fn build(pages: &[PageInput]) -> Self {
        let mut profile = Self::default();
        for page in pages {
            for ch in &page.chars {
                if let Some(size) = ch.size {
                    profile.observe(size);
                }
            }
        }
        profile
    }

    /// Record one sized character.
    ///
    /// Sizes are rounded to one decimal place before counting, so
    /// 11.98 and 12.04 both land in the 12.0 bucket.
    pub fn observe(&mut self, size: f32) {
        let key = (size * 10.0).round() as i32;
        *self.histogram.entry(key).or_insert(0) += 1;
    }

    /// The most frequent rounded size, or `None` when no sized
    /// character was observed. Ties keep the first-seen size.
    pub fn body_size(&self) -> Option<f32> {
        let mut best: Option<(i32, u64)> = None;
        for (&key, &count) in &self.histogram {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((key, count)),
            }
        }
        best.map(|(key, _)| key as f32 / 10.0)
    }

    /// Occurrence count for a size's rounded bucket.
    pub fn count(&self, size: f32) -> u64 {
        let key = (size * 10.0).round() as i32;
        self.histogram.get(&key).copied().unwrap_or(0)
    }

    /// Number of distinct rounded sizes observed.
    pub fn len(&self) -> usize {
        self.histogram.len()
    }

    /// Check if no sized character was observed.
    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }
}
