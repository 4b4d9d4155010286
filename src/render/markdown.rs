//! Markdown rendering: heading classification, block rendering, page
//! composition, and document assembly.

use std::cmp::Ordering;

use rayon::prelude::*;
use regex::Regex;

use crate::error::Result;
use crate::layout::{group_chars_into_lines, group_lines_into_blocks, Block, FontProfile};
use crate::model::{BBox, PageInput, Table};
use crate::options::ConvertOptions;

use super::table::render_table;

/// A line qualifies as a heading only when its size is at least this
/// multiple of the body size.
const HEADING_SIZE_FACTOR: f32 = 1.1;

/// Below this length, trailing sentence punctuation cannot veto a
/// heading.
const HEADING_SHORT_LEN: usize = 100;

/// Collapse whitespace runs to single spaces and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    let re = Regex::new(r"\s+").unwrap();
    re.replace_all(text.trim(), " ").into_owned()
}

/// Decide whether a line renders as a heading.
///
/// Holds iff the body size is known, the line's dominant size is both
/// at least 1.1× the body size and strictly greater than it, and the
/// text is short or carries no trailing `.`/`,`. The exact boolean
/// combination is load-bearing for downstream heading-based splitting;
/// a short all-caps line ending in a comma still classifies.
pub fn is_heading(dominant_size: Option<f32>, text: &str, profile: &FontProfile) -> bool {
    let Some(body) = profile.body_size() else {
        return false;
    };
    let Some(size) = dominant_size else {
        return false;
    };

    let is_larger = size >= body * HEADING_SIZE_FACTOR;
    let is_short = text.chars().count() < HEADING_SHORT_LEN;
    let no_period = !text.ends_with('.') && !text.ends_with(',');

    is_larger && size > body && (is_short || no_period)
}

/// Map a line's size ratio to the body size onto a Markdown heading
/// depth (1 = most prominent). A body size of zero defaults to 2.
pub fn heading_depth(dominant_size: f32, body_size: f32) -> usize {
    if body_size <= 0.0 {
        return 2;
    }
    let ratio = dominant_size / body_size;
    if ratio >= 2.0 {
        1
    } else if ratio >= 1.7 {
        2
    } else if ratio >= 1.4 {
        3
    } else if ratio >= 1.2 {
        4
    } else {
        5
    }
}

/// Render one block: heading lines stand alone, everything else folds
/// into space-joined paragraphs.
///
/// Lines are processed in order. Non-heading lines accumulate into a
/// paragraph buffer; a heading flushes the buffer, then emits itself
/// on its own line. Empty lines (after normalization) are dropped.
pub fn render_block(block: &Block, profile: &FontProfile) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();

    for line in &block.lines {
        let text = normalize_whitespace(&line.text());
        if text.is_empty() {
            continue;
        }

        let size = line.dominant_size();
        if is_heading(size, &text, profile) {
            if !paragraph.is_empty() {
                parts.push(paragraph.join(" "));
                paragraph.clear();
            }
            let depth = match (size, profile.body_size()) {
                (Some(size), Some(body)) => heading_depth(size, body),
                _ => 2,
            };
            parts.push(format!("{} {}", "#".repeat(depth), text));
        } else {
            paragraph.push(text);
        }
    }

    if !paragraph.is_empty() {
        parts.push(paragraph.join(" "));
    }

    parts.join("\n")
}

/// A positioned element awaiting reading-order composition.
#[derive(Debug, Clone)]
pub enum PageElement {
    /// A paragraph block reconstructed from characters.
    Text(Block),
    /// An externally detected table.
    Table(Table),
}

impl PageElement {
    /// Bounding box used solely for ordering.
    pub fn bbox(&self) -> Option<BBox> {
        match self {
            PageElement::Text(block) => block.bbox(),
            PageElement::Table(table) => Some(table.bbox),
        }
    }

    fn sort_key(&self) -> (f32, f32) {
        self.bbox()
            .map(|b| (b.top, b.x0))
            .unwrap_or((f32::MAX, f32::MAX))
    }
}

/// Render one page: reconstruct its blocks, merge them with the page's
/// tables by `(top, x0)`, and join the rendered pieces with blank
/// lines.
///
/// The ordering is single-column reading order, top-to-bottom then
/// left-to-right; multi-column pages may interleave.
pub fn render_page(page: &PageInput, profile: &FontProfile, options: &ConvertOptions) -> String {
    let lines = group_chars_into_lines(&page.chars, options.line_tolerance);
    let blocks = group_lines_into_blocks(&lines, options.spacing_factor);

    let mut elements: Vec<PageElement> = blocks
        .into_iter()
        .filter(|b| !b.is_empty())
        .map(PageElement::Text)
        .collect();
    elements.extend(page.tables.iter().cloned().map(PageElement::Table));

    elements.sort_by(|a, b| {
        a.sort_key()
            .partial_cmp(&b.sort_key())
            .unwrap_or(Ordering::Equal)
    });

    let mut parts: Vec<String> = Vec::new();
    for element in &elements {
        let rendered = match element {
            PageElement::Text(block) => render_block(block, profile),
            PageElement::Table(table) => render_table(table).into_markdown(),
        };
        if !rendered.trim().is_empty() {
            parts.push(rendered);
        }
    }

    parts.join("\n\n")
}

/// Join per-page Markdown with a blank line between pages, dropping
/// empty pages.
pub fn join_pages(pages: Vec<String>) -> String {
    pages
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Convert a whole document.
///
/// Pass 1 builds the font profile over every page; pass 2 renders each
/// page against the read-only profile (in parallel unless the options
/// say otherwise) and joins the per-page outputs in page order.
pub fn pages_to_markdown(pages: &[PageInput], options: &ConvertOptions) -> Result<String> {
    options.validate()?;

    let profile = FontProfile::build(pages);
    log::debug!(
        "font profile: {} distinct sizes, body size {:?}",
        profile.len(),
        profile.body_size()
    );

    let rendered: Vec<String> = if options.parallel {
        pages
            .par_iter()
            .map(|page| render_page(page, &profile, options))
            .collect()
    } else {
        pages
            .iter()
            .map(|page| render_page(page, &profile, options))
            .collect()
    };

    Ok(join_pages(rendered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Line;
    use crate::model::Char;

    fn profile_with_body(size: f32) -> FontProfile {
        let mut profile = FontProfile::default();
        for _ in 0..10 {
            profile.observe(size);
        }
        profile
    }

    fn text_line(text: &str, size: f32, top: f32) -> Line {
        let chars = text
            .chars()
            .enumerate()
            .map(|(i, c)| {
                let x0 = i as f32 * 6.0;
                Char::new(c.to_string(), size, x0, x0 + 6.0, top, top + size)
            })
            .collect();
        Line::from_chars(chars)
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a \t b\n c  "), "a b c");
        assert_eq!(normalize_whitespace("   "), "");
        assert_eq!(normalize_whitespace("plain"), "plain");
    }

    #[test]
    fn test_is_heading_requires_known_sizes() {
        let profile = profile_with_body(12.0);
        assert!(!is_heading(None, "Title", &profile));
        assert!(!is_heading(Some(24.0), "Title", &FontProfile::default()));
    }

    #[test]
    fn test_is_heading_size_gate() {
        let profile = profile_with_body(12.0);
        assert!(!is_heading(Some(12.0), "Title", &profile));
        assert!(!is_heading(Some(12.5), "Title", &profile));
        assert!(is_heading(Some(13.3), "Title", &profile));
    }

    #[test]
    fn test_is_heading_punctuation_veto_only_for_long_text() {
        let profile = profile_with_body(12.0);
        // Short text: trailing period does not veto
        assert!(is_heading(Some(18.0), "Short heading.", &profile));
        // Long text ending in a period: vetoed
        let long = format!("{}.", "x".repeat(120));
        assert!(!is_heading(Some(18.0), &long, &profile));
        // Long text without trailing punctuation: allowed
        let long_clean = "x".repeat(120);
        assert!(is_heading(Some(18.0), &long_clean, &profile));
    }

    #[test]
    fn test_is_heading_monotonic_in_size() {
        let profile = profile_with_body(12.0);
        let mut was_heading = false;
        for size in [13.3, 14.5, 17.0, 21.0, 24.5, 30.0] {
            let now = is_heading(Some(size), "Heading", &profile);
            assert!(now || !was_heading, "heading flipped off at size {size}");
            was_heading = now;
        }
    }

    #[test]
    fn test_heading_depth_thresholds() {
        assert_eq!(heading_depth(24.0, 12.0), 1); // ratio 2.0
        assert_eq!(heading_depth(21.0, 12.0), 2); // ratio 1.75
        assert_eq!(heading_depth(18.0, 12.0), 3); // ratio 1.5
        assert_eq!(heading_depth(15.0, 12.0), 4); // ratio 1.25
        assert_eq!(heading_depth(14.0, 12.0), 5); // ratio ~1.17
        assert_eq!(heading_depth(24.0, 0.0), 2);
    }

    #[test]
    fn test_heading_depth_non_increasing() {
        let mut prev = usize::MAX;
        for size in [14.0, 15.0, 18.0, 21.0, 24.0] {
            let depth = heading_depth(size, 12.0);
            assert!(depth <= prev);
            prev = depth;
        }
    }

    #[test]
    fn test_render_block_flushes_paragraph_before_heading() {
        let profile = profile_with_body(12.0);
        let block = Block {
            lines: vec![
                text_line("first part", 12.0, 100.0),
                text_line("Heading", 24.0, 120.0),
                text_line("after", 12.0, 150.0),
            ],
        };
        let md = render_block(&block, &profile);
        assert_eq!(md, "first part\n# Heading\nafter");
    }

    #[test]
    fn test_render_block_joins_paragraph_lines_with_spaces() {
        let profile = profile_with_body(12.0);
        let block = Block {
            lines: vec![
                text_line("spread over", 12.0, 100.0),
                text_line("two lines", 12.0, 114.0),
            ],
        };
        assert_eq!(render_block(&block, &profile), "spread over two lines");
    }

    #[test]
    fn test_render_block_drops_blank_lines() {
        let profile = profile_with_body(12.0);
        let block = Block {
            lines: vec![
                text_line("   ", 12.0, 100.0),
                text_line("kept", 12.0, 114.0),
            ],
        };
        assert_eq!(render_block(&block, &profile), "kept");
    }

    #[test]
    fn test_join_pages_drops_empties() {
        let joined = join_pages(vec![
            "page one".to_string(),
            String::new(),
            "page three".to_string(),
        ]);
        assert_eq!(joined, "page one\n\npage three");
        assert_eq!(join_pages(vec![]), "");
    }
}
