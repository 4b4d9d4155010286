//! Low-fidelity text-only fallback rendering.
//!
//! For sources where no font or position data is available, this mode
//! works from whole-page plain text: paragraphs split on blank lines,
//! short unpunctuated paragraphs promoted to `##` headings. Lower
//! fidelity than layout reconstruction, but still valid Markdown.

/// Paragraphs shorter than this qualify as headings in fallback mode.
const FALLBACK_HEADING_LEN: usize = 80;

/// Convert already-extracted per-page plain text to Markdown.
pub fn text_pages_to_markdown(pages: &[String]) -> String {
    let mut parts: Vec<String> = Vec::new();

    for text in pages {
        if text.trim().is_empty() {
            continue;
        }
        for para in text.split("\n\n") {
            let para = para.trim().replace('\n', " ");
            if para.is_empty() {
                continue;
            }
            if para.chars().count() < FALLBACK_HEADING_LEN
                && !para.ends_with('.')
                && !para.ends_with(',')
            {
                parts.push(format!("## {para}"));
            } else {
                parts.push(para);
            }
        }
    }

    parts.join("\n\n")
}
