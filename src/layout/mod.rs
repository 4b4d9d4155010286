//! Layout reconstruction.
//!
//! Rebuilds lines and paragraph blocks from a page's flat character
//! stream, and maintains the document-wide font statistics that drive
//! heading detection. Grouping runs in two passes: the font profile is
//! built over the whole document first, then each page is reconstructed
//! against that read-only profile.

mod block;
mod font;
mod line;

pub use block::{
    group_lines_into_blocks, median_line_height, Block, DEFAULT_LINE_HEIGHT,
    PARAGRAPH_SPACING_FACTOR,
};
pub use font::FontProfile;
pub use line::{group_chars_into_lines, Line, DEFAULT_LINE_TOLERANCE};
