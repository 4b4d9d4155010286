//! # pagemd
//!
//! Reconstructs human-readable document structure (headings,
//! paragraphs, tables) from a flat stream of positioned characters,
//! and renders it as Markdown.
//!
//! The input is what a page decoder produces: per page, a list of
//! characters with bounding boxes and font sizes, plus pre-detected
//! table grids. The output is a Markdown string suitable for search
//! indexing and chunking pipelines that need segmented text rather
//! than raw character soup.
//!
//! ## Quick Start
//!
//! ```
//! use pagemd::{convert, Char, PageInput};
//!
//! // "Report" at 24pt above a 12pt body paragraph
//! let mut chars: Vec<Char> = "Report"
//!     .chars()
//!     .enumerate()
//!     .map(|(i, c)| {
//!         let x0 = i as f32 * 12.0;
//!         Char::new(c.to_string(), 24.0, x0, x0 + 12.0, 20.0, 44.0)
//!     })
//!     .collect();
//! for (i, c) in "Quarterly results were steady.".chars().enumerate() {
//!     let x0 = i as f32 * 6.0;
//!     chars.push(Char::new(c.to_string(), 12.0, x0, x0 + 6.0, 60.0, 72.0));
//! }
//!
//! let markdown = convert(&[PageInput::with_chars(chars)])?;
//! assert_eq!(markdown, "# Report\nQuarterly results were steady.");
//! # Ok::<(), pagemd::Error>(())
//! ```
//!
//! ## How it works
//!
//! Conversion is strictly two-pass. Pass 1 walks every page to build a
//! document-wide font-size histogram; its mode is the body text size.
//! Pass 2 reconstructs each page independently: characters cluster
//! into lines by vertical proximity, lines into paragraph blocks by
//! spacing, and each line's size ratio to the body size decides
//! heading depth. Blocks and tables then interleave into reading
//! order, and pages render in parallel.

pub mod error;
pub mod layout;
pub mod model;
pub mod options;
pub mod render;
pub mod source;

pub use error::{Error, Result};
pub use layout::{Block, FontProfile, Line};
pub use model::{BBox, Char, PageInput, Table};
pub use options::ConvertOptions;
pub use render::{
    render_table, text_pages_to_markdown, DegradeReason, PageElement, TableRender,
};
pub use source::PageSource;

/// Convert extracted pages to a Markdown document with default
/// options.
///
/// Zero pages, or pages with no extractable content, yield an empty
/// string rather than an error.
pub fn convert(pages: &[PageInput]) -> Result<String> {
    render::pages_to_markdown(pages, &ConvertOptions::default())
}

/// Convert extracted pages with custom options.
///
/// # Example
///
/// ```
/// use pagemd::{convert_with_options, ConvertOptions, PageInput};
///
/// let options = ConvertOptions::new().sequential();
/// let markdown = convert_with_options(&[PageInput::new()], &options)?;
/// assert_eq!(markdown, "");
/// # Ok::<(), pagemd::Error>(())
/// ```
pub fn convert_with_options(pages: &[PageInput], options: &ConvertOptions) -> Result<String> {
    render::pages_to_markdown(pages, options)
}

/// Convert every page of a [`PageSource`].
///
/// All pages are loaded before rendering starts (the font profile
/// needs the whole document), and any load failure aborts the
/// conversion with the failing page's index attached.
pub fn convert_source<S: PageSource + ?Sized>(
    source: &S,
    options: &ConvertOptions,
) -> Result<String> {
    options.validate()?;

    let mut pages = Vec::with_capacity(source.page_count());
    for index in 0..source.page_count() {
        let page = source.load_page(index).map_err(|err| match err {
            err @ Error::PageExtract { .. } => err,
            other => Error::PageExtract {
                page: index,
                message: other.to_string(),
            },
        })?;
        pages.push(page);
    }

    render::pages_to_markdown(&pages, options)
}

/// Builder for configuring and running conversions.
///
/// # Example
///
/// ```
/// use pagemd::{PageInput, Pagemd};
///
/// let markdown = Pagemd::new()
///     .with_line_tolerance(2.5)
///     .sequential()
///     .convert(&[PageInput::new()])?;
/// assert_eq!(markdown, "");
/// # Ok::<(), pagemd::Error>(())
/// ```
pub struct Pagemd {
    options: ConvertOptions,
}

impl Pagemd {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Set the line clustering tolerance.
    pub fn with_line_tolerance(mut self, tolerance: f32) -> Self {
        self.options = self.options.with_line_tolerance(tolerance);
        self
    }

    /// Set the paragraph spacing factor.
    pub fn with_spacing_factor(mut self, factor: f32) -> Self {
        self.options = self.options.with_spacing_factor(factor);
        self
    }

    /// Disable parallel page rendering.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// The configured options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert extracted pages.
    pub fn convert(&self, pages: &[PageInput]) -> Result<String> {
        render::pages_to_markdown(pages, &self.options)
    }

    /// Convert every page of a [`PageSource`].
    pub fn convert_source<S: PageSource + ?Sized>(&self, source: &S) -> Result<String> {
        crate::convert_source(source, &self.options)
    }
}

impl Default for Pagemd {
    fn default() -> Self {
        Self::new()
    }
}
