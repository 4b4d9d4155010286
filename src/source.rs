//! Page source abstraction.
//!
//! Isolates the upstream decoder (whatever produces positioned
//! characters and table grids) from the layout and rendering logic,
//! without exposing any concrete decoder types.

use crate::error::{Error, Result};
use crate::model::PageInput;

/// Abstract supplier of per-page conversion input.
///
/// A failure to produce a requested page is a conversion-level failure
/// with page context; the converter never silently skips a page it was
/// asked to render. A page with an empty character list is valid input
/// and yields empty output for that page, not an error.
pub trait PageSource {
    /// Number of pages the source can produce.
    fn page_count(&self) -> usize;

    /// Produce the input for one page (0-indexed).
    fn load_page(&self, index: usize) -> Result<PageInput>;
}

/// In-memory source over already-extracted pages.
impl PageSource for Vec<PageInput> {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn load_page(&self, index: usize) -> Result<PageInput> {
        self.get(index).cloned().ok_or_else(|| Error::PageExtract {
            page: index,
            message: "page index out of range".to_string(),
        })
    }
}

impl PageSource for [PageInput] {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn load_page(&self, index: usize) -> Result<PageInput> {
        self.get(index).cloned().ok_or_else(|| Error::PageExtract {
            page: index,
            message: "page index out of range".to_string(),
        })
    }
}
