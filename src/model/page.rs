//! Page-level input types.

use serde::{Deserialize, Serialize};

use super::{BBox, Table};

/// A single positioned character as produced by the page decoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Char {
    /// Glyph text (usually one character, occasionally a ligature)
    pub text: String,

    /// Font size in points; `None` for non-text glyphs. Unsized
    /// characters participate in layout grouping but not in font
    /// statistics.
    #[serde(default)]
    pub size: Option<f32>,

    /// Left edge
    pub x0: f32,

    /// Right edge
    pub x1: f32,

    /// Distance from the top of the page to the upper edge
    pub top: f32,

    /// Distance from the top of the page to the lower edge
    pub bottom: f32,
}

impl Char {
    /// Create a sized character.
    pub fn new(text: impl Into<String>, size: f32, x0: f32, x1: f32, top: f32, bottom: f32) -> Self {
        Self {
            text: text.into(),
            size: Some(size),
            x0,
            x1,
            top,
            bottom,
        }
    }

    /// Create a character with no font size (non-text glyph).
    pub fn without_size(text: impl Into<String>, x0: f32, x1: f32, top: f32, bottom: f32) -> Self {
        Self {
            text: text.into(),
            size: None,
            x0,
            x1,
            top,
            bottom,
        }
    }

    /// Vertical center of the glyph box.
    pub fn v_center(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    /// The glyph's bounding box.
    pub fn bbox(&self) -> BBox {
        BBox::new(self.x0, self.top, self.x1, self.bottom)
    }
}

/// One page of decoder output: characters plus detected tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageInput {
    /// Positioned characters, in no particular order
    #[serde(default)]
    pub chars: Vec<Char>,

    /// Pre-detected table grids with their bounding boxes
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl PageInput {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page holding only characters.
    pub fn with_chars(chars: Vec<Char>) -> Self {
        Self {
            chars,
            tables: Vec::new(),
        }
    }

    /// Check if the page carries no input at all.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty() && self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_v_center() {
        let ch = Char::new("a", 12.0, 0.0, 6.0, 100.0, 112.0);
        assert_eq!(ch.v_center(), 106.0);
    }

    #[test]
    fn test_char_without_size() {
        let ch = Char::without_size("•", 0.0, 4.0, 50.0, 54.0);
        assert!(ch.size.is_none());
        assert_eq!(ch.bbox(), BBox::new(0.0, 50.0, 4.0, 54.0));
    }

    #[test]
    fn test_page_input_empty() {
        assert!(PageInput::new().is_empty());
        let page = PageInput::with_chars(vec![Char::new("x", 10.0, 0.0, 5.0, 0.0, 10.0)]);
        assert!(!page.is_empty());
    }

    #[test]
    fn test_char_deserialize_missing_size() {
        let ch: Char =
            serde_json::from_str(r#"{"text":"a","x0":0.0,"x1":5.0,"top":0.0,"bottom":10.0}"#)
                .unwrap();
        assert!(ch.size.is_none());
    }
}
