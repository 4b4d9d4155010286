//! Table input types.

use serde::{Deserialize, Serialize};

use super::BBox;

/// An externally detected table: a bounding box and a 2-D grid of
/// optional cell strings.
///
/// Row 0 is treated as the header when the table is rendered. Absent
/// cells (`None`) render as empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Bounding box, used solely for reading-order placement
    pub bbox: BBox,

    /// Cell grid; rows need not all have the same length
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Create a table from a bounding box and cell grid.
    pub fn new(bbox: BBox, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { bbox, rows }
    }

    /// Build a grid from string rows, for tests and fixtures.
    pub fn from_strings<R, S>(bbox: BBox, rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|cell| Some(cell.into())).collect())
            .collect();
        Self { bbox, rows }
    }

    /// Number of rows in the grid.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the header row.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
