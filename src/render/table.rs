//! Markdown table rendering.

use crate::model::Table;

/// Outcome of rendering one table grid.
///
/// A grid that cannot produce a table degrades to empty output instead
/// of failing the page; the enum keeps that contract visible at the
/// call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRender {
    /// Pipe-delimited Markdown: header row, separator, data rows.
    Markdown(String),
    /// No renderable table; the page continues without it.
    Degraded(DegradeReason),
}

/// Why a grid degraded to empty output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradeReason {
    /// Fewer than two rows: no header/data split to render.
    TooFewRows,
    /// The header row has no cells.
    EmptyHeader,
}

impl TableRender {
    /// The rendered Markdown, or the empty string when degraded.
    pub fn into_markdown(self) -> String {
        match self {
            TableRender::Markdown(md) => md,
            TableRender::Degraded(_) => String::new(),
        }
    }

    /// Check if the grid degraded.
    pub fn is_degraded(&self) -> bool {
        matches!(self, TableRender::Degraded(_))
    }
}

/// Render a cell grid as a Markdown table.
///
/// Row 0 is the header; the separator row repeats `---` once per
/// header column. Cells are trimmed, absent cells render as empty
/// strings, and empty data rows are skipped.
pub fn render_table(table: &Table) -> TableRender {
    if table.rows.len() < 2 {
        return TableRender::Degraded(DegradeReason::TooFewRows);
    }

    let header = &table.rows[0];
    if header.is_empty() {
        return TableRender::Degraded(DegradeReason::EmptyHeader);
    }

    let mut out = Vec::with_capacity(table.rows.len() + 1);
    out.push(format_row(header));
    out.push(format!("| {} |", vec!["---"; header.len()].join(" | ")));
    for row in &table.rows[1..] {
        if row.is_empty() {
            continue;
        }
        out.push(format_row(row));
    }

    TableRender::Markdown(out.join("\n"))
}

fn format_row(cells: &[Option<String>]) -> String {
    let rendered: Vec<&str> = cells
        .iter()
        .map(|cell| cell.as_deref().map(str::trim).unwrap_or(""))
        .collect();
    format!("| {} |", rendered.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BBox;

    fn bbox() -> BBox {
        BBox::new(0.0, 0.0, 100.0, 50.0)
    }

    #[test]
    fn test_header_and_data_rows() {
        let table = Table::new(
            bbox(),
            vec![
                vec![Some("A".to_string()), Some("B".to_string())],
                vec![Some("1".to_string()), Some("2".to_string())],
                vec![Some("3".to_string()), None],
            ],
        );
        let md = render_table(&table).into_markdown();
        assert_eq!(md, "| A | B |\n| --- | --- |\n| 1 | 2 |\n| 3 |  |");
    }

    #[test]
    fn test_cells_are_trimmed() {
        let table = Table::new(
            bbox(),
            vec![
                vec![Some("  Name  ".to_string()), Some("Age".to_string())],
                vec![Some(" Alice ".to_string()), Some("30".to_string())],
            ],
        );
        let md = render_table(&table).into_markdown();
        assert!(md.starts_with("| Name | Age |"));
        assert!(md.ends_with("| Alice | 30 |"));
    }

    #[test]
    fn test_zero_and_one_row_degrade() {
        let empty = Table::new(bbox(), vec![]);
        assert_eq!(
            render_table(&empty),
            TableRender::Degraded(DegradeReason::TooFewRows)
        );
        assert_eq!(render_table(&empty).into_markdown(), "");

        let header_only = Table::from_strings(bbox(), [["A", "B"]]);
        assert!(render_table(&header_only).is_degraded());
    }

    #[test]
    fn test_empty_header_degrades() {
        let table = Table::new(bbox(), vec![vec![], vec![Some("1".to_string())]]);
        assert_eq!(
            render_table(&table),
            TableRender::Degraded(DegradeReason::EmptyHeader)
        );
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let table = Table::from_strings(bbox(), [["H1", "H2"], ["a", "b"], ["c", "d"]]);
        let first = render_table(&table).into_markdown();
        let second = render_table(&table).into_markdown();
        assert_eq!(first, second);
    }
}
