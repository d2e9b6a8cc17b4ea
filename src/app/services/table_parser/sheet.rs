//! Spreadsheet cell-grid to delimited-text adapter
//!
//! The core never touches a live workbook: the presentation layer extracts a
//! selected sheet into a plain cell grid, and this adapter renders it as
//! comma-delimited text for the table parser. Instrument exports often
//! prepend metadata rows before the real header, so a 1-based header-row
//! offset drops the leading rows.

/// A sheet already extracted from a workbook: its name and raw cell values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetGrid {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

/// Render a sheet as comma-delimited text, dropping `header_row_offset - 1`
/// leading rows when the 1-based offset exceeds 1.
pub fn extract_sheet_text(sheet: &SheetGrid, header_row_offset: usize) -> String {
    let skip = header_row_offset.saturating_sub(1);

    sheet
        .rows
        .iter()
        .skip(skip)
        .map(|row| {
            row.iter()
                .map(|cell| quote_cell(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// CSV-quote a cell when it contains a comma, quote, or newline.
fn quote_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
