//! Delimiter auto-detection for plain-text exports

use crate::constants::DELIMITER_SCAN_LINES;

/// Field delimiter of a delimited export.
///
/// Spreadsheet-derived text is always comma-delimited; plain text files are
/// auto-detected with [`detect_delimiter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
        }
    }
}

/// Detect the delimiter by counting tab and comma occurrences over the first
/// five lines. Tab wins only when strictly more frequent; ties favor comma.
pub fn detect_delimiter(text: &str) -> Delimiter {
    let mut tabs = 0usize;
    let mut commas = 0usize;

    for line in text.lines().take(DELIMITER_SCAN_LINES) {
        tabs += line.matches('\t').count();
        commas += line.matches(',').count();
    }

    if tabs > commas {
        Delimiter::Tab
    } else {
        Delimiter::Comma
    }
}
