//! CSV ingestion for content-plan spreadsheet exports.
//!
//! The reader understands the quoting subset spreadsheets actually emit:
//! double-quoted fields may contain commas and line breaks, and a doubled
//! quote (`""`) inside a quoted field is a literal quote. Field values are
//! trimmed and every data row becomes a JSON object keyed by the header row.

use serde_json::{Map, Value};

/// A converted data row, keyed by header name in header order.
pub type Record = Map<String, Value>;

/// Structural problems that prevent a conversion.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CsvError {
    /// The input has no header row or no data row after it.
    #[error("CSV file must have at least a header row and one data row")]
    MissingRows,
    /// A quoted field was still open when the input ended.
    #[error("unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },
}

/// Split CSV text into rows of trimmed field values.
///
/// Blank lines are skipped. A leading UTF-8 byte order mark is ignored.
///
/// # Errors
///
/// Returns [`CsvError::UnterminatedQuote`] when the input ends inside a
/// quoted field.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<String>>, CsvError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut quote_line = 0;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => {
                in_quotes = !in_quotes;
                quote_line = line;
            }
            ',' if !in_quotes => {
                row.push(field.trim().to_owned());
                field.clear();
            }
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {}
            '\n' if !in_quotes => {
                line += 1;
                row.push(field.trim().to_owned());
                field.clear();
                finish_row(&mut rows, std::mem::take(&mut row));
            }
            other => {
                if other == '\n' {
                    line += 1;
                }
                field.push(other);
            }
        }
    }

    if in_quotes {
        return Err(CsvError::UnterminatedQuote { line: quote_line });
    }

    row.push(field.trim().to_owned());
    finish_row(&mut rows, row);
    Ok(rows)
}

/// Convert CSV text into one [`Record`] per data row.
///
/// Missing trailing values become empty strings; values beyond the header
/// width are dropped.
///
/// # Errors
///
/// Returns [`CsvError::MissingRows`] when there is no header or no data row,
/// and propagates [`CsvError::UnterminatedQuote`] from [`parse_rows`].
pub fn parse_csv(text: &str) -> Result<Vec<Record>, CsvError> {
    let mut rows = parse_rows(text)?.into_iter();
    let headers = rows.next().ok_or(CsvError::MissingRows)?;

    let records: Vec<Record> = rows
        .map(|values| {
            headers
                .iter()
                .enumerate()
                .map(|(index, header)| {
                    let value = values.get(index).cloned().unwrap_or_default();
                    (header.clone(), Value::String(value))
                })
                .collect()
        })
        .collect();

    if records.is_empty() {
        return Err(CsvError::MissingRows);
    }
    Ok(records)
}

fn finish_row(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    let blank = row.len() == 1 && row[0].is_empty();
    if !blank {
        rows.push(row);
    }
}

#[cfg(test)]
#[path = "csv_test.rs"]
mod tests;
