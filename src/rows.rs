//! Headerless CSV row reading with strict quote checking.
//!
//! The `csv` crate silently repairs stray quotes (`"x"y` reads as `xy`), so
//! each record's raw bytes are checked before the record is handed out:
//! a quote may only open a field, and inside a quoted field it must be
//! doubled or close the field.

use crate::error::{CategorizerError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

/// Reads every record from `reader`, in order.
///
/// Rows with malformed quoting are rejected with
/// [`CategorizerError::InvalidRecord`] and a 1-based row number.
pub(crate) fn read_rows<R: Read>(
    mut reader: R,
    source_name: &str,
) -> Result<Vec<StringRecord>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_slice());

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    while csv_reader.read_record(&mut record)? {
        let row = rows.len() + 1;
        let start = record.position().map(|p| p.byte()).unwrap_or(0) as usize;
        let end = csv_reader.position().byte() as usize;
        let raw = data.get(start..end).unwrap_or_default();

        if let Err(message) = check_quoting(raw) {
            return Err(CategorizerError::InvalidRecord {
                source_name: source_name.to_string(),
                row,
                message: message.to_string(),
            });
        }
        rows.push(record.clone());
    }

    Ok(rows)
}

/// Validates the quoting of one raw CSV record (terminator included).
fn check_quoting(raw: &[u8]) -> std::result::Result<(), &'static str> {
    let mut at_field_start = true;
    let mut in_quotes = false;
    let mut after_close = false;

    let mut i = 0;
    while i < raw.len() {
        let b = raw[i];
        if in_quotes {
            if b == b'"' {
                if raw.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    in_quotes = false;
                    after_close = true;
                }
            }
        } else {
            match b {
                b',' | b'\n' | b'\r' => {
                    at_field_start = true;
                    after_close = false;
                }
                _ if after_close => return Err("extraneous text after closing quote"),
                b'"' if at_field_start => {
                    in_quotes = true;
                    at_field_start = false;
                }
                b'"' => return Err("bare quote in unquoted field"),
                _ => at_field_start = false,
            }
        }
        i += 1;
    }

    if in_quotes {
        return Err("unterminated quoted field");
    }
    Ok(())
}
