use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};

use super::ImportError;

/// Raw cells of the first worksheet, header row first.
pub type Grid = Vec<Vec<Data>>;

/// Parse an uploaded workbook (xlsx, xls, xlsb or ods) and return the cells of its first sheet.
pub fn read_first_sheet(bytes: Vec<u8>) -> Result<Grid, ImportError> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(ImportError::Unreadable)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::NoWorksheet)?
        .map_err(ImportError::Unreadable)?;

    Ok(range.rows().map(|row| row.to_vec()).collect())
}

/// Render a cell as trimmed text. Whole numbers lose their `.0` so numeric order numbers
/// survive the round trip.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if f.fract().abs() < f64::EPSILON {
                format!("{:.0}", f)
            } else {
                f.to_string()
            }
        }
        Data::Int(v) => v.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Read a cell as a number. Text is read up to the first character that cannot continue
/// a number, so `"12.5kg"` is 12.5. Blank or non-numeric cells count as zero.
pub fn cell_number(cell: &Data) -> f64 {
    let value = match cell {
        Data::Float(f) => *f,
        Data::Int(v) => *v as f64,
        Data::String(s) => leading_number(s).unwrap_or(0.0),
        _ => 0.0,
    };
    if value.is_finite() { value } else { 0.0 }
}

/// Longest prefix of `text` (after leading whitespace) that forms a decimal number:
/// optional sign, digits with at most one `.`, optional exponent.
fn leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // The exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse::<f64>().ok()
}

pub fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
