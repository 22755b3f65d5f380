//! CSV generation-profile loader.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Profile parsing error with the offending row, when one is known.
#[derive(Debug)]
pub struct ProfileError {
    /// 1-based CSV row, when a specific row is at fault.
    pub row: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "profile error at row {row}: {}", self.message),
            None => write!(f, "profile error: {}", self.message),
        }
    }
}

impl std::error::Error for ProfileError {}

impl From<io::Error> for ProfileError {
    fn from(e: io::Error) -> Self {
        Self {
            row: None,
            message: e.to_string(),
        }
    }
}

/// Loads an hourly MW profile from a CSV file.
///
/// See [`read_profile`] for the accepted layouts.
///
/// # Errors
///
/// Returns a `ProfileError` if the file cannot be opened or parsed.
pub fn load_profile_csv(path: &Path) -> Result<Vec<f32>, ProfileError> {
    let file = File::open(path).map_err(|e| ProfileError {
        row: None,
        message: format!("cannot open \"{}\": {e}", path.display()),
    })?;
    read_profile(file)
}

/// Reads an hourly MW profile from any reader.
///
/// Accepts one value per row, either as a single column or as the last
/// column of a `hour,value` layout. A non-numeric first row is treated as
/// a header and skipped. Negative readings are clamped to zero: raw PV
/// exports carry small negative night-time values that are sensor
/// artifacts, not generation.
///
/// The row count is not checked here; the dispatch engine rejects series
/// that are not exactly one year long.
///
/// # Errors
///
/// Returns a `ProfileError` naming the first unparseable row.
pub fn read_profile(reader: impl Read) -> Result<Vec<f32>, ProfileError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut values = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| ProfileError {
            row: Some(idx + 1),
            message: e.to_string(),
        })?;
        let field = match record.iter().last() {
            Some(f) if !f.is_empty() => f,
            _ => continue, // blank line
        };
        match field.parse::<f32>() {
            Ok(v) => values.push(v.max(0.0)),
            Err(_) if idx == 0 => continue, // header row
            Err(_) => {
                return Err(ProfileError {
                    row: Some(idx + 1),
                    message: format!("\"{field}\" is not a number"),
                });
            }
        }
    }
    Ok(values)
}
