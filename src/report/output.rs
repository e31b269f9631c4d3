use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::MealRecord;

/// Write the record sequence as a CSV file, creating parent directories.
///
/// The header row comes from the record's field names; the downstream
/// feature-preparation step depends on that exact set and order.
pub fn write_records<P: AsRef<Path>>(path: P, records: &[MealRecord]) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut wtr = csv::Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
