//! CSV export of the exercise history.

use crate::{HistoryEntry, Result, User};
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    date: String,
    exercise: String,
    reps: Option<u32>,
    duration_seconds: Option<u32>,
    distance_miles: Option<f64>,
}

impl From<&HistoryEntry> for CsvRow {
    fn from(entry: &HistoryEntry) -> Self {
        CsvRow {
            date: entry.date.to_rfc3339(),
            exercise: entry.exercise.clone(),
            reps: entry.reps,
            duration_seconds: entry.duration_seconds,
            distance_miles: entry.distance_miles,
        }
    }
}

/// Write the user's full exercise history as CSV.
///
/// Returns the number of rows written. An empty history still produces a
/// file with headers.
pub fn write_history_csv(user: &User, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Headers written explicitly so an empty history still yields them
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(["date", "exercise", "reps", "duration_seconds", "distance_miles"])?;

    let mut count = 0;
    for entry in &user.stats.exercise_history {
        writer.serialize(CsvRow::from(entry))?;
        count += 1;
    }
    writer.flush()?;

    tracing::info!("Exported {} history rows to {}", count, path.display());
    Ok(count)
}
