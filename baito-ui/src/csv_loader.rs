//! CSV loader for starter jobs.
//!
//! Jobs are only ever read from CSV; the simulator never writes them back.
//!
//! ## CSV Format
//!
//! Columns are matched by header name, so their order does not matter.
//! Header names are case-sensitive.
//!
//! | Column                   | Required | Notes |
//! |--------------------------|----------|-------|
//! | `id`                     | no       | integer up to `4294967294`; blank cells get the next free id |
//! | `name`                   | yes      | free text |
//! | `hourly_wage`            | yes      | integer, invalid text becomes 0 |
//! | `weekly_hours`           | yes      | integer, invalid text becomes 0 |
//! | `work_days_per_week`     | yes      | integer, invalid text becomes 0 |
//! | `transport_cost_per_day` | yes      | integer, invalid text becomes 0 |
//!
//! Jobs without an id are numbered after the largest explicit id, in file
//! order. Two rows with the same explicit id are rejected.
//!
//! ### Example
//!
//! ```csv
//! name,hourly_wage,weekly_hours,work_days_per_week,transport_cost_per_day
//! 居酒屋,1500,30,5,0
//! 家庭教師,2800,2,1,800
//! ```
use std::path::{Path, PathBuf};

use baito_core::input::coerce_decimal;
use baito_core::{Job, JobId, JobStore, MAX_JOB_ID, StoreError};
use serde::Deserialize;
use tracing::{debug, error};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    id: Option<JobId>,
    name: String,
    hourly_wage: String,
    weekly_hours: String,
    work_days_per_week: String,
    transport_cost_per_day: String,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading starter jobs.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV is structurally invalid (missing column, bad id, ragged row).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// The rows could not form a job store, e.g. two rows share an id.
    #[error("invalid job list: {0}")]
    Store(#[from] StoreError),
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Convert a single CSV row into a [`Job`] with the given id.
fn convert_row(
    row: CsvRow,
    id: JobId,
) -> Job {
    Job {
        id,
        name: row.name,
        hourly_wage: coerce_decimal(&row.hourly_wage),
        weekly_hours: coerce_decimal(&row.weekly_hours),
        work_days_per_week: coerce_decimal(&row.work_days_per_week),
        transport_cost_per_day: coerce_decimal(&row.transport_cost_per_day),
    }
}

/// Parse CSV text and return a [`JobStore`] holding the rows in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid or an `id`
///   cell is not a non-negative integer.
/// * [`CsvLoadError::Store`] if two rows carry the same id, or an id (given
///   or assigned) is above [`MAX_JOB_ID`].
pub fn load_from_str(input: &str) -> Result<JobStore, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let rows = reader
        .deserialize::<CsvRow>()
        .collect::<Result<Vec<_>, _>>()?;

    let mut next_id = rows
        .iter()
        .filter_map(|row| row.id)
        .max()
        .unwrap_or(0)
        .checked_add(1);

    let mut jobs = Vec::with_capacity(rows.len());
    for row in rows {
        let id = match row.id {
            Some(id) => id,
            None => {
                let assigned = next_id
                    .filter(|id| *id <= MAX_JOB_ID)
                    .ok_or(StoreError::IdOutOfRange(JobId::MAX))?;
                next_id = assigned.checked_add(1);
                assigned
            }
        };
        jobs.push(convert_row(row, id));
    }

    let store = JobStore::from_jobs(jobs)?;
    debug!(jobs = store.len(), "parsed starter jobs");
    Ok(store)
}

/// Convenience wrapper: read a file from disk and delegate to [`load_from_str`].
///
/// # Errors
///
/// Returns [`CsvLoadError::Io`] when the file cannot be read, or any error
/// of [`load_from_str`] when its contents are invalid.
pub fn load_from_file(path: &Path) -> Result<JobStore, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        error!(path = %path.display(), %source, "cannot read job file");
        CsvLoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
