//! Trial reader - whitespace-delimited text into a fixed-schema `RecordBatch`

use crate::{Error, Result};
use arrow::array::{ArrayRef, AsArray, Float64Array, Int64Array, RecordBatch};
use arrow::datatypes::{DataType, Field, Float64Type, Int64Type, Schema, SchemaRef};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Column names, in file order
pub const TRIAL_COLUMNS: [&str; 6] = ["Trial", "Error", "RT", "Average RT", "Commissions", "Lapses"];

const TRIAL: usize = 0;
const ERROR: usize = 1;
const RT: usize = 2;
const AVERAGE_RT: usize = 3;
const COMMISSIONS: usize = 4;
const LAPSES: usize = 5;

/// Arrow schema of a trial table
#[must_use]
pub fn trial_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(TRIAL_COLUMNS[TRIAL], DataType::Int64, false),
        Field::new(TRIAL_COLUMNS[ERROR], DataType::Int64, false),
        Field::new(TRIAL_COLUMNS[RT], DataType::Float64, false),
        Field::new(TRIAL_COLUMNS[AVERAGE_RT], DataType::Float64, false),
        Field::new(TRIAL_COLUMNS[COMMISSIONS], DataType::Int64, false),
        Field::new(TRIAL_COLUMNS[LAPSES], DataType::Int64, false),
    ]))
}

/// One parsed trial file
///
/// Wraps a `RecordBatch` whose schema is always [`trial_schema`], so the
/// typed column accessors cannot fail.
#[derive(Debug, Clone)]
pub struct TrialTable {
    batch: RecordBatch,
}

impl TrialTable {
    /// Wrap an existing batch
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if the batch schema is not [`trial_schema`]
    pub fn from_batch(batch: RecordBatch) -> Result<Self> {
        let expected = trial_schema();
        if batch.schema() != expected {
            return Err(Error::InvalidInput(format!(
                "Schema mismatch: expected {:?}, got {:?}",
                expected,
                batch.schema()
            )));
        }
        Ok(Self { batch })
    }

    /// Underlying record batch
    #[must_use]
    pub const fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    /// Number of rows (response events)
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// `Trial` column
    #[must_use]
    pub fn trial(&self) -> &Int64Array {
        self.batch.column(TRIAL).as_primitive::<Int64Type>()
    }

    /// `Error` column
    #[must_use]
    pub fn error(&self) -> &Int64Array {
        self.batch.column(ERROR).as_primitive::<Int64Type>()
    }

    /// `RT` column (ms)
    #[must_use]
    pub fn rt(&self) -> &Float64Array {
        self.batch.column(RT).as_primitive::<Float64Type>()
    }

    /// `Average RT` column (ms)
    #[must_use]
    pub fn average_rt(&self) -> &Float64Array {
        self.batch.column(AVERAGE_RT).as_primitive::<Float64Type>()
    }

    /// `Commissions` column
    #[must_use]
    pub fn commissions(&self) -> &Int64Array {
        self.batch.column(COMMISSIONS).as_primitive::<Int64Type>()
    }

    /// `Lapses` column
    #[must_use]
    pub fn lapses(&self) -> &Int64Array {
        self.batch.column(LAPSES).as_primitive::<Int64Type>()
    }
}

/// Read and parse one trial file
///
/// # Errors
/// Returns [`Error::TrialFile`] wrapping the IO or parse failure
pub fn read_trial<P: AsRef<Path>>(path: P) -> Result<TrialTable> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .map_err(Error::from)
        .and_then(|text| parse_trial(&text))
        .map_err(|e| e.in_trial_file(path))
}

/// Parse trial text: one row per non-blank line, six whitespace-separated fields
///
/// # Errors
/// Returns [`Error::Parse`] if a row has the wrong field count, a field is
/// not numeric, or there are no rows at all
pub fn parse_trial(text: &str) -> Result<TrialTable> {
    let mut trial = Vec::new();
    let mut error = Vec::new();
    let mut rt = Vec::new();
    let mut average_rt = Vec::new();
    let mut commissions = Vec::new();
    let mut lapses = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let fields: Vec<&str> = raw.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != TRIAL_COLUMNS.len() {
            return Err(Error::Parse {
                line,
                message: format!(
                    "expected {} fields, found {}",
                    TRIAL_COLUMNS.len(),
                    fields.len()
                ),
            });
        }

        trial.push(parse_int(fields[TRIAL], TRIAL, line)?);
        error.push(parse_int(fields[ERROR], ERROR, line)?);
        rt.push(parse_float(fields[RT], RT, line)?);
        average_rt.push(parse_float(fields[AVERAGE_RT], AVERAGE_RT, line)?);
        commissions.push(parse_int(fields[COMMISSIONS], COMMISSIONS, line)?);
        lapses.push(parse_int(fields[LAPSES], LAPSES, line)?);
    }

    if trial.is_empty() {
        return Err(Error::Parse {
            line: 0,
            message: "no data rows".to_string(),
        });
    }

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from(trial)),
        Arc::new(Int64Array::from(error)),
        Arc::new(Float64Array::from(rt)),
        Arc::new(Float64Array::from(average_rt)),
        Arc::new(Int64Array::from(commissions)),
        Arc::new(Int64Array::from(lapses)),
    ];
    let batch = RecordBatch::try_new(trial_schema(), columns)?;
    Ok(TrialTable { batch })
}

fn parse_int(field: &str, column: usize, line: usize) -> Result<i64> {
    field.parse::<i64>().map_err(|e| Error::Parse {
        line,
        message: format!(
            "column '{}': '{field}' is not an integer ({e})",
            TRIAL_COLUMNS[column]
        ),
    })
}

fn parse_float(field: &str, column: usize, line: usize) -> Result<f64> {
    field.parse::<f64>().map_err(|e| Error::Parse {
        line,
        message: format!(
            "column '{}': '{field}' is not a number ({e})",
            TRIAL_COLUMNS[column]
        ),
    })
}
