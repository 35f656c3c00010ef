use std::path::{Path, PathBuf};

use polars::prelude::*;
use tracing::error;

use crate::error::{PipelineError, Result};

/// Reads one CSV export with a header row, every column string-typed.
/// A read failure is logged and absorbed; the caller skips absent sources.
pub fn read_table(path: &Path) -> Option<DataFrame> {
    match try_read(path) {
        Ok(df) => Some(df),
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to read source file");
            None
        }
    }
}

fn try_read(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    Ok(df)
}

/// Appends `right` onto `left`. Requires identical column order and arity.
/// On failure the left table is kept unchanged and the dropped rows are
/// visible only in the log.
pub fn union(left: DataFrame, right: &DataFrame) -> DataFrame {
    match left.vstack(right) {
        Ok(df) => df,
        Err(e) => {
            error!(error = %e, "failed to union tables, keeping left table");
            left
        }
    }
}

/// Loads every source file and folds them into one working table. Unreadable
/// sources are skipped; if none load at all there is nothing to pipeline.
pub fn accumulate(paths: &[PathBuf]) -> Result<DataFrame> {
    let mut working: Option<DataFrame> = None;
    for path in paths {
        let Some(table) = read_table(path) else {
            continue;
        };
        working = Some(match working {
            None => table,
            Some(acc) => union(acc, &table),
        });
    }
    working.ok_or_else(|| PipelineError::Processing("no readable source files".to_string()))
}
