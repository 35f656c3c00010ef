use std::fs;
use std::path::Path;

use polars::prelude::*;
use tracing::{error, info};

use crate::error::Result;
use crate::stats;

const OUTPUT_FILE_NAME: &str = "data.csv";

/// Writes the working table into `dir` as a single header-bearing CSV file.
/// Failure is logged, never raised; the driver proceeds to the next dataset.
pub fn write_output(df: &DataFrame, dir: &Path) {
    match try_write(df, dir) {
        Ok(()) => info!(
            path = %dir.join(OUTPUT_FILE_NAME).display(),
            rows = %stats::format_count(df.height()),
            "output written"
        ),
        Err(e) => error!(path = %dir.display(), error = %e, "failed to write output"),
    }
}

fn try_write(df: &DataFrame, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    let mut file = fs::File::create(dir.join(OUTPUT_FILE_NAME))?;
    let mut out = df.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut out)?;
    Ok(())
}
