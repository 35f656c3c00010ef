use polars::prelude::DataFrame;
use tracing::{debug, info};

/// Row-count summary after a pipeline stage. Diagnostic only, not a stable
/// interface.
pub fn report(stage: &str, df: &DataFrame) {
    info!(stage, rows = %format_count(df.height()), "stage complete");
    debug!(stage, schema = ?df.schema(), "working table schema");
}

/// Thousands-separated rendering of a row count.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
