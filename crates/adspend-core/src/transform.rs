use polars::prelude::*;

use crate::error::Result;

/// Column-to-type assignments applied once after all joins. Anything not
/// listed here ends up string-typed.
#[derive(Debug, Clone)]
pub struct CastRules {
    pub date_columns: Vec<String>,
    pub double_columns: Vec<String>,
}

impl Default for CastRules {
    fn default() -> Self {
        Self {
            date_columns: vec!["Date".to_string()],
            double_columns: vec![
                "Spend in Local Currency".to_string(),
                "Spend (USD)".to_string(),
                "Impressions".to_string(),
            ],
        }
    }
}

/// Casts every column to its designated type. Casts are non-strict, so an
/// unparsable value becomes null. Rules naming columns that are not present
/// are ignored.
pub fn normalize_types(df: DataFrame, rules: &CastRules) -> Result<DataFrame> {
    let mut exprs = Vec::with_capacity(df.width());
    for name in df.get_column_names() {
        let name = name.as_str();
        let dtype = if rules.date_columns.iter().any(|c| c == name) {
            DataType::Date
        } else if rules.double_columns.iter().any(|c| c == name) {
            DataType::Float64
        } else {
            DataType::String
        };
        exprs.push(col(name).cast(dtype));
    }
    Ok(df.lazy().with_columns(exprs).collect()?)
}

/// Derives the four calendar columns from the date column. A null date
/// yields null derived values.
pub fn add_derived_date_columns(df: DataFrame, date_column: &str) -> Result<DataFrame> {
    Ok(df
        .lazy()
        .with_columns([
            col(date_column).dt().strftime("%Y").alias("date_year_id"),
            col(date_column).dt().strftime("%m").alias("date_month_id"),
            col(date_column)
                .dt()
                .week()
                .cast(DataType::String)
                .alias("date_week_id"),
            col(date_column).dt().strftime("%Y-%m-%d").alias("date_id"),
        ])
        .collect()?)
}

/// Dataset-specific row-level rule.
#[derive(Debug, Clone)]
pub enum RowFilter {
    /// Drops rows whose `column` equals `value`. Rows where the column is
    /// null are kept.
    ExcludeValue { column: String, value: String },
}

pub fn apply_filter(df: DataFrame, filter: &RowFilter) -> Result<DataFrame> {
    match filter {
        RowFilter::ExcludeValue { column, value } => Ok(df
            .lazy()
            .filter(col(column.as_str()).neq_missing(lit(value.as_str())))
            .collect()?),
    }
}
