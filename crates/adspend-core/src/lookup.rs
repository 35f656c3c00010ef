use std::path::PathBuf;

use polars::prelude::*;
use tracing::error;

use crate::error::Result;
use crate::source;

/// How a lookup join treats unmatched working-table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    LeftOuter,
}

impl JoinKind {
    fn to_polars(self) -> JoinType {
        match self {
            JoinKind::Inner => JoinType::Inner,
            JoinKind::LeftOuter => JoinType::Left,
        }
    }
}

/// One step of the enrichment chain: which lookup file, the key column pair,
/// and the join kind. Steps are applied in order, each output becoming the
/// next step's working table.
#[derive(Debug, Clone)]
pub struct LookupJoin {
    pub name: &'static str,
    pub path: PathBuf,
    pub left_on: &'static str,
    pub right_on: &'static str,
    pub kind: JoinKind,
}

/// Applies one configured join step. An unreadable lookup file downgrades the
/// step to a no-op, the same fallback shape as every other step.
pub fn apply(working: DataFrame, join: &LookupJoin) -> DataFrame {
    let Some(lookup) = source::read_table(&join.path) else {
        error!(lookup = join.name, "lookup table unavailable, skipping join");
        return working;
    };
    join_with_lookup(working, &lookup, join.left_on, join.right_on, join.kind)
}

/// Equi-joins the working table against a lookup table. Both key columns are
/// kept in the output: later joins and the region filter read the lookup-side
/// key. On failure the pre-join table is returned unchanged.
pub fn join_with_lookup(
    working: DataFrame,
    lookup: &DataFrame,
    left_on: &str,
    right_on: &str,
    kind: JoinKind,
) -> DataFrame {
    match try_join(&working, lookup, left_on, right_on, kind) {
        Ok(joined) => joined,
        Err(e) => {
            error!(left_on, right_on, error = %e, "lookup join failed, keeping unjoined table");
            working
        }
    }
}

fn try_join(
    working: &DataFrame,
    lookup: &DataFrame,
    left_on: &str,
    right_on: &str,
    kind: JoinKind,
) -> Result<DataFrame> {
    let mut args = JoinArgs::new(kind.to_polars()).with_coalesce(JoinCoalesce::KeepColumns);
    args.maintain_order = MaintainOrderJoin::Left;
    let joined = working
        .clone()
        .lazy()
        .join(lookup.clone().lazy(), [col(left_on)], [col(right_on)], args)
        .collect()?;
    Ok(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn working() -> DataFrame {
        df!(
            "Region" => ["West", "East", "Nowhere"],
            "Spend (USD)" => ["1.0", "2.0", "3.0"],
        )
        .unwrap()
    }

    fn region_lookup() -> DataFrame {
        df!(
            "region_id" => ["West", "East"],
            "region_name" => ["Western", "Eastern"],
        )
        .unwrap()
    }

    #[test]
    fn left_outer_join_preserves_every_row() {
        let joined = join_with_lookup(
            working(),
            &region_lookup(),
            "Region",
            "region_id",
            JoinKind::LeftOuter,
        );

        assert_eq!(joined.height(), 3);
        let names = joined.column("region_name").unwrap();
        assert_eq!(names.null_count(), 1);
    }

    #[test]
    fn inner_join_drops_unmatched_rows() {
        let joined = join_with_lookup(
            working(),
            &region_lookup(),
            "Region",
            "region_id",
            JoinKind::Inner,
        );

        assert_eq!(joined.height(), 2);
        assert_eq!(joined.column("region_name").unwrap().null_count(), 0);
    }

    #[test]
    fn lookup_key_column_survives_the_join() {
        let joined = join_with_lookup(
            working(),
            &region_lookup(),
            "Region",
            "region_id",
            JoinKind::LeftOuter,
        );

        let key = joined.column("region_id").unwrap().as_materialized_series().str().unwrap();
        assert_eq!(key.get(0), Some("West"));
        assert_eq!(key.get(2), None);
    }

    #[test]
    fn duplicate_lookup_key_fans_out_rows() {
        let duplicated = df!(
            "region_id" => ["West", "West"],
            "region_name" => ["Western", "Western again"],
        )
        .unwrap();

        let joined = join_with_lookup(
            working(),
            &duplicated,
            "Region",
            "region_id",
            JoinKind::LeftOuter,
        );
        assert_eq!(joined.height(), 4);
    }

    #[test]
    fn failed_join_returns_working_table_unchanged() {
        let before = working();
        let joined = join_with_lookup(
            before.clone(),
            &region_lookup(),
            "No Such Column",
            "region_id",
            JoinKind::Inner,
        );

        assert_eq!(joined.height(), before.height());
        assert_eq!(joined.get_column_names(), before.get_column_names());
    }

    #[test]
    fn unreadable_lookup_file_skips_the_step() {
        let join = LookupJoin {
            name: "region",
            path: PathBuf::from("/nonexistent/lookup.csv"),
            left_on: "Region",
            right_on: "region_id",
            kind: JoinKind::LeftOuter,
        };

        let out = apply(working(), &join);
        assert_eq!(out.get_column_names(), working().get_column_names());
    }
}
