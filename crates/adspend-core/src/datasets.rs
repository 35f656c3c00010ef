use std::path::PathBuf;

use crate::config::Paths;
use crate::lookup::{JoinKind, LookupJoin};
use crate::pipeline::DatasetSpec;
use crate::transform::{CastRules, RowFilter};

/// Dated Pathmatics exports under the configured data directory, one file per
/// coverage window.
const PATHMATICS_FILES: &[&str] = &[
    "PATHMATICS-20190101-20191231.csv",
    "PATHMATICS-20200101-20201231.csv",
    "PATHMATICS-20210101-20211231.csv",
    "PATHMATICS-20220101-20221231.csv",
    "PATHMATICS-20230101-20230723.csv",
];

const VIVVIX_FILES: &[&str] = &["VIVVIX_AIRLINE_2023_DATA.csv"];

pub fn pathmatics(paths: &Paths) -> DatasetSpec {
    DatasetSpec {
        name: "pathmatics",
        sources: source_paths(paths, PATHMATICS_FILES),
        joins: vec![
            LookupJoin {
                name: "brandroot",
                path: paths.brandroot_lookup_table.clone(),
                left_on: "Brand Root",
                right_on: "brandroot_id",
                kind: JoinKind::Inner,
            },
            // Joins on a column contributed by the brandroot lookup above.
            LookupJoin {
                name: "airline",
                path: paths.airline_lookup_table.clone(),
                left_on: "brandroot_airline",
                right_on: "airline_id",
                kind: JoinKind::Inner,
            },
            LookupJoin {
                name: "publisher",
                path: paths.publisher_lookup_table.clone(),
                left_on: "Publisher",
                right_on: "publisher_id",
                kind: JoinKind::LeftOuter,
            },
            LookupJoin {
                name: "region",
                path: paths.region_lookup_table.clone(),
                left_on: "Region",
                right_on: "region_id",
                kind: JoinKind::LeftOuter,
            },
            LookupJoin {
                name: "media_format",
                path: paths.media_format_lookup_table.clone(),
                left_on: "Type",
                right_on: "media_format_id",
                kind: JoinKind::LeftOuter,
            },
        ],
        cast: CastRules::default(),
        date_column: "Date",
        filter: None,
    }
}

pub fn vivvix(paths: &Paths) -> DatasetSpec {
    DatasetSpec {
        name: "vivvix",
        sources: source_paths(paths, VIVVIX_FILES),
        joins: vec![
            LookupJoin {
                name: "brand",
                path: paths.brand_lookup_table.clone(),
                left_on: "Brand",
                right_on: "brand_id",
                kind: JoinKind::LeftOuter,
            },
            // Joins on a column contributed by the brand lookup above.
            LookupJoin {
                name: "airline",
                path: paths.airline_lookup_table.clone(),
                left_on: "airline_name",
                right_on: "airline_id",
                kind: JoinKind::LeftOuter,
            },
            LookupJoin {
                name: "region",
                path: paths.region_lookup_table.clone(),
                left_on: "Provinces + National Total",
                right_on: "region_id",
                kind: JoinKind::LeftOuter,
            },
            LookupJoin {
                name: "media_format",
                path: paths.media_format_lookup_table.clone(),
                left_on: "Media Type",
                right_on: "media_format_id",
                kind: JoinKind::LeftOuter,
            },
        ],
        cast: CastRules::default(),
        date_column: "Date",
        // National-aggregate rows duplicate totals already present in the
        // per-province rows.
        filter: Some(RowFilter::ExcludeValue {
            column: "region_id".to_string(),
            value: "National".to_string(),
        }),
    }
}

fn source_paths(paths: &Paths, files: &[&str]) -> Vec<PathBuf> {
    files.iter().map(|name| paths.data_dir.join(name)).collect()
}
