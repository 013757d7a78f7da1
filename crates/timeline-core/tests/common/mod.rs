// File: crates/timeline-core/tests/common/mod.rs
// Purpose: Shared fixtures for the integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use timeline_core::{Category, DisasterRecord};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn rec(name: &str, category: Category, cost: f64, year: i32, mid: NaiveDate) -> DisasterRecord {
    DisasterRecord::try_new(name, category, cost, year, mid).expect("valid record")
}

/// Two 1990 events; the drought is the costliest.
pub fn fixture_1990() -> Vec<DisasterRecord> {
    vec![
        rec("Spring Floods", Category::Flooding, 10.0, 1990, date(1990, 3, 15)),
        rec("Summer Drought", Category::DroughtWildfire, 50.0, 1990, date(1990, 7, 1)),
    ]
}

pub fn mixed() -> Vec<DisasterRecord> {
    vec![
        rec("Hurricane A", Category::TropicalCyclone, 40.0, 2005, date(2005, 8, 27)),
        rec("Ice Storm", Category::WinterStormFreeze, 3.0, 1994, date(1994, 2, 10)),
        rec("River Floods", Category::Flooding, 12.0, 2005, date(2005, 5, 2)),
        rec("Tornado Outbreak", Category::SevereStorm, 8.5, 2011, date(2011, 4, 27)),
        rec("Heat Wave", Category::DroughtWildfire, 30.0, 1994, date(1994, 7, 20)),
        rec("Hurricane B", Category::TropicalCyclone, 40.0, 2005, date(2005, 9, 24)),
    ]
}

pub fn sample_csv_path() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/disaster_costs.csv")
}
