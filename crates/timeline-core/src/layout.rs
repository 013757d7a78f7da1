// File: crates/timeline-core/src/layout.rs
// Summary: Grouping and positioning of records: year rows, costliest-per-year, day-of-year x position.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::record::DisasterRecord;
use crate::scale::MonthScale;

/// Non-leap year used to turn month/day into a day-of-year.
const REFERENCE_YEAR: i32 = 1900;
/// Day-of-year of March 1st in a non-leap year; Feb 29 rolls over onto it.
const MARCH_FIRST: u32 = 60;

/// Record indices grouped by year, in first-seen year order with member order
/// preserved.
pub fn group_indices_by_year(records: &[DisasterRecord]) -> Vec<(i32, Vec<usize>)> {
    let mut groups: Vec<(i32, Vec<usize>)> = Vec::new();
    let mut slot: BTreeMap<i32, usize> = BTreeMap::new();
    for (i, r) in records.iter().enumerate() {
        match slot.get(&r.year) {
            Some(&g) => groups[g].1.push(i),
            None => {
                slot.insert(r.year, groups.len());
                groups.push((r.year, vec![i]));
            }
        }
    }
    groups
}

pub fn group_by_year(records: &[DisasterRecord]) -> Vec<(i32, Vec<&DisasterRecord>)> {
    group_indices_by_year(records)
        .into_iter()
        .map(|(year, idx)| (year, idx.into_iter().map(|i| &records[i]).collect()))
        .collect()
}

/// Highest cost among each year's records.
pub fn max_cost_by_year(records: &[DisasterRecord]) -> BTreeMap<i32, f64> {
    let mut out: BTreeMap<i32, f64> = BTreeMap::new();
    for r in records {
        out.entry(r.year)
            .and_modify(|m| if r.cost > *m { *m = r.cost })
            .or_insert(r.cost);
    }
    out
}

/// Index of the one record per year that gets a label: the costliest, with
/// ties going to the first in input order.
pub fn costliest_by_year(records: &[DisasterRecord]) -> BTreeMap<i32, usize> {
    let mut out: BTreeMap<i32, usize> = BTreeMap::new();
    for (i, r) in records.iter().enumerate() {
        out.entry(r.year)
            .and_modify(|best| if r.cost > records[*best].cost { *best = i })
            .or_insert(i);
    }
    out
}

/// `(min, max)` year of the dataset, `None` when empty.
pub fn year_extent(records: &[DisasterRecord]) -> Option<(i32, i32)> {
    let lo = records.iter().map(|r| r.year).min()?;
    let hi = records.iter().map(|r| r.year).max()?;
    Some((lo, hi))
}

/// `(min, max)` cost of the dataset, `None` when empty.
pub fn cost_extent(records: &[DisasterRecord]) -> Option<(f64, f64)> {
    records.iter().map(|r| r.cost).fold(None, |acc, c| match acc {
        None => Some((c, c)),
        Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
    })
}

/// 1-based ordinal of the date's month/day in a non-leap year. The year of
/// `date` is ignored, so the same calendar day always lands in the same column.
pub fn day_of_year(date: NaiveDate) -> u32 {
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, date.month(), date.day())
        .map(|d| d.ordinal())
        .unwrap_or(MARCH_FIRST)
}

/// Horizontal offset of a record's glyph relative to the plot origin.
pub fn x_position(date: NaiveDate, months: &MonthScale, day_divisor: f64) -> f32 {
    months.map(day_of_year(date) as f64 / day_divisor) as f32
}
