// File: crates/timeline-core/tests/layout.rs
// Purpose: Year grouping, costliest-per-year selection and day-of-year positioning.

mod common;

use std::collections::BTreeMap;

use common::{date, fixture_1990, mixed, rec};
use timeline_core::layout::{
    costliest_by_year, day_of_year, group_by_year, group_indices_by_year, max_cost_by_year, x_position,
    year_extent,
};
use timeline_core::{Category, LinearScale};

#[test]
fn max_cost_by_year_for_fixture() {
    let data = fixture_1990();
    let max = max_cost_by_year(&data);
    assert_eq!(max, BTreeMap::from([(1990, 50.0)]));
    assert_eq!(costliest_by_year(&data), BTreeMap::from([(1990, 1)]));
}

#[test]
fn ties_go_to_first_record_in_input_order() {
    let data = mixed();
    let costliest = costliest_by_year(&data);
    // Hurricane A and Hurricane B both cost 40 in 2005.
    assert_eq!(costliest[&2005], 0);
    assert_eq!(costliest[&1994], 4);
    assert_eq!(costliest[&2011], 3);
    for (year, idx) in &costliest {
        assert_eq!(data[*idx].cost, max_cost_by_year(&data)[year]);
    }
}

#[test]
fn groups_keep_first_seen_year_order_and_member_order() {
    let data = mixed();
    let groups = group_indices_by_year(&data);
    assert_eq!(groups, vec![(2005, vec![0, 2, 5]), (1994, vec![1, 4]), (2011, vec![3])]);

    let by_ref = group_by_year(&data);
    let names: Vec<&str> = by_ref[0].1.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Hurricane A", "River Floods", "Hurricane B"]);
}

#[test]
fn empty_dataset_has_no_groups() {
    assert!(group_indices_by_year(&[]).is_empty());
    assert!(max_cost_by_year(&[]).is_empty());
    assert_eq!(year_extent(&[]), None);
}

#[test]
fn day_of_year_ignores_the_year() {
    assert_eq!(day_of_year(date(1990, 1, 1)), 1);
    assert_eq!(day_of_year(date(2005, 8, 27)), 239);
    assert_eq!(day_of_year(date(2012, 7, 1)), 182);
    assert_eq!(day_of_year(date(2011, 7, 1)), 182);
    assert_eq!(day_of_year(date(2012, 2, 29)), 60);
    assert_eq!(day_of_year(date(2012, 12, 31)), 365);
}

#[test]
fn x_position_depends_only_on_the_date() {
    let months = LinearScale::new((1.0, 13.0), (0.0, 735.0));
    let a = x_position(date(1994, 7, 20), &months, 27.0);
    let b = x_position(date(2016, 7, 20), &months, 27.0);
    assert_eq!(a, b);
    // Day 27 / 27 = month index 1, the left edge.
    assert_eq!(x_position(date(2001, 1, 27), &months, 27.0), 0.0);

    let filtered: Vec<_> = mixed().into_iter().filter(|r| r.category == Category::TropicalCyclone).collect();
    let full = mixed();
    let x_full = x_position(full[5].mid, &months, 27.0);
    let x_filtered = x_position(filtered[1].mid, &months, 27.0);
    assert_eq!(x_full, x_filtered);
}

#[test]
fn year_extent_spans_min_to_max() {
    let data = vec![
        rec("a", Category::Flooding, 1.0, 2001, date(2001, 1, 1)),
        rec("b", Category::Flooding, 1.0, 1985, date(1985, 1, 1)),
        rec("c", Category::Flooding, 1.0, 1999, date(1999, 1, 1)),
    ];
    assert_eq!(year_extent(&data), Some((1985, 2001)));
}
