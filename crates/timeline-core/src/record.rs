// File: crates/timeline-core/src/record.rs
// Summary: Disaster event records and the five disaster categories.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

use crate::error::RecordError;

/// Disaster category; declaration order is the legend and colour order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    WinterStormFreeze,
    DroughtWildfire,
    Flooding,
    TropicalCyclone,
    SevereStorm,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown disaster category '{0}'")]
pub struct ParseCategoryError(pub String);

impl Category {
    pub const ALL: [Category; 5] = [
        Category::WinterStormFreeze,
        Category::DroughtWildfire,
        Category::Flooding,
        Category::TropicalCyclone,
        Category::SevereStorm,
    ];

    /// Slug used in the CSV `category` column.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::WinterStormFreeze => "winter-storm-freeze",
            Category::DroughtWildfire => "drought-wildfire",
            Category::Flooding => "flooding",
            Category::TropicalCyclone => "tropical-cyclone",
            Category::SevereStorm => "severe-storm",
        }
    }

    /// Human-readable legend label.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::WinterStormFreeze => "Winter storms, freezing",
            Category::DroughtWildfire => "Drought and wildfire",
            Category::Flooding => "Flooding",
            Category::TropicalCyclone => "Tropical cyclones",
            Category::SevereStorm => "Severe storms",
        }
    }

    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// One billion-dollar disaster event. Records are never mutated after load.
#[derive(Clone, Debug, PartialEq)]
pub struct DisasterRecord {
    pub name: String,
    pub category: Category,
    /// Cost in billions of USD.
    pub cost: f64,
    pub year: i32,
    /// Midpoint date of the event.
    pub mid: NaiveDate,
}

impl DisasterRecord {
    /// Construct a record, rejecting negative or non-finite costs.
    pub fn try_new(
        name: impl Into<String>,
        category: Category,
        cost: f64,
        year: i32,
        mid: NaiveDate,
    ) -> Result<Self, RecordError> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(RecordError::InvalidCost(cost));
        }
        Ok(Self { name: name.into(), category, cost, year, mid })
    }

    /// Tooltip body text, e.g. `$12.5 billion`.
    pub fn cost_label(&self) -> String {
        format!("${} billion", self.cost)
    }
}
