use crate::error::{ChartError, ChartResult};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Calendar month in the zero-padded `YYYY-MM` form used as the sort and join
/// key of every series.
///
/// Ordering is chronological on `(year, month)`; for valid keys the string
/// ordering happens to coincide, but nothing relies on that. Construction is
/// validated, so a `MonthKey` always holds a month in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

fn month_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("month key pattern"))
}

impl MonthKey {
    /// Earliest month the upstream feed publishes data for.
    pub const EPOCH: MonthKey = MonthKey {
        year: 2020,
        month: 1,
    };

    /// Build a key from raw parts.
    ///
    /// ### Errors
    /// `ChartError::InvalidMonthKey` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> ChartResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(ChartError::InvalidMonthKey(format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing the current local date.
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// December of the given year.
    pub fn december_of(year: i32) -> Self {
        Self { year, month: 12 }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The key `n` calendar months earlier. Pure month arithmetic, no
    /// day-of-month involved, so the result is exact across year boundaries.
    pub fn months_back(&self, n: u32) -> Self {
        let total = i64::from(self.year) * 12 + i64::from(self.month) - 1 - i64::from(n);
        Self {
            year: total.div_euclid(12) as i32,
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = ChartError;

    /// Parse a zero-padded `YYYY-MM` string; anything else is rejected,
    /// including unpadded months and out-of-range months like `2024-13`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = month_key_pattern()
            .captures(s)
            .ok_or_else(|| ChartError::InvalidMonthKey(s.to_string()))?;
        let year: i32 = caps[1]
            .parse()
            .map_err(|_| ChartError::InvalidMonthKey(s.to_string()))?;
        let month: u32 = caps[2]
            .parse()
            .map_err(|_| ChartError::InvalidMonthKey(s.to_string()))?;
        Self::new(year, month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One project's average unit price in one region for one month. One row
/// equals one observation, exactly as the service reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub name: String,
    pub region: String,
    pub date: MonthKey,
    pub price: f64,
}

/// One month's published reference prices, keyed by region field.
///
/// The feed is sparse: a region can be absent for a month, and the service
/// encodes "no published price" as a literal `0`. [`ReferencePoint::price_for`]
/// treats both the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub date: MonthKey,
    #[serde(flatten)]
    pub prices: BTreeMap<String, f64>,
}

impl ReferencePoint {
    /// The published price for `region`, with missing entries and encoded
    /// zeros both reading as `None`.
    pub fn price_for(&self, region: &str) -> Option<f64> {
        self.prices.get(region).copied().filter(|p| *p != 0.0)
    }
}

/// One entry of the externally supplied region catalog: the machine field the
/// wire protocol uses plus the label shown to people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionInfo {
    pub field: String,
    pub display_name: String,
}

impl RegionInfo {
    pub fn new(field: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            display_name: display_name.into(),
        }
    }
}

/// Immutable snapshot of the active filter, handed to the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Region fields, wire order preserved.
    pub regions: Vec<String>,
    pub start: MonthKey,
    pub end: MonthKey,
}

/// Grouping key for summary statistics: one project in one region.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub name: String,
    pub region: String,
}

/// Everything the data service returns for one filter. Absent fields
/// deserialize as empty collections, so a partial payload still shapes into
/// an (empty) chart instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesBundle {
    #[serde(default)]
    pub project_data: Vec<PricePoint>,
    #[serde(default)]
    pub reference_price_data: Vec<ReferencePoint>,
    /// Display names of the regions the filter matched, as the service
    /// resolved them.
    #[serde(default)]
    pub regions: Vec<String>,
}

impl SeriesBundle {
    pub fn is_empty(&self) -> bool {
        self.project_data.is_empty() && self.reference_price_data.is_empty()
    }
}
