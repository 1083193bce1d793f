use crate::error::{ChartError, ChartResult};
use crate::models::{Filter, MonthKey, RegionInfo};
use chrono::{Datelike, NaiveDate};

/// Months the default window reaches back from the current month.
const DEFAULT_WINDOW_MONTHS: u32 = 3;

/// The selectable month window: a fixed epoch up to December of next year,
/// anchored on whatever "today" the state was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub min: MonthKey,
    pub max: MonthKey,
}

impl DateBounds {
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            min: MonthKey::EPOCH,
            max: MonthKey::december_of(today.year() + 1),
        }
    }

    pub fn contains(&self, month: MonthKey) -> bool {
        self.min <= month && month <= self.max
    }
}

/// The active region selection and month range.
///
/// Pure state: every mutation is an explicit operation here, and the pipeline
/// only ever reads an immutable [`Filter`] snapshot. The selection always
/// stays a subset of the catalog, and construction and [`reset`] leave *all*
/// regions selected rather than none.
///
/// [`reset`]: FilterState::reset
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    catalog: Vec<RegionInfo>,
    selected: Vec<String>,
    start: MonthKey,
    end: MonthKey,
    bounds: DateBounds,
    default_start: MonthKey,
    default_end: MonthKey,
}

impl FilterState {
    /// Fresh state for `today`: every catalog region selected and the
    /// trailing three-month window ending in `today`'s month.
    pub fn new(catalog: Vec<RegionInfo>, today: NaiveDate) -> Self {
        let end = MonthKey::from_date(today);
        let start = end.months_back(DEFAULT_WINDOW_MONTHS);
        let selected = catalog.iter().map(|r| r.field.clone()).collect();
        Self {
            selected,
            start,
            end,
            bounds: DateBounds::for_today(today),
            default_start: start,
            default_end: end,
            catalog,
        }
    }

    /// [`FilterState::new`] anchored on the current local date.
    pub fn with_current_date(catalog: Vec<RegionInfo>) -> Self {
        Self::new(catalog, chrono::Local::now().date_naive())
    }

    /// Select every catalog region, in catalog order.
    pub fn select_all(&mut self) {
        self.selected = self.catalog.iter().map(|r| r.field.clone()).collect();
    }

    /// Add or remove one region from the selection.
    ///
    /// Toggling twice restores the previous selection; fields not present in
    /// the catalog are ignored, so the selection can never drift outside it.
    pub fn toggle(&mut self, field: &str) {
        if let Some(pos) = self.selected.iter().position(|f| f == field) {
            self.selected.remove(pos);
        } else if self.catalog.iter().any(|r| r.field == field) {
            self.selected.push(field.to_string());
        }
    }

    /// Replace both range bounds at once.
    ///
    /// ### Errors
    /// - `ChartError::StartAfterEnd` for inverted ranges
    /// - `ChartError::MonthOutOfBounds` when either bound leaves the
    ///   selectable window
    ///
    /// On error the previous range stays active untouched.
    pub fn set_date_range(&mut self, start: MonthKey, end: MonthKey) -> ChartResult<()> {
        if start > end {
            return Err(ChartError::StartAfterEnd { start, end });
        }
        for month in [start, end] {
            if !self.bounds.contains(month) {
                return Err(ChartError::MonthOutOfBounds {
                    month,
                    min: self.bounds.min,
                    max: self.bounds.max,
                });
            }
        }
        self.start = start;
        self.end = end;
        Ok(())
    }

    /// Back to the construction state: all regions, default trailing window.
    pub fn reset(&mut self) {
        self.select_all();
        self.start = self.default_start;
        self.end = self.default_end;
    }

    /// Immutable snapshot for the fetch/shape pipeline.
    pub fn filter(&self) -> Filter {
        Filter {
            regions: self.selected.clone(),
            start: self.start,
            end: self.end,
        }
    }

    /// Selected region fields, selection order.
    pub fn selected_regions(&self) -> &[String] {
        &self.selected
    }

    pub fn catalog(&self) -> &[RegionInfo] {
        &self.catalog
    }

    pub fn bounds(&self) -> DateBounds {
        self.bounds
    }

    pub fn date_range(&self) -> (MonthKey, MonthKey) {
        (self.start, self.end)
    }

    /// Short text for the selection widget: empty when nothing is selected,
    /// the names for up to two regions, then `"A, B + n more"`.
    pub fn display_label(&self) -> String {
        let names = self.selected_names();
        match names.len() {
            0 => String::new(),
            1..=2 => names.join(", "),
            n => format!("{}, {} + {} more", names[0], names[1], n - 2),
        }
    }

    /// One-line description of the active filter for the host's detail strip,
    /// e.g. `"East City, West City; 2024-03 to 2024-06"`.
    pub fn summary(&self) -> String {
        let names = self.selected_names();
        let regions = if names.len() > 3 {
            format!(
                "{}, {}, {} + {} more",
                names[0],
                names[1],
                names[2],
                names.len() - 3
            )
        } else {
            names.join(", ")
        };
        format!("{}; {} to {}", regions, self.start, self.end)
    }

    // Display names resolve through the catalog, selection order preserved.
    fn selected_names(&self) -> Vec<&str> {
        self.selected
            .iter()
            .filter_map(|field| {
                self.catalog
                    .iter()
                    .find(|r| &r.field == field)
                    .map(|r| r.display_name.as_str())
            })
            .collect()
    }
}
