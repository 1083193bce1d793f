use crate::models::{MonthKey, PricePoint, ReferencePoint};
use ahash::{AHashMap, AHashSet};

/// Project and reference series indexed on one shared month axis.
///
/// The axis is the chronologically sorted, deduplicated union of every month
/// present in either input. Lookups against it resolve to the *first* row
/// matching a `(name, month)` or `(month)` key; combinations without a row
/// stay `None`. There is no interpolation and no carry-forward, so a gap in
/// the input is a `null` in every series built from here.
///
/// Borrows the input slices for its whole lifetime, nothing is cloned.
pub struct AlignedSeries<'a> {
    axis: Vec<MonthKey>,
    project_names: Vec<&'a str>,
    regions: Vec<&'a str>,
    prices: AHashMap<&'a str, AHashMap<MonthKey, f64>>,
    reference_rows: AHashMap<MonthKey, &'a ReferencePoint>,
    project: &'a [PricePoint],
}

impl<'a> AlignedSeries<'a> {
    pub fn build(project: &'a [PricePoint], reference: &'a [ReferencePoint]) -> Self {
        let mut axis: Vec<MonthKey> = project
            .iter()
            .map(|p| p.date)
            .chain(reference.iter().map(|r| r.date))
            .collect();
        axis.sort_unstable();
        axis.dedup();

        let mut project_names = Vec::new();
        let mut regions = Vec::new();
        let mut seen_names = AHashSet::new();
        let mut seen_regions = AHashSet::new();
        let mut prices: AHashMap<&str, AHashMap<MonthKey, f64>> = AHashMap::new();
        for p in project {
            if seen_names.insert(p.name.as_str()) {
                project_names.push(p.name.as_str());
            }
            if seen_regions.insert(p.region.as_str()) {
                regions.push(p.region.as_str());
            }
            // first row wins on duplicate (name, month) keys
            prices
                .entry(p.name.as_str())
                .or_default()
                .entry(p.date)
                .or_insert(p.price);
        }

        let mut reference_rows: AHashMap<MonthKey, &ReferencePoint> = AHashMap::new();
        for r in reference {
            reference_rows.entry(r.date).or_insert(r);
        }

        Self {
            axis,
            project_names,
            regions,
            prices,
            reference_rows,
            project,
        }
    }

    /// Shared month axis, sorted ascending, no duplicates.
    pub fn axis(&self) -> &[MonthKey] {
        &self.axis
    }

    /// Distinct project names in first-seen input order.
    pub fn project_names(&self) -> &[&'a str] {
        &self.project_names
    }

    /// Distinct regions present in the project rows, first-seen input order.
    pub fn regions(&self) -> &[&'a str] {
        &self.regions
    }

    /// One project's prices aligned to the axis, `None` marking each month
    /// the project has no observation for.
    pub fn project_series(&self, name: &str) -> Vec<Option<f64>> {
        let by_month = self.prices.get(name);
        self.axis
            .iter()
            .map(|month| by_month.and_then(|series| series.get(month).copied()))
            .collect()
    }

    /// One region's reference prices aligned to the axis. Months without a
    /// reference row, and rows without a usable price for the region, are
    /// `None`.
    pub fn reference_series(&self, region: &str) -> Vec<Option<f64>> {
        self.axis
            .iter()
            .map(|month| {
                self.reference_rows
                    .get(month)
                    .and_then(|row| row.price_for(region))
            })
            .collect()
    }

    /// Every project row observed in `month`, input order preserved.
    pub fn points_in(&self, month: MonthKey) -> Vec<&'a PricePoint> {
        self.project.iter().filter(|p| p.date == month).collect()
    }

    /// The reference row for `month`, if the feed published one.
    pub fn reference_row(&self, month: MonthKey) -> Option<&'a ReferencePoint> {
        self.reference_rows.get(&month).copied()
    }
}
