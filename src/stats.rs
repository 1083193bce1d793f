use crate::models::{GroupKey, MonthKey, SeriesBundle};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Summary statistics for a group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub key: GroupKey,
    pub count: usize,
    pub missing: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Compute grouped statistics by (name, region).
///
/// `missing` counts the months of the bundle's overall axis the group has no
/// observation for, so a project that skips a month shows up here the same
/// way it shows up as a gap in the chart.
pub fn grouped_summary(bundle: &SeriesBundle) -> Vec<Summary> {
    let axis: BTreeSet<MonthKey> = bundle
        .project_data
        .iter()
        .map(|p| p.date)
        .chain(bundle.reference_price_data.iter().map(|r| r.date))
        .collect();

    let mut groups: BTreeMap<GroupKey, Vec<f64>> = BTreeMap::new();
    let mut months_seen: BTreeMap<GroupKey, BTreeSet<MonthKey>> = BTreeMap::new();
    for p in &bundle.project_data {
        let key = GroupKey {
            name: p.name.clone(),
            region: p.region.clone(),
        };
        groups.entry(key.clone()).or_default().push(p.price);
        months_seen.entry(key).or_default().insert(p.date);
    }

    let mut out = Vec::new();
    for (key, mut vals) in groups {
        vals.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let count = vals.len();
        let min = vals.first().cloned();
        let max = vals.last().cloned();
        let mean = if count > 0 {
            Some(vals.iter().copied().sum::<f64>() / count as f64)
        } else {
            None
        };
        let median = if count == 0 {
            None
        } else if count % 2 == 1 {
            Some(vals[count / 2])
        } else {
            Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
        };
        let observed = months_seen.get(&key).map(|m| m.len()).unwrap_or(0);
        let missing = axis.len().saturating_sub(observed);
        out.push(Summary {
            key,
            count,
            missing,
            min,
            max,
            mean,
            median,
        });
    }
    out
}
