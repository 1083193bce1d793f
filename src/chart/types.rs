//! Render-ready chart specification types.
//!
//! Everything here serializes to the camelCase configuration layout the
//! rendering collaborator consumes: `{ data: { labels, datasets }, options }`
//! with per-dataset `type` tags and JSON `null` for missing values.

use crate::chart::palette::{Rgb, Rgba};
use crate::error::{ChartError, ChartResult};
use serde::Serialize;

/// Drawing style of one dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Bar,
    Line,
}

/// A color slot of a dataset: one color for the whole series, or one color
/// per point (used by bars that each want their own palette entry).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(Rgb),
    PerPoint(Vec<Rgba>),
}

/// One renderable series.
///
/// `data` always spans the full label axis of its spec; a `None` entry
/// serializes as `null` and must stay a visible gap, which is why the
/// builders pin `span_gaps` to `false` on every line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(rename = "type")]
    pub kind: DatasetKind,
    pub label: String,
    pub data: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<[u32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span_gaps: Option<bool>,
}

impl Dataset {
    /// Bare dataset with no styling; the builders fill in the rest.
    pub fn new(kind: DatasetKind, label: impl Into<String>, data: Vec<Option<f64>>) -> Self {
        Self {
            kind,
            label: label.into(),
            data,
            background_color: None,
            border_color: None,
            border_width: None,
            border_dash: None,
            point_radius: None,
            fill: None,
            tension: None,
            span_gaps: None,
        }
    }
}

/// Axis title block (`scales.{x,y}.title`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

/// One axis of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSpec {
    pub title: AxisTitle,
}

impl AxisSpec {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: AxisTitle {
                display: true,
                text: text.into(),
            },
        }
    }
}

/// Axis layout. Single-period specs carry the value axis only; multi-period
/// specs add the month axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisSpec>,
    pub y: AxisSpec,
}

/// Display options shared by both modes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    /// Fixed pixel height the host applies to the chart surface.
    pub height: u32,
    pub scales: Scales,
}

/// The `data` block of a spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Complete, render-ready description of one chart.
///
/// A spec is a value: building it has no side effects, and the same inputs
/// always produce the same spec.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: SpecData,
    pub options: ChartOptions,
}

impl ChartSpec {
    /// Check the structural invariant a renderer may rely on: every dataset
    /// exactly as long as the label axis. A spec with no datasets is valid
    /// and draws as an axis-only grid.
    pub fn validate(&self) -> ChartResult<()> {
        let labels = self.data.labels.len();
        for ds in &self.data.datasets {
            if ds.data.len() != labels {
                return Err(ChartError::InvalidSpec(format!(
                    "dataset {:?} has {} values for {} labels",
                    ds.label,
                    ds.data.len(),
                    labels
                )));
            }
        }
        Ok(())
    }
}
