//! Chart-spec building: mode selection and the two mutually exclusive
//! builders.
//!
//! A single month of data becomes a bar comparison with the reference price
//! overlaid as a line; a range of months becomes per-project trend lines with
//! dashed per-region reference lines. Which one applies is decided by the
//! aligned month axis alone, never by the filter that produced it.

pub mod palette;
pub mod types;

pub use palette::{Rgb, Rgba, REFERENCE_LINE};
pub use types::{
    AxisSpec, AxisTitle, ChartOptions, ChartSpec, Dataset, DatasetKind, Paint, Scales, SpecData,
};

use crate::align::AlignedSeries;
use crate::models::MonthKey;
use palette::distinct_colors;

/// Fixed pixel height of the chart surface.
pub const CHART_HEIGHT: u32 = 800;

/// Label of the single-month project bar dataset.
pub const PROJECT_BAR_LABEL: &str = "Project monthly average price";

/// Label of the single-month reference line dataset.
pub const REFERENCE_LINE_LABEL: &str = "Reference price";

const VALUE_AXIS_TITLE: &str = "Unit price";
const MONTH_AXIS_TITLE: &str = "Month";

/// Visualization mode, selected by the cardinality of the aligned month axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartMode {
    /// Empty axis: nothing to draw, the host shows a placeholder instead.
    Empty,
    /// Exactly one month: projects side by side as bars, reference overlaid.
    SingleMonth,
    /// Two or more months: one trend line per project and per region.
    MultiMonth,
}

impl ChartMode {
    /// The sole branch point: 0 months is empty, 1 is single, 2+ is multi.
    pub fn select(axis_len: usize) -> Self {
        match axis_len {
            0 => ChartMode::Empty,
            1 => ChartMode::SingleMonth,
            _ => ChartMode::MultiMonth,
        }
    }

    /// Heading the host shows above the chart.
    pub fn title(self) -> &'static str {
        match self {
            ChartMode::Empty => "",
            ChartMode::SingleMonth => "Monthly project prices vs reference price",
            ChartMode::MultiMonth => "Price trend comparison",
        }
    }
}

/// Build the spec matching the aligned axis, or `None` when the axis is
/// empty and there is nothing to draw.
pub fn build_spec(aligned: &AlignedSeries<'_>) -> Option<(ChartMode, ChartSpec)> {
    match ChartMode::select(aligned.axis().len()) {
        ChartMode::Empty => None,
        ChartMode::SingleMonth => Some((
            ChartMode::SingleMonth,
            single_month_spec(aligned, aligned.axis()[0]),
        )),
        ChartMode::MultiMonth => Some((ChartMode::MultiMonth, multi_month_spec(aligned))),
    }
}

/// Single-month comparison: one bar per project observation, labeled
/// `"name (region)"`, each bar tinted from its own palette entry. When the
/// feed published a reference row for the month, a line dataset overlays the
/// bars with each position carrying the reference price of *that bar's*
/// region, so bar and line stay comparable one to one.
pub fn single_month_spec(aligned: &AlignedSeries<'_>, month: MonthKey) -> ChartSpec {
    let points = aligned.points_in(month);
    let labels: Vec<String> = points
        .iter()
        .map(|p| format!("{} ({})", p.name, p.region))
        .collect();
    let colors = distinct_colors(points.len());

    let mut bar = Dataset::new(
        DatasetKind::Bar,
        PROJECT_BAR_LABEL,
        points.iter().map(|p| Some(p.price)).collect(),
    );
    bar.background_color = Some(Paint::PerPoint(
        colors.iter().map(|c| c.adjust(20.0, 0.6)).collect(),
    ));
    bar.border_color = Some(Paint::PerPoint(
        colors.iter().map(|c| c.adjust(-10.0, 0.8)).collect(),
    ));
    bar.border_width = Some(1);

    let mut datasets = vec![bar];

    if let Some(row) = aligned.reference_row(month) {
        let mut line = Dataset::new(
            DatasetKind::Line,
            REFERENCE_LINE_LABEL,
            points.iter().map(|p| row.price_for(&p.region)).collect(),
        );
        line.border_color = Some(Paint::Solid(REFERENCE_LINE));
        line.background_color = Some(Paint::Solid(REFERENCE_LINE));
        line.border_width = Some(2);
        line.point_radius = Some(6);
        line.fill = Some(false);
        line.tension = Some(0.1);
        line.span_gaps = Some(false);
        datasets.push(line);
    }

    ChartSpec {
        data: SpecData { labels, datasets },
        options: single_month_options(),
    }
}

/// Multi-month trend view: per-project lines first (palette order), then one
/// dashed reference line per region present in the project rows. All
/// reference lines share the highlight color and are told apart by label.
pub fn multi_month_spec(aligned: &AlignedSeries<'_>) -> ChartSpec {
    let labels: Vec<String> = aligned.axis().iter().map(|m| m.to_string()).collect();

    let colors = distinct_colors(aligned.project_names().len());
    let mut datasets =
        Vec::with_capacity(aligned.project_names().len() + aligned.regions().len());

    for (name, color) in aligned.project_names().iter().zip(colors) {
        let mut line = Dataset::new(DatasetKind::Line, *name, aligned.project_series(name));
        line.border_color = Some(Paint::Solid(color));
        line.background_color = Some(Paint::Solid(color));
        line.border_width = Some(2);
        line.fill = Some(false);
        line.span_gaps = Some(false);
        datasets.push(line);
    }

    for region in aligned.regions() {
        let mut line = Dataset::new(
            DatasetKind::Line,
            format!("{region} reference price"),
            aligned.reference_series(region),
        );
        line.border_color = Some(Paint::Solid(REFERENCE_LINE));
        line.border_width = Some(3);
        line.border_dash = Some([5, 5]);
        line.point_radius = Some(5);
        line.fill = Some(false);
        line.span_gaps = Some(false);
        datasets.push(line);
    }

    ChartSpec {
        data: SpecData { labels, datasets },
        options: multi_month_options(),
    }
}

fn single_month_options() -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        height: CHART_HEIGHT,
        scales: Scales {
            x: None,
            y: AxisSpec::titled(VALUE_AXIS_TITLE),
        },
    }
}

fn multi_month_options() -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        height: CHART_HEIGHT,
        scales: Scales {
            x: Some(AxisSpec::titled(MONTH_AXIS_TITLE)),
            y: AxisSpec::titled(VALUE_AXIS_TITLE),
        },
    }
}
