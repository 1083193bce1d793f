use crate::models::MonthKey;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors produced while validating filters or building and handing off
/// chart specifications.
///
/// Transport and decoding failures from the data service are reported through
/// `anyhow` at the client boundary instead; everything that can fail *inside*
/// the shaping pipeline lands here.
#[derive(Debug, Error)]
pub enum ChartError {
    /// A month string did not match the zero-padded `YYYY-MM` form.
    #[error("invalid month key {0:?}: expected zero-padded YYYY-MM")]
    InvalidMonthKey(String),

    /// A requested range had its start after its end.
    #[error("date range start {start} is after end {end}")]
    StartAfterEnd { start: MonthKey, end: MonthKey },

    /// A requested month fell outside the selectable window.
    #[error("month {month} is outside the selectable window {min}..={max}")]
    MonthOutOfBounds {
        month: MonthKey,
        min: MonthKey,
        max: MonthKey,
    },

    /// A chart spec violated a structural invariant (e.g. a dataset whose
    /// length differs from the label axis).
    #[error("invalid chart spec: {0}")]
    InvalidSpec(String),

    /// The host surface the renderer draws on is gone.
    #[error("render target {0:?} is unavailable")]
    RenderTargetMissing(String),

    /// The rendering collaborator rejected an otherwise valid spec.
    #[error("renderer failed: {0}")]
    RenderFailed(String),
}
