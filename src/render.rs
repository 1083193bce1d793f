use crate::chart::{ChartMode, ChartSpec};
use crate::error::ChartResult;

/// Contract of the rendering collaborator.
///
/// The pipeline hands over a fully materialized [`ChartSpec`] and never looks
/// at the drawing surface itself; mounting, drawing, and teardown all live on
/// the host side of this seam. Implementations hold at most one chart
/// instance, and the pipeline guarantees `destroy` is called before a new
/// `render` while an instance is mounted.
pub trait ChartRenderer {
    /// Mount a fresh chart built from `spec`.
    ///
    /// ### Errors
    /// - `ChartError::RenderTargetMissing` when the host surface is gone
    /// - `ChartError::RenderFailed` for anything else the host rejects
    fn render(&mut self, mode: ChartMode, spec: &ChartSpec) -> ChartResult<()>;

    /// Release the mounted chart instance, if any. Idempotent.
    fn destroy(&mut self);

    /// Replace the chart surface with a "no data" notice.
    fn show_placeholder(&mut self, text: &str);

    /// Replace the chart surface with a failure message.
    fn show_failure(&mut self, text: &str);
}

/// Headless renderer for tests and for hosts that only want the spec JSON.
///
/// Validates every spec it receives and records what the pipeline did, so
/// lifecycle order can be asserted without a real surface. When `fail_next`
/// is armed the next `render` call errors, which is how tests exercise the
/// failure path.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub rendered: u32,
    pub destroyed: u32,
    pub last_mode: Option<ChartMode>,
    pub last_label_count: usize,
    pub last_dataset_count: usize,
    pub last_placeholder: Option<String>,
    pub last_failure: Option<String>,
    pub fail_next: bool,
}

impl ChartRenderer for NullRenderer {
    fn render(&mut self, mode: ChartMode, spec: &ChartSpec) -> ChartResult<()> {
        if self.fail_next {
            self.fail_next = false;
            return Err(crate::error::ChartError::RenderTargetMissing(
                "price-chart".into(),
            ));
        }
        spec.validate()?;
        self.rendered += 1;
        self.last_mode = Some(mode);
        self.last_label_count = spec.data.labels.len();
        self.last_dataset_count = spec.data.datasets.len();
        Ok(())
    }

    fn destroy(&mut self) {
        self.destroyed += 1;
    }

    fn show_placeholder(&mut self, text: &str) {
        self.last_placeholder = Some(text.to_string());
    }

    fn show_failure(&mut self, text: &str) {
        self.last_failure = Some(text.to_string());
    }
}
