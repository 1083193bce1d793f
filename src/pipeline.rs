use crate::align::AlignedSeries;
use crate::api::PriceSource;
use crate::chart::{build_spec, ChartMode};
use crate::models::{Filter, SeriesBundle};
use crate::render::ChartRenderer;
use anyhow::Result;

/// Placeholder text shown for the empty terminal state.
pub const NO_DATA_TEXT: &str = "No data found for the selected filters";

/// Identifies one issued fetch. Tickets are handed out in strictly
/// increasing order and only the most recently issued one may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
}

/// Terminal outcome of one render cycle. Every cycle ends in exactly one of
/// these; nothing propagates further, and the next filter action simply
/// starts a new cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// A spec was built and the renderer mounted it.
    Rendered(ChartMode),
    /// The aligned axis was empty: placeholder shown, nothing mounted.
    NoData,
    /// The fetch or the renderer failed; carries the surfaced message.
    Failed(String),
    /// The response belonged to a superseded request and was discarded
    /// without touching the renderer.
    Stale,
}

/// Orchestrates one chart surface end to end: fetch, align, select mode,
/// build the spec, hand it to the renderer.
///
/// The pipeline owns the singleton chart instance. A new render always
/// destroys the previous instance first, including on the way into the
/// no-data and failure states, so a stale chart can never outlive the cycle
/// that replaced it. Overlapping fetches resolve to most-recent-wins through
/// [`RequestTicket`]s.
pub struct ChartPipeline<S, R> {
    source: S,
    renderer: R,
    issued: u64,
    mounted: bool,
}

impl<S: PriceSource, R: ChartRenderer> ChartPipeline<S, R> {
    pub fn new(source: S, renderer: R) -> Self {
        Self {
            source,
            renderer,
            issued: 0,
            mounted: false,
        }
    }

    /// Issue a ticket for a fetch about to start, superseding every ticket
    /// issued before it.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket { seq: self.issued }
    }

    /// Apply a completed fetch.
    ///
    /// A ticket that is no longer the latest is discarded before anything
    /// else happens, so out-of-order completions cannot overwrite a newer
    /// chart. A fetch error tears down the mounted instance and surfaces the
    /// message through the renderer.
    pub fn apply_response(
        &mut self,
        ticket: RequestTicket,
        fetched: Result<SeriesBundle>,
    ) -> RenderOutcome {
        if ticket.seq != self.issued {
            log::debug!(
                "discarding stale response (ticket {} superseded by {})",
                ticket.seq,
                self.issued
            );
            return RenderOutcome::Stale;
        }
        match fetched {
            Ok(bundle) => self.render_bundle(&bundle),
            Err(err) => self.fail(format!("price data fetch failed: {err:#}")),
        }
    }

    /// Blocking convenience for synchronous hosts: issue a ticket, fetch,
    /// apply, all in one call.
    pub fn refresh(&mut self, filter: &Filter) -> RenderOutcome {
        let ticket = self.begin_request();
        let fetched = self.source.fetch(filter);
        self.apply_response(ticket, fetched)
    }

    /// Whether a chart instance is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn render_bundle(&mut self, bundle: &SeriesBundle) -> RenderOutcome {
        let aligned = AlignedSeries::build(&bundle.project_data, &bundle.reference_price_data);
        let Some((mode, spec)) = build_spec(&aligned) else {
            self.drop_instance();
            self.renderer.show_placeholder(NO_DATA_TEXT);
            return RenderOutcome::NoData;
        };
        // the mounted chart is a singleton: tear down before mounting anew
        self.drop_instance();
        match self.renderer.render(mode, &spec) {
            Ok(()) => {
                self.mounted = true;
                RenderOutcome::Rendered(mode)
            }
            Err(err) => self.fail(format!("chart render failed: {err}")),
        }
    }

    fn fail(&mut self, message: String) -> RenderOutcome {
        self.drop_instance();
        log::warn!("{message}");
        self.renderer.show_failure(&message);
        RenderOutcome::Failed(message)
    }

    fn drop_instance(&mut self) {
        if self.mounted {
            self.renderer.destroy();
            self.mounted = false;
        }
    }
}
