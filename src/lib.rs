//! pricechart_rs
//!
//! A lightweight Rust library for fetching, aligning, and shaping project
//! price and reference price series into render-ready chart specifications.
//! Pairs with the `pricechart` CLI.
//!
//! The crate is the data side of an interactive price-comparison chart: it
//! resolves a region/month filter to matching series, aligns them on one
//! month axis with explicit gaps, picks the visualization mode from that
//! axis alone, and produces a deterministic camelCase spec a rendering
//! collaborator can draw. Rendering itself stays behind the
//! [`ChartRenderer`] seam; nothing here touches a drawing surface.
//!
//! ### Features
//! - Fetch project and reference prices for a region selection and month range
//! - Align both series on a shared month axis, gaps kept as `null`
//! - Single-month bar comparison or multi-month trend view, chosen by the data
//! - Filter state with validated date ranges and an all-selected reset
//! - Stale-response discard so overlapping fetches resolve most-recent-wins
//! - Save fetched series as CSV or JSON, quick grouped summary statistics
//!
//! ### Example
//! ```no_run
//! use pricechart_rs::{ChartPipeline, Client, FilterState, NullRenderer, RegionInfo};
//!
//! let catalog = vec![
//!     RegionInfo::new("dongcheng", "East City"),
//!     RegionInfo::new("xicheng", "West City"),
//! ];
//! let filters = FilterState::with_current_date(catalog);
//! let mut pipeline = ChartPipeline::new(Client::default(), NullRenderer::default());
//! let outcome = pipeline.refresh(&filters.filter());
//! println!("{outcome:?}");
//! ```

pub mod align;
pub mod api;
pub mod chart;
pub mod error;
pub mod filter;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod stats;
pub mod storage;

pub use align::AlignedSeries;
pub use api::{Client, PriceSource};
pub use chart::{ChartMode, ChartSpec};
pub use error::{ChartError, ChartResult};
pub use filter::{DateBounds, FilterState};
pub use models::{Filter, GroupKey, MonthKey, PricePoint, ReferencePoint, RegionInfo, SeriesBundle};
pub use pipeline::{ChartPipeline, RenderOutcome, RequestTicket};
pub use render::{ChartRenderer, NullRenderer};
