/// Synchronous client for the **price-data service**.
///
/// This module talks to the `visual/chart-hntdata/` endpoint and returns the
/// payload as a tidy [`models::SeriesBundle`]: project observations plus the
/// sparse per-region reference rows.
///
/// ### Notes
/// - The service reads the region selection as **repeated** `regions[]`
///   query parameters; values are percent-encoded, the bracket key is sent
///   as the service expects it.
/// - Transient failures (5xx, transport errors) are retried with a short
///   backoff before giving up.
/// - An `{"error": ...}` payload is surfaced as an error even on HTTP 200.
/// - Network timeouts use a sane default (30s) and can be adjusted by editing
///   the client builder.
///
/// Typical usage:
/// ```no_run
/// # use pricechart_rs::{Client, Filter, PriceSource};
/// let client = Client::default();
/// let bundle = client.fetch(&Filter {
///     regions: vec!["dongcheng".into(), "xicheng".into()],
///     start: "2024-03".parse()?,
///     end: "2024-06".parse()?,
/// })?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// [`models::SeriesBundle`]: crate::models::SeriesBundle
use crate::models::{Filter, SeriesBundle};
use anyhow::{Context, Result, bail};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Data-source seam of the pipeline: anything that resolves a filter to a
/// series bundle. Implemented by [`Client`] and by in-memory test doubles.
pub trait PriceSource {
    fn fetch(&self, filter: &Filter) -> Result<SeriesBundle>;
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new("http://127.0.0.1:8000")
    }
}

// Allow -, _, . unescaped in values (common in region fields and month keys)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value.trim(), SAFE).to_string()
}

impl Client {
    /// Client against `base_url` (no trailing slash) with sane transport
    /// defaults.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("pricechart_rs/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Fetch the series bundle matching `filter`.
    ///
    /// ### Returns
    /// A [`SeriesBundle`] whose `project_data` holds one row per observation
    /// (project, region, month) and whose `reference_price_data` holds one
    /// sparse row per month.
    ///
    /// ### Errors
    /// - Network/HTTP error (after retries)
    /// - JSON decoding error
    /// - Service-level error payload (surfaced as an error)
    pub fn fetch_series(&self, filter: &Filter) -> Result<SeriesBundle> {
        if filter.regions.is_empty() {
            bail!("at least one region required");
        }

        let mut url = format!(
            "{}/visual/chart-hntdata/?start_date={}&end_date={}",
            self.base_url, filter.start, filter.end
        );
        for region in &filter.regions {
            // repeated regions[] parameters, one per selected region
            url.push_str("&regions[]=");
            url.push_str(&enc(region));
        }

        // Small retry for transient failures (5xx / network errors)
        let get_json = |u: &str| -> Result<Value> {
            let mut last_err: Option<anyhow::Error> = None;
            for backoff_ms in [100u64, 300, 700] {
                match self.http.get(u).send() {
                    Ok(r) if r.status().is_success() => {
                        return r.json().context("decode json");
                    }
                    Ok(r) if r.status().is_server_error() => { /* retry */ }
                    Ok(r) => bail!("request failed with HTTP {}", r.status()),
                    Err(e) => last_err = Some(e.into()),
                }
                std::thread::sleep(Duration::from_millis(backoff_ms));
            }
            bail!("network error: {:?}", last_err);
        };

        let v: Value = get_json(&url).with_context(|| format!("GET {}", url))?;

        // An error payload means the service rejected the filter.
        if let Some(err) = v.get("error") {
            bail!("price service error: {}", err);
        }

        let bundle: SeriesBundle = serde_json::from_value(v).context("parse series bundle")?;
        log::debug!(
            "fetched {} project rows, {} reference rows",
            bundle.project_data.len(),
            bundle.reference_price_data.len()
        );
        Ok(bundle)
    }
}

impl PriceSource for Client {
    fn fetch(&self, filter: &Filter) -> Result<SeriesBundle> {
        self.fetch_series(filter)
    }
}
