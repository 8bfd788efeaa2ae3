/// Synchronous client for a host's **order history endpoint**.
///
/// The host exposes `plugin/order_history/history/` relative to its base
/// URL; this module issues the GET with the parameters produced by
/// [`crate::query::build`] and decodes the response into
/// [`HistoryRecord`] rows.
///
/// ### Notes
/// - Fetch failures are not retried. [`Client::fetch_history`] degrades
///   any failure (transport error, non-2xx status, malformed body) to an
///   empty record list, so downstream transforms render a "no data"
///   state instead of an error. Use [`Client::try_fetch_history`] to
///   observe the error.
/// - Authentication is token-based and optional; the host session may
///   already carry credentials (cookies via proxy, etc.).
///
/// Typical usage:
/// ```no_run
/// # use order_history::{api::Client, context::Context, query, selection::Selection};
/// let client = Client::new("https://inventory.example.com");
/// let params = query::build(&Selection::default(), &Context::default());
/// let records = client.fetch_history(&params);
/// ```
use crate::models::{ExportFormat, HistoryRecord};
use crate::query::{self, QueryParams};
use anyhow::{Context as _, Result, bail};
use reqwest::blocking::Client as HttpClient;
use reqwest::header::AUTHORIZATION;
use reqwest::redirect::Policy;
use std::time::Duration;

/// History endpoint path, relative to the host base URL.
pub const HISTORY_ENDPOINT: &str = "plugin/order_history/history/";

#[derive(Debug, Clone)]
pub struct Client {
    /// Fully qualified URL of the history endpoint.
    pub endpoint: String,
    token: Option<String>,
    http: HttpClient,
}

impl Client {
    /// Create a client for the given host base URL (with or without a
    /// trailing slash).
    pub fn new(host: impl AsRef<str>) -> Self {
        let host = host.as_ref().trim_end_matches('/');
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("order-history/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            endpoint: format!("{host}/{HISTORY_ENDPOINT}"),
            token: None,
            http,
        }
    }

    /// Attach an API token, sent as `Authorization: Token <value>`.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// URL the history fetch goes to, parameters included.
    pub fn history_url(&self, params: &QueryParams) -> String {
        format!("{}?{}", self.endpoint, query::encode(params))
    }

    /// Download URL for the given export format, reusing the fetch
    /// parameters. Navigation is left to the caller.
    pub fn export_url(&self, format: ExportFormat, params: &QueryParams) -> String {
        query::export_url(&self.endpoint, format, params)
    }

    /// Fetch history records, surfacing any failure.
    pub fn try_fetch_history(&self, params: &QueryParams) -> Result<Vec<HistoryRecord>> {
        let url = self.history_url(params);
        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Token {token}"));
        }
        let response = request.send().with_context(|| format!("GET {url}"))?;
        if !response.status().is_success() {
            bail!("request failed with HTTP {}", response.status());
        }
        response.json().context("decode order history response")
    }

    /// Fetch history records, treating every failure as an empty result.
    pub fn fetch_history(&self, params: &QueryParams) -> Vec<HistoryRecord> {
        match self.try_fetch_history(params) {
            Ok(records) => records,
            Err(err) => {
                log::warn!("order history fetch failed: {err:#}");
                Vec::new()
            }
        }
    }
}
