use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use crate::query::StockQuery;

/// Fallback origin of the dashboard backend; overridden by `API_BASE_URL`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Handle to the dashboard backend.
///
/// One `Api` is built at startup and shared process-wide. It owns a single
/// configured [`reqwest::Client`] - JSON content-type on every request - and
/// the fixed base address all operations resolve against. Calls are
/// independent and stateless; response bodies come back as raw [`Value`]s
/// with no client-side schema.
///
/// Every request funnels through [`dispatch`], which logs the outgoing call
/// and, on any failure, emits exactly one error entry tagged with the
/// operation name before re-raising the original error. No retries, no
/// fallbacks.
///
/// [`dispatch`]: #method.dispatch
pub struct Api {
    client: Client,
    base_url: String,
}

impl Api {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Api {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Read the base address from the `API_BASE_URL` environment variable,
    /// falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Result<Self> {
        let base = std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        log::debug!("backend base address: {base}");
        Self::new(base)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    /// Send a prepared request and decode the JSON body, passing it through
    /// untouched. Any failure - transport, non-2xx status, undecodable body -
    /// is logged once under `op` and the original error re-raised.
    async fn dispatch(&self, op: &'static str, request: RequestBuilder) -> Result<Value> {
        let outcome = async {
            let request = request.build()?;
            log::debug!("[{op}] {} {}", request.method(), request.url());
            self.client
                .execute(request)
                .await?
                .error_for_status()?
                .json::<Value>()
                .await
        };
        match outcome.await {
            Ok(body) => Ok(body),
            Err(e) => {
                log::error!("[{op}] request failed: {e}");
                Err(e.into())
            }
        }
    }

    /// Page through the stock list; `query` is forwarded verbatim.
    pub async fn stocks(&self, query: &StockQuery) -> Result<Value> {
        self.dispatch("stocks", self.get("stocks").query(query)).await
    }

    /// Latest daily snapshot plus 30-day history for one stock.
    pub async fn stock_detail(&self, ts_code: &str) -> Result<Value> {
        self.dispatch("stock_detail", self.get(&format!("stock/{ts_code}")))
            .await
    }

    pub async fn market_stats(&self) -> Result<Value> {
        self.dispatch("market_stats", self.get("market_stats")).await
    }

    /// Selectable areas, industries, markets, and value ranges for the list view.
    pub async fn filters(&self) -> Result<Value> {
        self.dispatch("filters", self.get("filters")).await
    }

    pub async fn high_rise_stocks(&self) -> Result<Value> {
        self.dispatch("high_rise_stocks", self.get("high_rise_stocks"))
            .await
    }

    /// Real-time check of whether `ts_code` closed at its multi-year high today.
    pub async fn is_highest_today(&self, ts_code: &str) -> Result<Value> {
        self.dispatch(
            "is_highest_today",
            self.get(&format!("is-highest-today/{ts_code}")),
        )
        .await
    }

    pub async fn unified_market_analysis(&self) -> Result<Value> {
        self.dispatch("unified_market_analysis", self.get("unified_market_analysis"))
            .await
    }

    pub async fn rise_fall_distribution(&self) -> Result<Value> {
        self.dispatch("rise_fall_distribution", self.get("rise_fall_distribution"))
            .await
    }

    /// Ask the backend to recompute its market statistics; returns the
    /// acknowledgement payload verbatim. The request carries no body.
    pub async fn refresh_market_stats(&self) -> Result<Value> {
        self.dispatch("refresh_market_stats", self.post("refresh_market_stats"))
            .await
    }

    pub async fn refresh_high_rise_stocks(&self) -> Result<Value> {
        self.dispatch(
            "refresh_high_rise_stocks",
            self.post("refresh_high_rise_stocks"),
        )
        .await
    }

    pub async fn refresh_rise_fall_distribution(&self) -> Result<Value> {
        self.dispatch(
            "refresh_rise_fall_distribution",
            self.post("refresh_rise_fall_distribution"),
        )
        .await
    }

    pub async fn refresh_unified_market_analysis(&self) -> Result<Value> {
        self.dispatch(
            "refresh_unified_market_analysis",
            self.post("refresh_unified_market_analysis"),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> Api {
        Api::new(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn detail_url_interpolates_the_code() {
        let request = api().get("stock/600000.SH").build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8000/api/stock/600000.SH"
        );
    }

    #[test]
    fn highest_today_path_is_hyphenated() {
        let request = api().get("is-highest-today/000001.SZ").build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8000/api/is-highest-today/000001.SZ"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_dropped() {
        let api = Api::new("http://localhost:8000/api/").unwrap();
        assert_eq!(api.url("filters"), "http://localhost:8000/api/filters");
    }

    #[test]
    fn list_query_is_forwarded_unchanged() {
        let query = StockQuery {
            page: Some(1),
            page_size: Some(20),
            ..StockQuery::default()
        };
        let request = api().get("stocks").query(&query).build().unwrap();
        assert_eq!(request.url().query(), Some("page=1&page_size=20"));
    }

    #[test]
    fn unset_query_fields_are_omitted() {
        let query = StockQuery {
            market: Some("SH".to_string()),
            sort_by: Some("pct_chg".to_string()),
            ..StockQuery::default()
        };
        let request = api().get("stocks").query(&query).build().unwrap();
        assert_eq!(request.url().query(), Some("market=SH&sort_by=pct_chg"));
    }

    #[test]
    fn refresh_requests_are_bodyless_posts() {
        let request = api().post("refresh_market_stats").build().unwrap();
        assert_eq!(request.method(), &reqwest::Method::POST);
        assert!(request.body().is_none());
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8000/api/refresh_market_stats"
        );
    }
}
