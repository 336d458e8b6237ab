use dapan_client::prelude::{Api, StockQuery};
use rocket::response::Redirect;
use rocket::{get, post, State};
use rocket_dyn_templates::{context, Template};
use serde_json::Value;

/// Unpack a fetched payload into the `(payload, error)` slots every template
/// expects. The client layer has already logged a failure; the view only has
/// to present it.
fn split(result: anyhow::Result<Value>) -> (Option<Value>, Option<String>) {
    match result {
        Ok(payload) => (Some(payload), None),
        Err(e) => (None, Some(e.to_string())),
    }
}

#[get("/?<page>&<page_size>&<min_rise>&<max_rise>&<min_price>&<max_price>&<market>&<sort_by>&<sort_order>")]
#[allow(clippy::too_many_arguments)]
pub async fn stock_list(
    api: &State<Api>,
    page: Option<u32>,
    page_size: Option<u32>,
    min_rise: Option<f64>,
    max_rise: Option<f64>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    market: Option<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
) -> Template {
    let query = StockQuery {
        page,
        page_size,
        min_rise,
        max_rise,
        min_price,
        max_price,
        market,
        sort_by,
        sort_order,
    };
    let (stocks, error) = split(api.stocks(&query).await);
    // the list degrades to no dropdown options without filters
    let (filters, _) = split(api.filters().await);
    Template::render("stock_list", context! { stocks, filters, error })
}

/// Detail view; `ts_code` reaches the template even when the fetch fails.
#[get("/stock/<ts_code>")]
pub async fn stock_detail(api: &State<Api>, ts_code: &str) -> Template {
    let (stock, error) = split(api.stock_detail(ts_code).await);
    Template::render("stock_detail", context! { ts_code, stock, error })
}

#[get("/market-stats")]
pub async fn market_stats(api: &State<Api>) -> Template {
    let (stats, error) = split(api.market_stats().await);
    let (analysis, _) = split(api.unified_market_analysis().await);
    let (distribution, _) = split(api.rise_fall_distribution().await);
    Template::render(
        "market_stats",
        context! { stats, analysis, distribution, error },
    )
}

#[get("/high-rise-stocks")]
pub async fn high_rise_stocks(api: &State<Api>) -> Template {
    let (payload, error) = split(api.high_rise_stocks().await);
    Template::render("high_rise", context! { payload, error })
}

/// Manual highest-today check; only queries the backend once a code is given.
#[get("/stock-check?<code>")]
pub async fn stock_check(api: &State<Api>, code: Option<String>) -> Template {
    let (result, error) = match &code {
        Some(code) => split(api.is_highest_today(code).await),
        None => (None, None),
    };
    Template::render("stock_check", context! { code, result, error })
}

// Refresh actions behind the view buttons. The acknowledgement body is
// dropped; a failed refresh is already logged by the client layer.

#[post("/market-stats/refresh")]
pub async fn refresh_market_stats(api: &State<Api>) -> Redirect {
    let _ = api.refresh_market_stats().await;
    Redirect::to("/market-stats")
}

#[post("/high-rise-stocks/refresh")]
pub async fn refresh_high_rise_stocks(api: &State<Api>) -> Redirect {
    let _ = api.refresh_high_rise_stocks().await;
    Redirect::to("/high-rise-stocks")
}

#[post("/rise-fall/refresh")]
pub async fn refresh_rise_fall_distribution(api: &State<Api>) -> Redirect {
    let _ = api.refresh_rise_fall_distribution().await;
    Redirect::to("/market-stats")
}

#[post("/market-analysis/refresh")]
pub async fn refresh_market_analysis(api: &State<Api>) -> Redirect {
    let _ = api.refresh_unified_market_analysis().await;
    Redirect::to("/market-stats")
}
