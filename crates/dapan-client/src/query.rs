use serde::Serialize;

/// Paging, filter, and sort options for the stock list.
///
/// Every field is optional. Set fields are forwarded to the backend exactly
/// as given; unset fields never reach the query string.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct StockQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Lowest daily percentage change to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rise: Option<f64>,

    /// Highest daily percentage change to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rise: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,

    /// Exchange filter: `SH`, `SZ`, or `BJ`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    /// `asc` or `desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}
