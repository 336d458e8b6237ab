pub mod api;
pub mod query;

pub mod prelude {
    pub use crate::api::Api;
    pub use crate::query::StockQuery;
}
