pub mod use_connection;
pub mod use_dashboard_summary;
pub mod use_fetch;
pub mod use_health;
pub mod use_orders;
pub mod use_products;

pub use use_connection::use_connection;
pub use use_dashboard_summary::use_dashboard_summary;
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_health::use_health;
pub use use_orders::use_orders;
pub use use_products::use_products;

/// Fetch lifecycle state, distinguishing "nothing fetched yet" from
/// "fetched an empty result".
#[derive(Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Fetched(value) => Some(value),
            Self::NotFetched => None,
        }
    }
}
