use serde::{Deserialize, Serialize};

/// Default page size for listing endpoints.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Query parameters for the order listing endpoint.
///
/// Dates are `YYYY-MM-DD` strings as the proxy expects them; `None` fields
/// are omitted from the query string entirely so the backend applies no
/// filter for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdersQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_inicial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_final: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situacao: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for OrdersQuery {
    fn default() -> Self {
        Self {
            data_inicial: None,
            data_final: None,
            situacao: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Query parameters for the product listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for ProductsQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Query parameters for the category listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoriesQuery {
    pub page: u32,
}

impl Default for CategoriesQuery {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Query parameters for the contact listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: u32,
}

impl Default for ContactsQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: 1,
        }
    }
}
