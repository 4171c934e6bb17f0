//! Filter and pagination state for the listing pages.
//!
//! These are plain value types driven by user actions; each mutation
//! produces a new value that feeds the fetch hooks as a dependency, so a
//! change here is what triggers a re-fetch.

use payloads::requests::{OrdersQuery, ProductsQuery};

pub const ORDERS_PAGE_SIZE: u32 = 20;
pub const PRODUCTS_PAGE_SIZE: u32 = 20;

/// Orders page filters. Changing any filter field returns to page 1; only
/// explicit page navigation keeps the filters as they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFilters {
    /// `YYYY-MM-DD`, empty when unset.
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub page: u32,
}

impl Default for OrderFilters {
    fn default() -> Self {
        Self {
            start_date: String::new(),
            end_date: String::new(),
            status: String::new(),
            page: 1,
        }
    }
}

impl OrderFilters {
    pub fn with_start_date(&self, value: String) -> Self {
        Self {
            start_date: value,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_end_date(&self, value: String) -> Self {
        Self {
            end_date: value,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_status(&self, value: String) -> Self {
        Self {
            status: value,
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    pub fn to_query(&self) -> OrdersQuery {
        OrdersQuery {
            data_inicial: non_empty(&self.start_date),
            data_final: non_empty(&self.end_date),
            situacao: non_empty(&self.status),
            page: self.page,
            limit: ORDERS_PAGE_SIZE,
        }
    }
}

/// Products page filters: a committed search term plus the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilters {
    pub search: String,
    pub page: u32,
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }
}

impl ProductFilters {
    pub fn with_search(&self, value: String) -> Self {
        Self {
            search: value,
            page: 1,
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    pub fn to_query(&self) -> ProductsQuery {
        ProductsQuery {
            search: non_empty(&self.search),
            page: self.page,
            limit: PRODUCTS_PAGE_SIZE,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changing_any_order_filter_resets_the_page() {
        let filters = OrderFilters::default().with_page(7);
        assert_eq!(filters.page, 7);

        assert_eq!(filters.with_start_date("2024-08-01".into()).page, 1);
        assert_eq!(filters.with_end_date("2024-08-31".into()).page, 1);
        assert_eq!(filters.with_status("aprovado".into()).page, 1);
    }

    #[test]
    fn changing_the_search_term_resets_the_page() {
        let filters = ProductFilters::default().with_page(4);
        let searched = filters.with_search("camiseta".into());
        assert_eq!(searched.page, 1);
        assert_eq!(searched.search, "camiseta");
    }

    #[test]
    fn page_navigation_keeps_filters_and_stays_at_least_one() {
        let filters = OrderFilters::default()
            .with_status("pendente".into())
            .with_page(3);
        assert_eq!(filters.status, "pendente");
        assert_eq!(filters.with_page(0).page, 1);
    }

    #[test]
    fn clearing_restores_defaults() {
        let filters = OrderFilters::default()
            .with_start_date("2024-01-01".into())
            .with_page(9);
        assert_eq!(OrderFilters::default().page, 1);
        assert_ne!(filters, OrderFilters::default());
        // A clear action is just replacing with the default value.
        assert_eq!(OrderFilters::default(), OrderFilters::default());
    }

    #[test]
    fn empty_filter_fields_are_omitted_from_the_query() {
        let query = OrderFilters::default().to_query();
        assert_eq!(query.data_inicial, None);
        assert_eq!(query.data_final, None);
        assert_eq!(query.situacao, None);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, ORDERS_PAGE_SIZE);

        let filled = OrderFilters::default()
            .with_start_date("2024-08-01".into())
            .to_query();
        assert_eq!(filled.data_inicial.as_deref(), Some("2024-08-01"));
    }
}
