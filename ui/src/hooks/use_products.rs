use payloads::requests::ProductsQuery;
use payloads::responses::{Paged, Product};
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

/// Hook to fetch a page of products, refetching whenever the query changes.
#[hook]
pub fn use_products(query: ProductsQuery) -> FetchHookReturn<Paged<Product>> {
    let deps = query.clone();
    use_fetch(deps, move || {
        let query = query.clone();
        async move {
            let api_client = get_api_client();
            api_client
                .list_products(&query)
                .await
                .map_err(|e| e.to_string())
        }
    })
}
