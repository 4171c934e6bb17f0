use payloads::requests::OrdersQuery;
use payloads::responses::{Order, Paged};
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

/// Hook to fetch a page of orders, refetching whenever the query changes.
#[hook]
pub fn use_orders(query: OrdersQuery) -> FetchHookReturn<Paged<Order>> {
    let deps = query.clone();
    use_fetch(deps, move || {
        let query = query.clone();
        async move {
            let api_client = get_api_client();
            api_client
                .list_orders(&query)
                .await
                .map_err(|e| e.to_string())
        }
    })
}
