use payloads::responses::DashboardSummary;
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

/// Hook to fetch the dashboard summary once on mount.
#[hook]
pub fn use_dashboard_summary() -> FetchHookReturn<DashboardSummary> {
    use_fetch((), || async {
        let api_client = get_api_client();
        api_client
            .dashboard_summary()
            .await
            .map_err(|e| e.to_string())
    })
}
