use payloads::responses::HealthCheck;
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

/// Hook to fetch the integration liveness report once on mount.
#[hook]
pub fn use_health() -> FetchHookReturn<HealthCheck> {
    use_fetch((), || async {
        let api_client = get_api_client();
        api_client.health_check().await.map_err(|e| e.to_string())
    })
}
