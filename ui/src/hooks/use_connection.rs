use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::{ConnectionState, State, get_api_client};

/// Delay before the first post-connect status probe. The authorization
/// happens in another tab and the backend has no completion callback, so
/// probing the status endpoint is the only signal available.
const INITIAL_POLL_DELAY_MS: u32 = 3_000;
/// Probing stops once the doubled delay would exceed this cap.
const MAX_POLL_DELAY_MS: u32 = 24_000;

/// Hook return type for the ERP connection flow
pub struct ConnectionHookReturn {
    pub status: ConnectionState,
    pub is_loading: bool,
    pub error: Option<String>,
    pub connect: Callback<MouseEvent>,
    pub disconnect: Callback<MouseEvent>,
}

/// Hook driving the ERP connect/disconnect flow.
///
/// Checks status on mount. `connect` opens the authorization URL in a new
/// tab and probes the status endpoint with doubling delays (3s up to 24s)
/// until the backend reports a session or the schedule runs out.
/// `disconnect` logs out and re-checks status once to confirm the backend
/// agrees. Status-check failures read as disconnected.
#[hook]
pub fn use_connection() -> ConnectionHookReturn {
    let (state, dispatch) = use_store::<State>();
    let is_loading = use_state(|| false);
    // Bumped on every connect/disconnect; an in-flight poll loop stops as
    // soon as it is no longer the current generation.
    let poll_generation = use_mut_ref(|| 0u32);

    let refresh = {
        let dispatch = dispatch.clone();
        let is_loading = is_loading.clone();

        use_callback((), move |_, _| {
            let dispatch = dispatch.clone();
            let is_loading = is_loading.clone();

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                let api_client = get_api_client();
                let result = api_client
                    .auth_status()
                    .await
                    .map(|status| status.authenticated);
                dispatch.reduce_mut(|state| state.apply_status_check(&result));
                is_loading.set(false);
            });
        })
    };

    let connect = {
        let dispatch = dispatch.clone();
        let is_loading = is_loading.clone();
        let poll_generation = poll_generation.clone();

        use_callback((), move |_: MouseEvent, _| {
            let dispatch = dispatch.clone();
            let is_loading = is_loading.clone();
            let poll_generation = poll_generation.clone();
            let generation = {
                let mut current = poll_generation.borrow_mut();
                *current += 1;
                *current
            };

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                let api_client = get_api_client();

                match api_client.auth_start().await {
                    Ok(start) => {
                        open_in_new_tab(&start.auth_url);
                        dispatch
                            .reduce_mut(|state| state.connection_error = None);

                        let mut delay = INITIAL_POLL_DELAY_MS;
                        loop {
                            TimeoutFuture::new(delay).await;
                            if *poll_generation.borrow() != generation {
                                break;
                            }

                            let result = api_client
                                .auth_status()
                                .await
                                .map(|status| status.authenticated);
                            let connected = matches!(result, Ok(true));
                            dispatch.reduce_mut(|state| {
                                state.apply_status_check(&result)
                            });
                            if connected {
                                break;
                            }

                            delay *= 2;
                            if delay > MAX_POLL_DELAY_MS {
                                tracing::warn!(
                                    "authorization flow not confirmed before \
                                     the probe schedule ran out"
                                );
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        dispatch.reduce_mut(|state| {
                            state.connection_error = Some(e.to_string());
                        });
                    }
                }

                is_loading.set(false);
            });
        })
    };

    let disconnect = {
        let dispatch = dispatch.clone();
        let is_loading = is_loading.clone();
        let poll_generation = poll_generation.clone();

        use_callback((), move |_: MouseEvent, _| {
            let dispatch = dispatch.clone();
            let is_loading = is_loading.clone();
            // Cancel any authorization probe still scheduled.
            *poll_generation.borrow_mut() += 1;

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                let api_client = get_api_client();

                match api_client.auth_logout().await {
                    Ok(()) => {
                        dispatch.reduce_mut(|state| {
                            state.connection = ConnectionState::Disconnected;
                            state.connection_error = None;
                        });
                        // Confirm the backend agrees instead of trusting
                        // the local flip.
                        let result = api_client
                            .auth_status()
                            .await
                            .map(|status| status.authenticated);
                        dispatch.reduce_mut(|state| {
                            state.apply_status_check(&result)
                        });
                    }
                    Err(e) => {
                        dispatch.reduce_mut(|state| {
                            state.connection_error = Some(e.to_string());
                        });
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Check connection status on startup
    use_effect_with((), move |_| {
        refresh.emit(());
    });

    ConnectionHookReturn {
        status: state.connection,
        is_loading: *is_loading,
        error: state.connection_error.clone(),
        connect,
        disconnect,
    }
}

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window()
        && window.open_with_url_and_target(url, "_blank").is_err()
    {
        tracing::warn!("failed to open the authorization window");
    }
}
