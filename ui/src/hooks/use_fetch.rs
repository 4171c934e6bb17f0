use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

impl<T: Clone> FetchHookReturn<T> {
    /// Returns true if this is the initial load (data not yet fetched,
    /// currently loading, and no error).
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && !self.data.is_fetched() && self.error.is_none()
    }

    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// This handles the common pattern of:
    /// - No data + loading: show "Carregando {context}..."
    /// - No data + error: show the error message
    /// - Has data: call the render function with (data, is_loading, error)
    ///
    /// On a failed refetch the data from the previous fetch is still
    /// rendered, with the error passed alongside.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if self.is_loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Carregando {}...", context)}
                            </p>
                        </div>
                    }
                } else if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Erro ao carregar {}: {}", context, error)}
                            </p>
                        </div>
                    }
                } else {
                    // Shouldn't happen: no data, not loading, no error
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Nenhum dado de {} encontrado", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
        }
    }
}

/// Generic fetch hook composer.
///
/// Automatically fetches on mount, whenever the deps change by value
/// equality, and on demand through `refetch`. The fetch function captures
/// its parameters from the closure; deps are used for dependency tracking
/// in use_callback and use_effect_with.
///
/// Each attempt is tagged with a monotonically increasing number and a
/// settling attempt only applies its result while it is still the latest
/// one issued. Requests themselves are not aborted; a superseded attempt
/// just discards its outcome, so an older response can never overwrite the
/// state of a newer fetch.
///
/// # Example
///
/// ```ignore
/// #[hook]
/// pub fn use_orders(query: OrdersQuery) -> FetchHookReturn<Paged<Order>> {
///     let deps = query.clone();
///     use_fetch(deps, move || {
///         let query = query.clone();
///         async move {
///             let api_client = get_api_client();
///             api_client
///                 .list_orders(&query)
///                 .await
///                 .map_err(|e| e.to_string())
///         }
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let latest_attempt = use_mut_ref(|| 0u64);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let latest_attempt = latest_attempt.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let fetch_fn = fetch_fn.clone();
            let latest_attempt = latest_attempt.clone();
            let attempt = {
                let mut latest = latest_attempt.borrow_mut();
                *latest += 1;
                *latest
            };

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let result = fetch_fn().await;

                // A newer attempt owns the state now; drop this result.
                if *latest_attempt.borrow() != attempt {
                    return;
                }

                match result {
                    Ok(value) => {
                        data.set(FetchState::Fetched(value));
                        error.set(None);
                    }
                    Err(e) => {
                        error.set(Some(e));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();

        use_effect_with(deps, move |_| {
            refetch.emit(());
        });
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
