use payloads::responses::DashboardSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Error from the dashboard summary fetch, if any.
    #[prop_or_default]
    pub dashboard_error: Option<String>,
    /// Error from the orders fetch, if any.
    #[prop_or_default]
    pub orders_error: Option<String>,
    /// Error from the liveness check, if any.
    #[prop_or_default]
    pub health_error: Option<String>,
    /// The summary itself, for its per-area errors.
    #[prop_or_default]
    pub summary: Option<DashboardSummary>,
}

/// Per-endpoint health panel so a stale or failing integration is never
/// silent on the dashboard.
#[function_component]
pub fn IntegrationStatus(props: &Props) -> Html {
    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow p-6">
            <h3 class="font-semibold text-neutral-900 dark:text-neutral-100 \
                       mb-3">
                {"Status da Integração"}
            </h3>
            <div class="space-y-1 text-sm text-neutral-600 \
                        dark:text-neutral-400">
                {status_row("API", props.health_error.as_deref())}
                {status_row("Dashboard", props.dashboard_error.as_deref())}
                {status_row("Pedidos", props.orders_error.as_deref())}
                {props.summary.as_ref().map(|summary| html! {
                    <>
                        {status_row(
                            "Produtos",
                            summary.products.error.as_deref(),
                        )}
                        {status_row(
                            "Categorias",
                            summary.categories.error.as_deref(),
                        )}
                    </>
                })}
            </div>
        </div>
    }
}

fn status_row(label: &str, error: Option<&str>) -> Html {
    let (mark, detail) = match error {
        None => ("✅ OK".to_string(), None),
        Some(message) => ("❌ Erro".to_string(), Some(message.to_string())),
    };

    html! {
        <p>
            {format!("{label}: {mark}")}
            {detail.map(|message| html! {
                <span class="ml-2 text-xs text-red-600 dark:text-red-400">
                    {message}
                </span>
            })}
        </p>
    }
}
