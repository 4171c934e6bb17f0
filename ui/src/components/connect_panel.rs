use yew::prelude::*;

use crate::ConnectionState;
use crate::hooks::use_connection;

/// Header panel with the ERP connection status pill and the
/// connect/disconnect action.
#[function_component]
pub fn ConnectPanel() -> Html {
    let connection = use_connection();

    let (pill_text, pill_class) = match connection.status {
        ConnectionState::Unknown => (
            "Verificando...",
            "bg-neutral-100 text-neutral-600 \
             dark:bg-neutral-700 dark:text-neutral-300",
        ),
        ConnectionState::Connected => (
            "Bling conectado",
            "bg-green-100 text-green-700 \
             dark:bg-green-900/30 dark:text-green-400",
        ),
        ConnectionState::Disconnected => (
            "Bling desconectado",
            "bg-red-100 text-red-700 \
             dark:bg-red-900/30 dark:text-red-400",
        ),
    };

    let action = if connection.status.is_connected() {
        html! {
            <button
                onclick={connection.disconnect.clone()}
                disabled={connection.is_loading}
                class="text-sm font-medium text-neutral-700 \
                       dark:text-neutral-300 hover:text-neutral-900 \
                       dark:hover:text-neutral-100 disabled:opacity-50"
            >
                {"Desconectar"}
            </button>
        }
    } else {
        html! {
            <button
                onclick={connection.connect.clone()}
                disabled={connection.is_loading}
                class="px-3 py-1.5 rounded-md text-sm font-medium \
                       bg-blue-600 text-white hover:bg-blue-700 \
                       disabled:opacity-50"
            >
                {"Conectar"}
            </button>
        }
    };

    html! {
        <div class="flex items-center space-x-3">
            {connection.error.as_ref().map(|error| html! {
                <span
                    class="text-xs text-red-600 dark:text-red-400"
                    title={error.clone()}
                >
                    {error.clone()}
                </span>
            })}
            <span class={classes!(
                "px-2",
                "py-1",
                "rounded-full",
                "text-xs",
                "font-medium",
                pill_class,
            )}>
                {pill_text}
            </span>
            {action}
        </div>
    }
}
