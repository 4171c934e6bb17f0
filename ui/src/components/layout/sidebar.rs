use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Sidebar() -> Html {
    let current = use_route::<Route>();

    let link = |route: Route, label: &str| {
        let active = current.as_ref() == Some(&route);
        let classes = if active {
            "block px-3 py-2 rounded-md text-sm font-medium \
             bg-neutral-200 text-neutral-900 \
             dark:bg-neutral-700 dark:text-neutral-100"
        } else {
            "block px-3 py-2 rounded-md text-sm font-medium \
             text-neutral-600 hover:bg-neutral-100 hover:text-neutral-900 \
             dark:text-neutral-400 dark:hover:bg-neutral-800 \
             dark:hover:text-neutral-100"
        };
        html! {
            <Link<Route> to={route} classes={classes!(classes)}>
                {label}
            </Link<Route>>
        }
    };

    html! {
        <nav class="w-48 shrink-0 border-r border-neutral-200 \
                    dark:border-neutral-700 px-3 py-6 space-y-1">
            {link(Route::Dashboard, "Dashboard")}
            {link(Route::Orders, "Pedidos")}
            {link(Route::Products, "Produtos")}
        </nav>
    }
}
