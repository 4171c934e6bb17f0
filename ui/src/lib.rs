use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod filters;
mod hooks;
mod logs;
mod metrics;
mod pages;
mod state;
mod utils;

pub use state::{ConnectionState, State};

use components::layout::MainLayout;
use pages::{DashboardPage, NotFoundPage, OrdersPage, ProductsPage};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin (current setup)
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    logs::init_logging();
    html! {
        <BrowserRouter>
            <MainLayout>
                <Switch<Route> render={switch} />
            </MainLayout>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/pedidos")]
    Orders,
    #[at("/produtos")]
    Products,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Orders => html! { <OrdersPage /> },
        Route::Products => html! { <ProductsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
