use payloads::requests::OrdersQuery;
use yew::prelude::*;

use crate::components::{
    IntegrationStatus, MetricsCard, OrdersTable, SalesChart,
};
use crate::hooks::{use_dashboard_summary, use_health, use_orders};
use crate::metrics::{chart_series, dashboard_metrics};
use crate::utils::format::format_brl;

/// Number of recent orders shown on the dashboard.
const RECENT_ORDERS_LIMIT: u32 = 5;

#[function_component]
pub fn DashboardPage() -> Html {
    let summary = use_dashboard_summary();
    let recent_orders = use_orders(OrdersQuery {
        limit: RECENT_ORDERS_LIMIT,
        ..Default::default()
    });
    let health = use_health();

    // Metrics read as zero while the order fetch is failing; the warning
    // banner and the status panel carry the explanation.
    let orders = if recent_orders.error.is_some() {
        Vec::new()
    } else {
        recent_orders
            .data
            .as_ref()
            .map(|page| page.data.clone())
            .unwrap_or_default()
    };
    let products_count = summary
        .data
        .as_ref()
        .map(|s| s.products.recent.len())
        .unwrap_or(0);
    let metrics = dashboard_metrics(&orders, products_count);

    let (points, illustrative) = chart_series(
        recent_orders.data.as_ref().map(|page| page.data.as_slice()),
        recent_orders.error.is_some(),
    );
    let chart_title = if illustrative {
        "Vendas (Dados de Exemplo)"
    } else {
        "Vendas por Data"
    };
    let table_title = if recent_orders.error.is_some() {
        "Pedidos Recentes (Indisponível)"
    } else {
        "Pedidos Recentes"
    };

    let on_refresh = {
        let refetch_summary = summary.refetch.clone();
        let refetch_orders = recent_orders.refetch.clone();
        let refetch_health = health.refetch.clone();
        Callback::from(move |_: MouseEvent| {
            refetch_summary.emit(());
            refetch_orders.emit(());
            refetch_health.emit(());
        })
    };

    let warning = (summary.error.is_some() || recent_orders.error.is_some())
        .then(|| {
            html! {
                <div class="p-4 rounded-md bg-amber-50 dark:bg-amber-900/20 \
                            border border-amber-200 dark:border-amber-800 \
                            text-sm text-amber-800 dark:text-amber-300">
                    <strong>{"Aviso: "}</strong>
                    {"Alguns dados podem não estar atualizados devido a \
                      problemas na conexão com o Bling ERP."}
                    {recent_orders.error.as_ref().map(|error| html! {
                        <div class="mt-1">
                            {format!("Pedidos: {error}")}
                        </div>
                    })}
                </div>
            }
        });

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-2xl font-bold text-neutral-900 \
                           dark:text-neutral-100">
                    {"Dashboard"}
                </h2>
                <button
                    onclick={on_refresh}
                    disabled={summary.is_loading || recent_orders.is_loading}
                    class="px-3 py-1.5 rounded-md text-sm font-medium border \
                           border-neutral-300 dark:border-neutral-600 \
                           text-neutral-700 dark:text-neutral-300 \
                           hover:bg-neutral-100 dark:hover:bg-neutral-700 \
                           disabled:opacity-50"
                >
                    {"Atualizar"}
                </button>
            </div>

            {warning}

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 \
                        gap-4">
                <MetricsCard
                    title="Total de Vendas"
                    value={format_brl(metrics.total_sales)}
                    icon="💰"
                />
                <MetricsCard
                    title="Pedidos"
                    value={metrics.total_orders.to_string()}
                    icon="📋"
                />
                <MetricsCard
                    title="Produtos"
                    value={metrics.products_count.to_string()}
                    icon="📦"
                />
                <MetricsCard
                    title="Ticket Médio"
                    value={format_brl(metrics.avg_order_value)}
                    icon="📊"
                />
            </div>

            // On a refetch the previous series keeps rendering; the
            // loading placeholder only shows before the first data arrives.
            <SalesChart
                points={points}
                title={chart_title}
                is_loading={summary.is_initial_loading()
                    || recent_orders.is_initial_loading()}
            />

            <OrdersTable
                orders={orders}
                title={table_title}
                is_loading={recent_orders.is_loading}
            />

            <IntegrationStatus
                dashboard_error={summary.error.clone()}
                orders_error={recent_orders.error.clone()}
                health_error={health.error.clone()}
                summary={summary.data.as_ref().cloned()}
            />
        </div>
    }
}
