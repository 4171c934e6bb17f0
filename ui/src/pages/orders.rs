use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{OrdersTable, PaginationControls};
use crate::filters::{ORDERS_PAGE_SIZE, OrderFilters};
use crate::hooks::use_orders;
use crate::metrics::dashboard_metrics;
use crate::utils::format::format_brl;

#[function_component]
pub fn OrdersPage() -> Html {
    let filters = use_state(OrderFilters::default);
    let orders = use_orders(filters.to_query());

    let on_start_date = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filters.set(filters.with_start_date(input.value()));
        })
    };

    let on_end_date = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            filters.set(filters.with_end_date(input.value()));
        })
    };

    let on_status = {
        let filters = filters.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            filters.set(filters.with_status(select.value()));
        })
    };

    // Resetting the filter value is enough to trigger the re-fetch: the
    // query is a dependency of the fetch hook.
    let on_clear = {
        let filters = filters.clone();
        Callback::from(move |_: MouseEvent| {
            filters.set(OrderFilters::default());
        })
    };

    let table = {
        let filters = filters.clone();
        orders.render("pedidos", move |page, is_loading, error| {
            let totals = dashboard_metrics(&page.data, 0);
            let on_page_change = {
                let filters = filters.clone();
                Callback::from(move |new_page: u32| {
                    filters.set(filters.with_page(new_page));
                })
            };

            html! {
                <div class="space-y-6">
                    {error.map(|error| html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                    dark:bg-red-900/20 border border-red-200 \
                                    dark:border-red-800 text-sm text-red-700 \
                                    dark:text-red-400">
                            {format!("Erro ao atualizar pedidos: {error}")}
                        </div>
                    })}

                    {(!page.data.is_empty()).then(|| html! {
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            <div class="bg-white dark:bg-neutral-800 \
                                        rounded-lg shadow p-4 text-center">
                                <div class="text-2xl font-bold \
                                            text-blue-600 \
                                            dark:text-blue-400">
                                    {totals.total_orders}
                                </div>
                                <div class="text-xs text-neutral-600 \
                                            dark:text-neutral-400">
                                    {"Pedidos Encontrados"}
                                </div>
                            </div>
                            <div class="bg-white dark:bg-neutral-800 \
                                        rounded-lg shadow p-4 text-center">
                                <div class="text-2xl font-bold \
                                            text-green-600 \
                                            dark:text-green-400">
                                    {format_brl(totals.total_sales)}
                                </div>
                                <div class="text-xs text-neutral-600 \
                                            dark:text-neutral-400">
                                    {"Total em Vendas"}
                                </div>
                            </div>
                        </div>
                    })}

                    <OrdersTable
                        orders={page.data.clone()}
                        title="Lista de Pedidos"
                        is_loading={is_loading}
                    />

                    <PaginationControls
                        page={filters.page}
                        has_next={page.has_more(ORDERS_PAGE_SIZE)}
                        is_loading={is_loading}
                        on_page_change={on_page_change}
                    />
                </div>
            }
        })
    };

    html! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold text-neutral-900 \
                       dark:text-neutral-100">
                {"Pedidos"}
            </h2>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 \
                        gap-4 bg-white dark:bg-neutral-800 rounded-lg \
                        shadow p-4">
                <label class="block text-sm">
                    <span class="font-medium text-neutral-700 \
                                 dark:text-neutral-300">
                        {"Data Inicial"}
                    </span>
                    <input
                        type="date"
                        value={filters.start_date.clone()}
                        onchange={on_start_date}
                        class="mt-1 w-full rounded-md border \
                               border-neutral-300 dark:border-neutral-600 \
                               bg-white dark:bg-neutral-700 px-2 py-1.5"
                    />
                </label>

                <label class="block text-sm">
                    <span class="font-medium text-neutral-700 \
                                 dark:text-neutral-300">
                        {"Data Final"}
                    </span>
                    <input
                        type="date"
                        value={filters.end_date.clone()}
                        onchange={on_end_date}
                        class="mt-1 w-full rounded-md border \
                               border-neutral-300 dark:border-neutral-600 \
                               bg-white dark:bg-neutral-700 px-2 py-1.5"
                    />
                </label>

                <label class="block text-sm">
                    <span class="font-medium text-neutral-700 \
                                 dark:text-neutral-300">
                        {"Status"}
                    </span>
                    <select
                        onchange={on_status}
                        class="mt-1 w-full rounded-md border \
                               border-neutral-300 dark:border-neutral-600 \
                               bg-white dark:bg-neutral-700 px-2 py-1.5"
                    >
                        <option value="" selected={filters.status.is_empty()}>
                            {"Todos"}
                        </option>
                        <option
                            value="aprovado"
                            selected={filters.status == "aprovado"}
                        >
                            {"Aprovado"}
                        </option>
                        <option
                            value="pendente"
                            selected={filters.status == "pendente"}
                        >
                            {"Pendente"}
                        </option>
                        <option
                            value="cancelado"
                            selected={filters.status == "cancelado"}
                        >
                            {"Cancelado"}
                        </option>
                    </select>
                </label>

                <div class="flex items-end">
                    <button
                        onclick={on_clear}
                        class="px-4 py-2 rounded-md text-sm font-medium \
                               bg-neutral-600 text-white \
                               hover:bg-neutral-700"
                    >
                        {"Limpar"}
                    </button>
                </div>
            </div>

            {table}
        </div>
    }
}
