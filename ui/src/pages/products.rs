use payloads::responses::Product;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{BadgeTone, PaginationControls, StatusBadge};
use crate::filters::{PRODUCTS_PAGE_SIZE, ProductFilters};
use crate::hooks::use_products;
use crate::utils::format::format_brl;

#[function_component]
pub fn ProductsPage() -> Html {
    let filters = use_state(ProductFilters::default);
    // Typed-but-not-submitted search text; committing it is what triggers
    // the fetch.
    let draft = use_state(String::new);
    let products = use_products(filters.to_query());

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let on_search = {
        let filters = filters.clone();
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            filters.set(filters.with_search((*draft).clone()));
        })
    };

    let searching = !filters.search.is_empty();

    let table = {
        let filters = filters.clone();
        products.render("produtos", move |page, is_loading, error| {
            let on_page_change = {
                let filters = filters.clone();
                Callback::from(move |new_page: u32| {
                    filters.set(filters.with_page(new_page));
                })
            };

            let body = if page.data.is_empty() {
                let message = if searching {
                    "Nenhum produto encontrado para a busca."
                } else {
                    "Nenhum produto encontrado."
                };
                html! {
                    <div class="text-center py-8 text-neutral-600 \
                                dark:text-neutral-400">
                        {message}
                    </div>
                }
            } else {
                html! {
                    <table class="min-w-full divide-y divide-neutral-200 \
                                  dark:divide-neutral-700">
                        <thead>
                            <tr class="text-left text-xs font-medium \
                                       uppercase text-neutral-500 \
                                       dark:text-neutral-400">
                                <th class="px-4 py-3">{"ID"}</th>
                                <th class="px-4 py-3">{"Código"}</th>
                                <th class="px-4 py-3">{"Nome"}</th>
                                <th class="px-4 py-3">{"Preço"}</th>
                                <th class="px-4 py-3">{"Tipo"}</th>
                                <th class="px-4 py-3">{"Status"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-neutral-200 \
                                      dark:divide-neutral-700">
                            {for page.data.iter().map(product_row)}
                        </tbody>
                    </table>
                }
            };

            html! {
                <div class="space-y-6">
                    {error.map(|error| html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                    dark:bg-red-900/20 border border-red-200 \
                                    dark:border-red-800 text-sm text-red-700 \
                                    dark:text-red-400">
                            {format!("Erro ao atualizar produtos: {error}")}
                        </div>
                    })}

                    <div class="bg-white dark:bg-neutral-800 rounded-lg \
                                shadow overflow-x-auto">
                        <div class="px-4 py-3 border-b border-neutral-200 \
                                    dark:border-neutral-700">
                            <h3 class="font-semibold text-neutral-900 \
                                       dark:text-neutral-100">
                                {format!(
                                    "Lista de Produtos ({} itens)",
                                    page.data.len()
                                )}
                            </h3>
                        </div>
                        {body}
                    </div>

                    <PaginationControls
                        page={filters.page}
                        has_next={page.has_more(PRODUCTS_PAGE_SIZE)}
                        is_loading={is_loading}
                        on_page_change={on_page_change}
                    />
                </div>
            }
        })
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <h2 class="text-2xl font-bold text-neutral-900 \
                           dark:text-neutral-100">
                    {"Produtos"}
                </h2>

                <form onsubmit={on_search} class="flex gap-2">
                    <input
                        type="text"
                        placeholder="Buscar produtos..."
                        value={(*draft).clone()}
                        oninput={on_input}
                        class="min-w-[200px] rounded-md border \
                               border-neutral-300 dark:border-neutral-600 \
                               bg-white dark:bg-neutral-700 px-3 py-2 \
                               text-sm"
                    />
                    <button
                        type="submit"
                        class="px-4 py-2 rounded-md text-sm font-medium \
                               bg-blue-600 text-white hover:bg-blue-700"
                    >
                        {"Buscar"}
                    </button>
                </form>
            </div>

            {table}
        </div>
    }
}

fn product_row(product: &Product) -> Html {
    let status = product.status();
    html! {
        <tr key={product.id.0.to_string()} class="text-sm text-neutral-700 \
                                                  dark:text-neutral-300">
            <td class="px-4 py-3">{product.id.to_string()}</td>
            <td class="px-4 py-3 font-medium">{product.code()}</td>
            <td class="px-4 py-3">{product.name()}</td>
            <td class="px-4 py-3">{format_brl(product.price())}</td>
            <td class="px-4 py-3">{product.type_label()}</td>
            <td class="px-4 py-3">
                <StatusBadge
                    label={status.label().to_string()}
                    tone={BadgeTone::for_product(&status)}
                />
            </td>
        </tr>
    }
}
