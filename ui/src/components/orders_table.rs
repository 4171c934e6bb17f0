use payloads::responses::Order;
use yew::prelude::*;

use super::{BadgeTone, StatusBadge};
use crate::utils::format::{format_brl, format_date};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub orders: Vec<Order>,
    pub title: AttrValue,
    #[prop_or(false)]
    pub is_loading: bool,
}

#[function_component]
pub fn OrdersTable(props: &Props) -> Html {
    let body = if props.is_loading {
        html! {
            <div class="text-center py-8 text-neutral-600 \
                        dark:text-neutral-400">
                {"Carregando pedidos..."}
            </div>
        }
    } else if props.orders.is_empty() {
        html! {
            <div class="text-center py-8 text-neutral-600 \
                        dark:text-neutral-400">
                {"Nenhum pedido encontrado"}
            </div>
        }
    } else {
        html! {
            <table class="min-w-full divide-y divide-neutral-200 \
                          dark:divide-neutral-700">
                <thead>
                    <tr class="text-left text-xs font-medium uppercase \
                               text-neutral-500 dark:text-neutral-400">
                        <th class="px-4 py-3">{"Número"}</th>
                        <th class="px-4 py-3">{"Data"}</th>
                        <th class="px-4 py-3">{"Cliente"}</th>
                        <th class="px-4 py-3">{"Status"}</th>
                        <th class="px-4 py-3">{"Total"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-neutral-200 \
                              dark:divide-neutral-700">
                    {for props.orders.iter().map(order_row)}
                </tbody>
            </table>
        }
    };

    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow \
                    overflow-x-auto">
            <div class="px-4 py-3 border-b border-neutral-200 \
                        dark:border-neutral-700">
                <h3 class="font-semibold text-neutral-900 \
                           dark:text-neutral-100">
                    {&props.title}
                </h3>
            </div>
            {body}
        </div>
    }
}

fn order_row(order: &Order) -> Html {
    html! {
        <tr key={order.id.0.to_string()} class="text-sm text-neutral-700 \
                                                dark:text-neutral-300">
            <td class="px-4 py-3 font-medium">
                {format!("#{}", order.display_number())}
            </td>
            <td class="px-4 py-3">
                {format_date(order.emission_date())}
            </td>
            <td class="px-4 py-3">{order.customer_name()}</td>
            <td class="px-4 py-3">
                <StatusBadge
                    label={order.status_label().to_string()}
                    tone={BadgeTone::for_order(order.status_kind())}
                />
            </td>
            <td class="px-4 py-3 font-semibold">
                {format_brl(order.total_amount())}
            </td>
        </tr>
    }
}
