use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    /// Preformatted value; the caller decides currency vs. plain count.
    pub value: AttrValue,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
}

#[function_component]
pub fn MetricsCard(props: &Props) -> Html {
    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow p-6">
            <div class="text-sm text-neutral-600 dark:text-neutral-400">
                {props.icon.as_ref().map(|icon| html! {
                    <span class="mr-2">{icon}</span>
                })}
                {&props.title}
            </div>
            <div class="mt-2 text-3xl font-bold text-neutral-900 \
                        dark:text-neutral-100">
                {&props.value}
            </div>
        </div>
    }
}
