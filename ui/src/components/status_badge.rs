use payloads::responses::{OrderStatusKind, ProductStatus};
use yew::prelude::*;

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Amber,
    Red,
    Neutral,
}

impl BadgeTone {
    pub fn for_order(kind: OrderStatusKind) -> Self {
        match kind {
            OrderStatusKind::Approved => Self::Green,
            OrderStatusKind::Pending => Self::Amber,
            OrderStatusKind::Canceled => Self::Red,
            OrderStatusKind::Other => Self::Neutral,
        }
    }

    pub fn for_product(status: &ProductStatus) -> Self {
        match status {
            ProductStatus::Active => Self::Green,
            ProductStatus::Inactive => Self::Red,
            ProductStatus::Other(_) => Self::Neutral,
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Green => {
                "bg-green-100 text-green-700 \
                 dark:bg-green-900/30 dark:text-green-400"
            }
            Self::Amber => {
                "bg-amber-100 text-amber-700 \
                 dark:bg-amber-900/30 dark:text-amber-400"
            }
            Self::Red => {
                "bg-red-100 text-red-700 \
                 dark:bg-red-900/30 dark:text-red-400"
            }
            Self::Neutral => {
                "bg-neutral-100 text-neutral-600 \
                 dark:bg-neutral-700 dark:text-neutral-300"
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub label: AttrValue,
    pub tone: BadgeTone,
}

#[function_component]
pub fn StatusBadge(props: &Props) -> Html {
    html! {
        <span class={classes!(
            "px-2",
            "py-1",
            "rounded",
            "text-xs",
            "font-medium",
            props.tone.classes(),
        )}>
            {&props.label}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_status_tones() {
        assert_eq!(
            BadgeTone::for_product(&ProductStatus::Active),
            BadgeTone::Green
        );
        assert_eq!(
            BadgeTone::for_product(&ProductStatus::Inactive),
            BadgeTone::Red
        );
        assert_eq!(
            BadgeTone::for_product(&ProductStatus::Other("X".to_string())),
            BadgeTone::Neutral
        );
    }

    #[test]
    fn order_status_tones() {
        assert_eq!(
            BadgeTone::for_order(OrderStatusKind::Approved),
            BadgeTone::Green
        );
        assert_eq!(
            BadgeTone::for_order(OrderStatusKind::Pending),
            BadgeTone::Amber
        );
        assert_eq!(
            BadgeTone::for_order(OrderStatusKind::Canceled),
            BadgeTone::Red
        );
        assert_eq!(
            BadgeTone::for_order(OrderStatusKind::Other),
            BadgeTone::Neutral
        );
    }
}
