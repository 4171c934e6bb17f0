use rust_decimal::prelude::ToPrimitive;
use yew::prelude::*;

use crate::metrics::SalesPoint;
use crate::utils::format::format_brl;

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 30.0;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub points: Vec<SalesPoint>,
    pub title: AttrValue,
    #[prop_or(false)]
    pub is_loading: bool,
}

/// Line chart of sales per emission date, drawn as plain SVG.
#[function_component]
pub fn SalesChart(props: &Props) -> Html {
    let body = if props.is_loading {
        html! {
            <div class="text-center py-12 text-neutral-600 \
                        dark:text-neutral-400">
                {"Carregando gráfico..."}
            </div>
        }
    } else {
        chart_svg(&props.points)
    };

    html! {
        <div class="bg-white dark:bg-neutral-800 rounded-lg shadow p-6">
            <h3 class="font-semibold text-neutral-900 dark:text-neutral-100 \
                       mb-4">
                {&props.title}
            </h3>
            {body}
        </div>
    }
}

fn chart_svg(points: &[SalesPoint]) -> Html {
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let max_amount = points
        .iter()
        .filter_map(|p| p.amount.to_f64())
        .fold(0.0f64, f64::max)
        .max(1.0);

    let x_at = |index: usize| {
        let slots = points.len().saturating_sub(1).max(1) as f64;
        MARGIN_LEFT + index as f64 * plot_width / slots
    };
    let y_at = |amount: f64| {
        MARGIN_TOP + plot_height - amount / max_amount * plot_height
    };

    let positions: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (x_at(i), y_at(p.amount.to_f64().unwrap_or(0.0))))
        .collect();

    let polyline = positions
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");

    // Four horizontal gridlines with their amounts.
    let gridlines = (0..=3).map(|step| {
        let amount = max_amount * step as f64 / 3.0;
        let y = y_at(amount);
        html! {
            <g key={step}>
                <line
                    x1={MARGIN_LEFT.to_string()}
                    y1={y.to_string()}
                    x2={(WIDTH - MARGIN_RIGHT).to_string()}
                    y2={y.to_string()}
                    stroke="currentColor"
                    stroke-opacity="0.15"
                    stroke-dasharray="3 3"
                />
                <text
                    x={(MARGIN_LEFT - 6.0).to_string()}
                    y={(y + 4.0).to_string()}
                    text-anchor="end"
                    font-size="10"
                    fill="currentColor"
                    fill-opacity="0.6"
                >
                    {format_brl(rust_decimal::Decimal::try_from(amount)
                        .unwrap_or_default())}
                </text>
            </g>
        }
    });

    html! {
        <svg
            viewBox={format!("0 0 {WIDTH} {HEIGHT}")}
            class="w-full text-neutral-700 dark:text-neutral-300"
            role="img"
        >
            {for gridlines}
            <polyline
                points={polyline}
                fill="none"
                stroke="#2563eb"
                stroke-width="2"
            />
            {for positions.iter().zip(points).enumerate().map(
                |(i, ((x, y), point))| html! {
                    <g key={i}>
                        <circle
                            cx={x.to_string()}
                            cy={y.to_string()}
                            r="3.5"
                            fill="#2563eb"
                        >
                            <title>
                                {format!(
                                    "{}: {}",
                                    point.label,
                                    format_brl(point.amount)
                                )}
                            </title>
                        </circle>
                        <text
                            x={x.to_string()}
                            y={(HEIGHT - 8.0).to_string()}
                            text-anchor="middle"
                            font-size="10"
                            fill="currentColor"
                            fill-opacity="0.6"
                        >
                            {point.label.clone()}
                        </text>
                    </g>
                }
            )}
        </svg>
    }
}
