//! Display-ready aggregates derived from a page of ERP orders.
//!
//! Everything here is a pure function of its inputs; the dashboard
//! recomputes on every render rather than caching.

use payloads::responses::Order;
use rust_decimal::Decimal;

use crate::utils::format::short_date_label;

/// Aggregate figures for the dashboard metric cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub total_orders: usize,
    pub total_sales: Decimal,
    pub products_count: usize,
    pub avg_order_value: Decimal,
}

/// Compute the card figures from the current order collection.
///
/// `products_count` comes from the dashboard summary's recent-products
/// list and is independent of the orders.
pub fn dashboard_metrics(
    orders: &[Order],
    products_count: usize,
) -> DashboardMetrics {
    let total_orders = orders.len();
    let total_sales: Decimal = orders.iter().map(Order::total_amount).sum();
    let avg_order_value = if total_orders > 0 {
        total_sales / Decimal::from(total_orders as u64)
    } else {
        Decimal::ZERO
    };

    DashboardMetrics {
        total_orders,
        total_sales,
        products_count,
        avg_order_value,
    }
}

/// One chart point: a `dd/mm` label and the summed sales for that date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesPoint {
    pub label: String,
    pub amount: Decimal,
}

/// Group orders by formatted emission date, summing totals per group.
///
/// One point per distinct date, in the order dates are first encountered
/// in the input; orders without a date are skipped. Pages are at most 100
/// rows, so the linear label scan stays cheap.
pub fn sales_by_date(orders: &[Order]) -> Vec<SalesPoint> {
    let mut points: Vec<SalesPoint> = Vec::new();
    for order in orders {
        let Some(date) = order.emission_date() else {
            continue;
        };
        let label = short_date_label(date);
        match points.iter_mut().find(|p| p.label == label) {
            Some(point) => point.amount += order.total_amount(),
            None => points.push(SalesPoint {
                label,
                amount: order.total_amount(),
            }),
        }
    }
    points
}

/// Fixed illustrative series shown when no real data is available, so the
/// chart never renders misleadingly empty.
pub fn fallback_series() -> Vec<SalesPoint> {
    [
        ("25/08", 1500),
        ("26/08", 2200),
        ("27/08", 1800),
        ("28/08", 2500),
        ("29/08", 3200),
    ]
    .into_iter()
    .map(|(label, amount)| SalesPoint {
        label: label.to_string(),
        amount: Decimal::from(amount),
    })
    .collect()
}

/// Series for the sales chart: the real grouping when the fetch succeeded
/// and produced points, else the illustrative fallback. The flag reports
/// that the fallback was substituted so the chart can label it.
pub fn chart_series(
    orders: Option<&[Order]>,
    fetch_failed: bool,
) -> (Vec<SalesPoint>, bool) {
    if !fetch_failed
        && let Some(orders) = orders
    {
        let series = sales_by_date(orders);
        if !series.is_empty() {
            return (series, false);
        }
    }
    (fallback_series(), true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::OrderId;

    fn order(total: Option<&str>, date: Option<&str>) -> Order {
        Order {
            id: OrderId(1),
            numero: None,
            data_emissao: date.map(str::to_string),
            data: None,
            contato: None,
            cliente: None,
            situacao: None,
            status: None,
            total: total.map(|t| t.parse().unwrap()),
            valor: None,
        }
    }

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn metrics_for_a_typical_page() {
        let orders = vec![
            order(Some("100"), Some("2024-08-01")),
            order(Some("50"), Some("2024-08-01")),
            order(Some("200"), Some("2024-08-02")),
        ];
        let metrics = dashboard_metrics(&orders, 4);

        assert_eq!(metrics.total_orders, 3);
        assert_eq!(metrics.total_sales, dec("350"));
        assert_eq!(metrics.products_count, 4);
        // 350 / 3, exactly.
        assert_eq!(metrics.avg_order_value, dec("350") / dec("3"));
        assert_eq!(metrics.avg_order_value.round_dp(2), dec("116.67"));
    }

    #[test]
    fn missing_totals_count_as_zero() {
        let orders = vec![order(None, None), order(Some("10"), None)];
        let metrics = dashboard_metrics(&orders, 0);
        assert_eq!(metrics.total_orders, 2);
        assert_eq!(metrics.total_sales, dec("10"));
    }

    #[test]
    fn average_is_zero_for_an_empty_collection() {
        let metrics = dashboard_metrics(&[], 2);
        assert_eq!(metrics.total_orders, 0);
        assert_eq!(metrics.total_sales, Decimal::ZERO);
        assert_eq!(metrics.avg_order_value, Decimal::ZERO);
        assert_eq!(metrics.products_count, 2);
    }

    #[test]
    fn series_groups_by_date_in_first_encounter_order() {
        let orders = vec![
            order(Some("100"), Some("2024-08-01")),
            order(Some("200"), Some("2024-08-02")),
            order(Some("50"), Some("2024-08-01")),
            order(Some("5"), None),
        ];
        let series = sales_by_date(&orders);
        assert_eq!(
            series,
            vec![
                SalesPoint {
                    label: "01/08".to_string(),
                    amount: dec("150"),
                },
                SalesPoint {
                    label: "02/08".to_string(),
                    amount: dec("200"),
                },
            ]
        );
    }

    #[test]
    fn fallback_series_has_exactly_five_points() {
        assert_eq!(fallback_series().len(), 5);
    }

    #[test]
    fn chart_substitutes_fallback_on_empty_or_failed_data() {
        let (series, illustrative) = chart_series(Some(&[]), false);
        assert!(illustrative);
        assert_eq!(series.len(), 5);

        let orders = vec![order(Some("100"), Some("2024-08-01"))];
        let (series, illustrative) = chart_series(Some(&orders), true);
        assert!(illustrative);
        assert_eq!(series.len(), 5);

        let (series, illustrative) = chart_series(Some(&orders), false);
        assert!(!illustrative);
        assert_eq!(series[0].label, "01/08");
    }
}
