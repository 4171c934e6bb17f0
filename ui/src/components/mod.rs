pub mod connect_panel;
pub mod integration_status;
pub mod layout;
pub mod metrics_card;
pub mod orders_table;
pub mod pagination_controls;
pub mod sales_chart;
pub mod status_badge;

pub use connect_panel::ConnectPanel;
pub use integration_status::IntegrationStatus;
pub use metrics_card::MetricsCard;
pub use orders_table::OrdersTable;
pub use pagination_controls::PaginationControls;
pub use sales_chart::SalesChart;
pub use status_badge::{BadgeTone, StatusBadge};
