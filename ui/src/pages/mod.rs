pub mod dashboard;
pub mod not_found;
pub mod orders;
pub mod products;

pub use dashboard::DashboardPage;
pub use not_found::NotFoundPage;
pub use orders::OrdersPage;
pub use products::ProductsPage;
