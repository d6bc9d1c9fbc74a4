//! Page Components

pub mod dashboard;

pub use dashboard::DashboardPage;
