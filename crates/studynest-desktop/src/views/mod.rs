//! Application views

mod dashboard;

pub use dashboard::Dashboard;
