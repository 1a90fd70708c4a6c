pub mod handlers;
pub mod routes;

pub use routes::{create_application, DashboardApp, View};

#[cfg(test)]
mod routes_tests;
