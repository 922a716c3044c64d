pub mod chart_service;
pub mod fetch_service;
