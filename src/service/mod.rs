pub mod chart_service_impl;
pub mod fetch_service_impl;
