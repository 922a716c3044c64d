pub mod chart_config;
pub mod dashboard_config;
pub mod storage_config;
pub mod total_config;
