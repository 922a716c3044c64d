use crate::common::*;

use crate::model::configs::{chart_config::*, dashboard_config::*, storage_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub storage: StorageConfig,
    pub dashboard: DashboardConfig,
    pub chart: ChartConfig,
}

#[doc = "Object storage config"]
pub fn get_storage_config_info() -> &'static StorageConfig {
    &TOTAL_CONFIG.storage
}

#[doc = "Dashboard config"]
pub fn get_dashboard_config_info() -> &'static DashboardConfig {
    &TOTAL_CONFIG.dashboard
}

#[doc = "Chart config"]
pub fn get_chart_config_info() -> &'static ChartConfig {
    &TOTAL_CONFIG.chart
}

impl TotalConfig {
    fn new() -> Self {
        match read_toml_from_file::<TotalConfig>(&SERVER_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                let err_msg = "Failed to convert the data from SERVER_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}
