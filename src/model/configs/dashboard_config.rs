use crate::common::*;

#[doc = "Dashboard settings: the fixed city list, the year token of the datasets and the artifact output directory"]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct DashboardConfig {
    pub cities: Vec<String>,
    pub data_year: String,
    pub output_path: String,
}
