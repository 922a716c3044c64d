use crate::common::*;

#[doc = "Chart settings; `min_date` is the earliest date shown on the daily line plot (quoted `\"YYYY-MM-DD\"` in the TOML file)"]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ChartConfig {
    pub min_date: NaiveDate,
}
