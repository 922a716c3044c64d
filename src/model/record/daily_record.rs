use crate::common::*;

use crate::utils_modules::serde_utils::*;

#[doc = r#"
    One day of PM2.5 measurements for a city, as delivered in the daily CSV
    dataset. The violation flags are precomputed upstream against the national
    and WHO daily thresholds; they are never recomputed here.
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct DailyRecord {
    pub date: NaiveDate,
    #[serde(rename = "pm2.5")]
    pub pm25: f64,
    pub nat_std_daily: f64,
    pub who_std_daily: f64,
    #[serde(deserialize_with = "deserialize_py_bool")]
    pub violate_daily_nat: bool,
    #[serde(deserialize_with = "deserialize_py_bool")]
    pub violate_daily_who: bool,
}
