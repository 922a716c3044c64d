use crate::common::*;

#[doc = r#"
    One year of mean PM2.5 for a city, as delivered in the annual CSV dataset.
    The annual file covers all cities, so each row carries its city name; the
    national threshold column keeps the name it is produced with upstream.
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct AnnualRecord {
    pub city: String,
    pub year: i32,
    #[serde(rename = "pm2.5")]
    pub pm25: f64,
    pub nat_std_daily: f64,
}
