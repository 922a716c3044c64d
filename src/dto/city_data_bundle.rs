use crate::common::*;

use crate::dto::{dataset_table::*, fetch_outcome::*};

use crate::model::record::{annual_record::*, daily_record::*};

#[doc = r#"
    Everything fetched for one city during one render cycle: the three plot
    images and the three CSV datasets, each independently fetched or failed.
    There is no all-or-nothing guarantee; a bundle with three populated and
    three failed fields is a normal result. Built fresh per cycle, never
    persisted.
"#]
#[derive(Debug, Getters, new)]
#[getset(get = "pub")]
pub struct CityDataBundle {
    pub city: String,
    pub cigarettes_plot: FetchOutcome<DynamicImage>,
    pub air_quality_plot: FetchOutcome<DynamicImage>,
    pub annual_plot: FetchOutcome<DynamicImage>,
    pub cigarettes_table: FetchOutcome<DatasetTable<DailyRecord>>,
    pub air_quality_table: FetchOutcome<DatasetTable<DailyRecord>>,
    pub annual_table: FetchOutcome<DatasetTable<AnnualRecord>>,
}
