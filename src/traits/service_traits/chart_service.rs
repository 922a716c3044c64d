use crate::common::*;

use crate::dto::dataset_table::*;

use crate::model::record::{annual_record::*, daily_record::*};

pub trait ChartService: Send + Sync {
    #[doc = "
        Line plot of daily PM2.5 with national/WHO daily reference lines.
        Returns None when no row falls on or after the configured minimum date.
    "]
    fn create_line_plot(&self, daily_table: &DatasetTable<DailyRecord>, city: &str) -> Option<Plot>;

    #[doc = "
        Bar plot of weekly cigarette-equivalent consumption derived from daily
        PM2.5. Returns None when the table is empty.
    "]
    fn create_cigarettes_plot(
        &self,
        daily_table: &DatasetTable<DailyRecord>,
        city: &str,
    ) -> Option<Plot>;

    #[doc = "
        Bar plot of annual PM2.5 with national/WHO annual reference lines.
        Returns None when the table holds no rows for the requested city.
    "]
    fn create_annual_plot(
        &self,
        annual_table: &DatasetTable<AnnualRecord>,
        city: &str,
    ) -> Option<Plot>;
}
