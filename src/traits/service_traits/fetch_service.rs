use crate::common::*;

use crate::dto::{city_data_bundle::*, dataset_table::*, fetch_outcome::*};

use crate::enums::asset_kind::*;

use crate::model::record::{annual_record::*, daily_record::*};

#[async_trait]
pub trait FetchService: Send + Sync {
    async fn fetch_daily_table(
        &self,
        asset_kind: AssetKind,
        city: &str,
    ) -> FetchOutcome<DatasetTable<DailyRecord>>;

    async fn fetch_annual_table(
        &self,
        asset_kind: AssetKind,
        city: &str,
    ) -> FetchOutcome<DatasetTable<AnnualRecord>>;

    async fn fetch_image(&self, asset_kind: AssetKind, city: &str) -> FetchOutcome<DynamicImage>;

    #[doc = "
        Fetch all six assets of a city and assemble them into one bundle.
        Each field fails independently; this never returns an error itself.
    "]
    async fn build_city_bundle(&self, city: &str) -> CityDataBundle;
}
