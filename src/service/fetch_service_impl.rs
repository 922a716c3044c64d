use crate::common::*;

use crate::traits::{
    repository_traits::object_storage_repository::*, service_traits::fetch_service::*,
};

use crate::dto::{city_data_bundle::*, dataset_table::*, fetch_outcome::*};

use crate::enums::{asset_kind::*, fetch_error::*};

use crate::model::record::{annual_record::*, daily_record::*};

#[derive(Debug, new)]
pub struct FetchServiceImpl<R: ObjectStorageRepository> {
    storage_repository: Arc<R>,
    image_folder: String,
    csv_folder: String,
    data_year: String,
}

impl<R: ObjectStorageRepository> FetchServiceImpl<R> {
    fn build_key(&self, asset_kind: AssetKind, city: &str) -> String {
        asset_kind.storage_key(&self.image_folder, &self.csv_folder, city, &self.data_year)
    }

    #[doc = r#"
        Decodes CSV bytes into a typed table. The raw text is retained next to
        the parsed rows; the row count equals the number of data lines in the
        source (header excluded).

        # Type Parameters
        * `T` - Row type of the dataset

        # Returns
        * `Result<DatasetTable<T>, FetchError>` - `Decode` errors for invalid
          UTF-8 or rows that do not match the row type
    "#]
    fn parse_table<T: DeserializeOwned>(key: &str, bytes: Vec<u8>) -> Result<DatasetTable<T>, FetchError> {
        let raw_csv: String = String::from_utf8(bytes).map_err(|e| {
            FetchError::Decode(format!(
                "[FetchServiceImpl->parse_table] '{}' is not valid UTF-8: {}",
                key, e
            ))
        })?;

        let mut reader = ReaderBuilder::new().from_reader(raw_csv.as_bytes());

        let mut rows: Vec<T> = Vec::new();
        for record in reader.deserialize::<T>() {
            let row: T = record.map_err(|e| {
                FetchError::Decode(format!(
                    "[FetchServiceImpl->parse_table] Failed to parse a row of '{}': {}",
                    key, e
                ))
            })?;
            rows.push(row);
        }

        Ok(DatasetTable::new(raw_csv, rows))
    }

    #[doc = r#"
        Fetches and decodes one CSV asset. Storage and decode failures are
        logged and converted into a `Failed` outcome; they never propagate as
        errors to the caller.
    "#]
    async fn fetch_table<T: DeserializeOwned>(
        &self,
        asset_kind: AssetKind,
        city: &str,
    ) -> FetchOutcome<DatasetTable<T>> {
        debug_assert_eq!(asset_kind.content_kind(), ContentKind::Csv);

        let key: String = self.build_key(asset_kind, city);

        let bytes: Vec<u8> = match self.storage_repository.get_object(&key).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("[FetchServiceImpl->fetch_table] Error for '{}': {}", key, e);
                return FetchOutcome::Failed(e);
            }
        };

        info!("Getting .csv file: {}", key);

        match Self::parse_table::<T>(&key, bytes) {
            Ok(table) => FetchOutcome::Fetched(table),
            Err(e) => {
                error!("[FetchServiceImpl->fetch_table] Error for '{}': {}", key, e);
                FetchOutcome::Failed(e)
            }
        }
    }
}

#[async_trait]
impl<R: ObjectStorageRepository> FetchService for FetchServiceImpl<R> {
    async fn fetch_daily_table(
        &self,
        asset_kind: AssetKind,
        city: &str,
    ) -> FetchOutcome<DatasetTable<DailyRecord>> {
        self.fetch_table::<DailyRecord>(asset_kind, city).await
    }

    async fn fetch_annual_table(
        &self,
        asset_kind: AssetKind,
        city: &str,
    ) -> FetchOutcome<DatasetTable<AnnualRecord>> {
        self.fetch_table::<AnnualRecord>(asset_kind, city).await
    }

    async fn fetch_image(&self, asset_kind: AssetKind, city: &str) -> FetchOutcome<DynamicImage> {
        debug_assert_eq!(asset_kind.content_kind(), ContentKind::Image);

        let key: String = self.build_key(asset_kind, city);

        let bytes: Vec<u8> = match self.storage_repository.get_object(&key).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("[FetchServiceImpl->fetch_image] Error for '{}': {}", key, e);
                return FetchOutcome::Failed(e);
            }
        };

        info!("Getting image: {}", key);

        match image::load_from_memory(&bytes) {
            Ok(decoded_image) => FetchOutcome::Fetched(decoded_image),
            Err(e) => {
                let decode_err: FetchError = FetchError::Decode(format!(
                    "[FetchServiceImpl->fetch_image] Failed to decode '{}': {}",
                    key, e
                ));
                error!("{}", decode_err);
                FetchOutcome::Failed(decode_err)
            }
        }
    }

    async fn build_city_bundle(&self, city: &str) -> CityDataBundle {
        /* The six fetches share no state; run them concurrently */
        let (
            cigarettes_plot,
            air_quality_plot,
            annual_plot,
            cigarettes_table,
            air_quality_table,
            annual_table,
        ) = tokio::join!(
            self.fetch_image(AssetKind::CigarettesPlot, city),
            self.fetch_image(AssetKind::AirQualityPlot, city),
            self.fetch_image(AssetKind::AnnualPlot, city),
            self.fetch_daily_table(AssetKind::CigarettesCsv, city),
            self.fetch_daily_table(AssetKind::AirQualityCsv, city),
            self.fetch_annual_table(AssetKind::AnnualCsv, city),
        );

        CityDataBundle::new(
            city.to_string(),
            cigarettes_plot,
            air_quality_plot,
            annual_plot,
            cigarettes_table,
            air_quality_table,
            annual_table,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeStorageRepository {
        objects: HashMap<String, Vec<u8>>,
    }

    #[async_trait]
    impl ObjectStorageRepository for FakeStorageRepository {
        async fn get_object(&self, key: &str) -> Result<Vec<u8>, FetchError> {
            self.objects
                .get(key)
                .cloned()
                .ok_or_else(|| FetchError::NotFound(key.to_string()))
        }

        async fn put_object(&self, _local_path: &str, _key: &str) -> Result<(), FetchError> {
            Ok(())
        }
    }

    fn daily_csv() -> &'static str {
        "date,pm2.5,nat_std_daily,who_std_daily,violate_daily_nat,violate_daily_who\n\
         2024-01-01,30.0,35.0,15.0,False,True\n\
         2024-01-02,40.0,35.0,15.0,True,True\n"
    }

    fn annual_csv() -> &'static str {
        "city,year,pm2.5,nat_std_daily\n\
         Kanpur,2023,85.3,40.0\n\
         Kanpur,2024,78.1,40.0\n"
    }

    fn png_bytes() -> Vec<u8> {
        let img: DynamicImage = DynamicImage::new_rgb8(1, 1);
        let mut buffer: Vec<u8> = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    fn service_with(objects: HashMap<String, Vec<u8>>) -> FetchServiceImpl<FakeStorageRepository> {
        FetchServiceImpl::new(
            Arc::new(FakeStorageRepository { objects }),
            "plots".to_string(),
            "plots_data".to_string(),
            "2024".to_string(),
        )
    }

    #[tokio::test]
    async fn parses_every_data_line_of_a_well_formed_csv() {
        let mut objects: HashMap<String, Vec<u8>> = HashMap::new();
        objects.insert(
            "plots_data/Kanpur_daily_2024.csv".to_string(),
            daily_csv().as_bytes().to_vec(),
        );

        let service = service_with(objects);
        let outcome = service.fetch_daily_table(AssetKind::AirQualityCsv, "Kanpur").await;

        let table = outcome.as_fetched().expect("table should be fetched");
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.raw_csv(), daily_csv());
        assert!(table.rows()[1].violate_daily_nat);
        assert!(!table.rows()[0].violate_daily_nat);
    }

    #[tokio::test]
    async fn storage_errors_become_failed_outcomes() {
        let service = service_with(HashMap::new());

        let table_outcome = service.fetch_daily_table(AssetKind::AirQualityCsv, "Nowhere").await;
        assert!(matches!(
            table_outcome.error(),
            Some(FetchError::NotFound(_))
        ));

        let image_outcome = service.fetch_image(AssetKind::AnnualPlot, "Nowhere").await;
        assert!(matches!(
            image_outcome.error(),
            Some(FetchError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn undecodable_image_bytes_become_decode_failures() {
        let mut objects: HashMap<String, Vec<u8>> = HashMap::new();
        objects.insert(
            "plots/Kanpur_annual_2024.png".to_string(),
            b"definitely not a png".to_vec(),
        );

        let service = service_with(objects);
        let outcome = service.fetch_image(AssetKind::AnnualPlot, "Kanpur").await;

        assert!(matches!(outcome.error(), Some(FetchError::Decode(_))));
    }

    #[tokio::test]
    async fn bundle_holds_partial_results_without_failing() {
        let mut objects: HashMap<String, Vec<u8>> = HashMap::new();
        objects.insert(
            "plots_data/Kanpur_daily_2024.csv".to_string(),
            daily_csv().as_bytes().to_vec(),
        );
        objects.insert(
            "plots_data/Kanpur_annual.csv".to_string(),
            annual_csv().as_bytes().to_vec(),
        );
        objects.insert("plots/Kanpur_annual_2024.png".to_string(), png_bytes());

        let service = service_with(objects);
        let bundle = service.build_city_bundle("Kanpur").await;

        assert!(bundle.air_quality_table().is_fetched());
        assert!(bundle.annual_table().is_fetched());
        assert!(bundle.annual_plot().is_fetched());
        /* Missing assets fail independently */
        assert!(!bundle.cigarettes_table().is_fetched());
        assert!(!bundle.cigarettes_plot().is_fetched());
        assert!(!bundle.air_quality_plot().is_fetched());
    }

    #[tokio::test]
    async fn bundle_rebuild_is_idempotent() {
        let mut objects: HashMap<String, Vec<u8>> = HashMap::new();
        objects.insert(
            "plots_data/Kanpur_daily_2024.csv".to_string(),
            daily_csv().as_bytes().to_vec(),
        );
        objects.insert(
            "plots_data/Kanpur_annual.csv".to_string(),
            annual_csv().as_bytes().to_vec(),
        );

        let service = service_with(objects);
        let first = service.build_city_bundle("Kanpur").await;
        let second = service.build_city_bundle("Kanpur").await;

        assert_eq!(
            first.air_quality_table().as_fetched().unwrap().raw_csv(),
            second.air_quality_table().as_fetched().unwrap().raw_csv()
        );
        assert_eq!(
            first.annual_table().as_fetched().unwrap().raw_csv(),
            second.annual_table().as_fetched().unwrap().raw_csv()
        );
    }
}
