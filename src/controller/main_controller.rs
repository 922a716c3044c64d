use crate::common::*;

use crate::dto::{city_data_bundle::*, render_summary::*};

use crate::enums::asset_kind::*;

use crate::model::configs::total_config::*;

use crate::traits::service_traits::{chart_service::*, fetch_service::*};

use crate::utils_modules::{io_utils::*, time_utils::*};

#[derive(Debug, new)]
pub struct MainController<F: FetchService, C: ChartService> {
    fetch_service: F,
    chart_service: C,
}

impl<F: FetchService, C: ChartService> MainController<F, C> {
    #[doc = r#"
        Runs one render cycle per configured city:

        1. Fetch the six assets of the city into a bundle
        2. Build the three interactive charts from the tabular datasets
        3. Write all artifacts under `{output_path}/{city}/`: chart HTML,
           static plot images, CSV downloads and a render summary

        A failing city is logged and skipped; the run continues with the next
        one.

        # Returns
        * `anyhow::Result<()>` - Ok when the run finished (individual city
          failures do not fail the run)
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        let dashboard_config = get_dashboard_config_info();
        let output_root: &Path = Path::new(dashboard_config.output_path());

        for city in dashboard_config.cities() {
            if let Err(e) = self.render_city_dashboard(city, output_root).await {
                error!(
                    "[MainController->main_task] Render cycle failed for city '{}': {:?}",
                    city, e
                );
                continue;
            }
        }

        info!(
            "Dashboard generation finished for {} cities",
            dashboard_config.cities().len()
        );

        Ok(())
    }

    async fn render_city_dashboard(&self, city: &str, output_root: &Path) -> anyhow::Result<()> {
        info!("Building data bundle for city: {}", city);

        let bundle: CityDataBundle = self.fetch_service.build_city_bundle(city).await;
        let city_dir: PathBuf = output_root.join(city);

        self.write_interactive_charts(&bundle, city, &city_dir)?;
        self.write_static_plots(&bundle, city, &city_dir)?;
        self.write_csv_downloads(&bundle, city, &city_dir)?;
        self.write_render_summary(&bundle, &city_dir)?;

        Ok(())
    }

    #[doc = "Builds the three interactive charts and writes them as standalone HTML"]
    fn write_interactive_charts(
        &self,
        bundle: &CityDataBundle,
        city: &str,
        city_dir: &Path,
    ) -> anyhow::Result<()> {
        /* Both the daily line plot and the cigarettes plot read the daily dataset */
        match bundle.air_quality_table().as_fetched() {
            Some(daily_table) => {
                if let Some(plot) = self.chart_service.create_line_plot(daily_table, city) {
                    write_artifact_file(
                        city_dir,
                        &format!("{}_daily_interactive.html", city),
                        plot.to_html().as_bytes(),
                    )?;
                }

                if let Some(plot) = self.chart_service.create_cigarettes_plot(daily_table, city) {
                    write_artifact_file(
                        city_dir,
                        &format!("{}_cigarettes_interactive.html", city),
                        plot.to_html().as_bytes(),
                    )?;
                }
            }
            None => {
                warn!(
                    "[MainController->write_interactive_charts] Daily dataset unavailable for '{}'; skipping daily charts",
                    city
                );
            }
        }

        match bundle.annual_table().as_fetched() {
            Some(annual_table) => {
                if let Some(plot) = self.chart_service.create_annual_plot(annual_table, city) {
                    write_artifact_file(
                        city_dir,
                        &format!("{}_annual_interactive.html", city),
                        plot.to_html().as_bytes(),
                    )?;
                }
            }
            None => {
                warn!(
                    "[MainController->write_interactive_charts] Annual dataset unavailable for '{}'; skipping annual chart",
                    city
                );
            }
        }

        Ok(())
    }

    #[doc = "Re-encodes the fetched precomputed plot images as PNG files"]
    fn write_static_plots(
        &self,
        bundle: &CityDataBundle,
        city: &str,
        city_dir: &Path,
    ) -> anyhow::Result<()> {
        let static_plots: [(AssetKind, Option<&DynamicImage>); 3] = [
            (AssetKind::AirQualityPlot, bundle.air_quality_plot().as_fetched()),
            (AssetKind::CigarettesPlot, bundle.cigarettes_plot().as_fetched()),
            (AssetKind::AnnualPlot, bundle.annual_plot().as_fetched()),
        ];

        for (asset_kind, decoded_image) in static_plots {
            let image: &DynamicImage = match decoded_image {
                Some(image) => image,
                None => {
                    warn!(
                        "[MainController->write_static_plots] {} plot unavailable for '{}'",
                        asset_kind.download_label(),
                        city
                    );
                    continue;
                }
            };

            let mut buffer: Vec<u8> = Vec::new();
            image
                .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
                .map_err(|e| {
                    anyhow!(
                        "[MainController->write_static_plots] Failed to encode {} plot for '{}': {}",
                        asset_kind.download_label(),
                        city,
                        e
                    )
                })?;

            write_artifact_file(
                city_dir,
                &format!("{}_{}_plot.png", city, asset_kind.download_label()),
                &buffer,
            )?;
        }

        Ok(())
    }

    #[doc = "Writes the raw CSV datasets as downloadable files named `{city}_{label}_data_{date}.csv`"]
    fn write_csv_downloads(
        &self,
        bundle: &CityDataBundle,
        city: &str,
        city_dir: &Path,
    ) -> anyhow::Result<()> {
        let today: String = get_current_date_str();

        let downloads: [(AssetKind, Option<&String>); 3] = [
            (
                AssetKind::AirQualityCsv,
                bundle.air_quality_table().as_fetched().map(|t| t.raw_csv()),
            ),
            (
                AssetKind::CigarettesCsv,
                bundle.cigarettes_table().as_fetched().map(|t| t.raw_csv()),
            ),
            (
                AssetKind::AnnualCsv,
                bundle.annual_table().as_fetched().map(|t| t.raw_csv()),
            ),
        ];

        for (asset_kind, raw_csv) in downloads {
            let content: &String = match raw_csv {
                Some(content) => content,
                None => {
                    warn!(
                        "[MainController->write_csv_downloads] {} dataset unavailable for '{}'",
                        asset_kind.download_label(),
                        city
                    );
                    continue;
                }
            };

            write_artifact_file(
                city_dir,
                &format!("{}_{}_data_{}.csv", city, asset_kind.download_label(), today),
                content.as_bytes(),
            )?;
        }

        Ok(())
    }

    #[doc = "Writes the per-city summary of fetched and failed assets as JSON"]
    fn write_render_summary(&self, bundle: &CityDataBundle, city_dir: &Path) -> anyhow::Result<()> {
        let summary: RenderSummary = RenderSummary::from_bundle(bundle, get_current_date_str());

        let summary_json: Vec<u8> = serde_json::to_vec_pretty(&summary).map_err(|e| {
            anyhow!(
                "[MainController->write_render_summary] Failed to serialize summary for '{}': {}",
                summary.city(),
                e
            )
        })?;

        write_artifact_file(
            city_dir,
            &format!("{}_summary.json", summary.city()),
            &summary_json,
        )?;

        Ok(())
    }
}
