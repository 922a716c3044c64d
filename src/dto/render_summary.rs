use crate::common::*;

use crate::dto::city_data_bundle::*;
use crate::enums::fetch_error::*;

#[doc = "Fetch status of one asset inside a render summary"]
#[derive(Debug, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct AssetStatus {
    pub asset: String,
    pub fetched: bool,
    pub diagnostic: Option<String>,
}

#[doc = r#"
    Per-city record of which assets resolved and which failed, written as JSON
    next to the rendered artifacts. This is what makes a failed fetch visible
    to an operator even though the dashboard itself just shows empty sections.
"#]
#[derive(Debug, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct RenderSummary {
    pub city: String,
    pub generated_at: String,
    pub assets: Vec<AssetStatus>,
}

impl RenderSummary {
    pub fn from_bundle(bundle: &CityDataBundle, generated_at: String) -> Self {
        let assets: Vec<AssetStatus> = vec![
            Self::status("cigarettes_plot", bundle.cigarettes_plot().error()),
            Self::status("air_quality_plot", bundle.air_quality_plot().error()),
            Self::status("annual_plot", bundle.annual_plot().error()),
            Self::status("cigarettes_csv", bundle.cigarettes_table().error()),
            Self::status("air_quality_csv", bundle.air_quality_table().error()),
            Self::status("annual_csv", bundle.annual_table().error()),
        ];

        RenderSummary::new(bundle.city().to_string(), generated_at, assets)
    }

    fn status(asset: &str, error: Option<&FetchError>) -> AssetStatus {
        AssetStatus::new(
            asset.to_string(),
            error.is_none(),
            error.map(|e| e.to_string()),
        )
    }
}
