#[doc = "Decode path of a storage object, fixed at key-construction time"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Csv,
    Image,
}

#[doc = r#"
    The six fixed asset categories stored per city: three precomputed plot
    images and three CSV datasets. The variant decides both the storage key
    and the decode path, so the fetch layer never has to sniff file suffixes.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    CigarettesPlot,
    AirQualityPlot,
    AnnualPlot,
    CigarettesCsv,
    AirQualityCsv,
    AnnualCsv,
}

impl AssetKind {
    #[doc = "Whether this asset decodes as a delimited table or as an image"]
    pub fn content_kind(&self) -> ContentKind {
        match self {
            AssetKind::CigarettesPlot | AssetKind::AirQualityPlot | AssetKind::AnnualPlot => {
                ContentKind::Image
            }
            AssetKind::CigarettesCsv | AssetKind::AirQualityCsv | AssetKind::AnnualCsv => {
                ContentKind::Csv
            }
        }
    }

    #[doc = r#"
        Builds the deterministic storage key for this asset.

        The naming convention is fixed by the upstream pipeline that uploads
        the objects; the annual dataset carries no year token. City membership
        is not validated here - an unknown city simply yields a key that will
        not resolve.

        # Arguments
        * `image_folder` - Folder namespace for plot images
        * `csv_folder` - Folder namespace for CSV datasets
        * `city` - City identifier
        * `year` - Year token, e.g. "2024"
    "#]
    pub fn storage_key(&self, image_folder: &str, csv_folder: &str, city: &str, year: &str) -> String {
        match self {
            AssetKind::CigarettesPlot => {
                format!("{}/{}_cigarettes_{}.png", image_folder, city, year)
            }
            AssetKind::AirQualityPlot => {
                format!("{}/{}_air_quality_{}.png", image_folder, city, year)
            }
            AssetKind::AnnualPlot => format!("{}/{}_annual_{}.png", image_folder, city, year),
            AssetKind::CigarettesCsv => {
                format!("{}/{}_cigarettes_{}.csv", csv_folder, city, year)
            }
            AssetKind::AirQualityCsv => format!("{}/{}_daily_{}.csv", csv_folder, city, year),
            AssetKind::AnnualCsv => format!("{}/{}_annual.csv", csv_folder, city),
        }
    }

    #[doc = "Dataset label used in download file names: `{city}_{label}_data_{date}.csv`"]
    pub fn download_label(&self) -> &'static str {
        match self {
            AssetKind::CigarettesPlot | AssetKind::CigarettesCsv => "cigarettes",
            AssetKind::AirQualityPlot | AssetKind::AirQualityCsv => "daily",
            AssetKind::AnnualPlot | AssetKind::AnnualCsv => "annual",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_follow_the_naming_convention() {
        assert_eq!(
            AssetKind::AirQualityCsv.storage_key("plots", "plots_data", "Kanpur", "2024"),
            "plots_data/Kanpur_daily_2024.csv"
        );
        assert_eq!(
            AssetKind::CigarettesPlot.storage_key("plots", "plots_data", "Kigali", "2024"),
            "plots/Kigali_cigarettes_2024.png"
        );
        /* The annual dataset carries no year token */
        assert_eq!(
            AssetKind::AnnualCsv.storage_key("plots", "plots_data", "Chiang Mai", "2024"),
            "plots_data/Chiang Mai_annual.csv"
        );
    }

    #[test]
    fn storage_keys_are_deterministic() {
        let first: String =
            AssetKind::AnnualPlot.storage_key("plots", "plots_data", "Kolkata", "2024");
        let second: String =
            AssetKind::AnnualPlot.storage_key("plots", "plots_data", "Kolkata", "2024");
        assert_eq!(first, second);
    }

    #[test]
    fn content_kind_matches_the_asset_family() {
        assert_eq!(AssetKind::AirQualityPlot.content_kind(), ContentKind::Image);
        assert_eq!(AssetKind::AirQualityCsv.content_kind(), ContentKind::Csv);
    }
}
