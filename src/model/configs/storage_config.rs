use crate::common::*;

#[doc = "Object storage settings: bucket, region and the two folder namespaces"]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct StorageConfig {
    pub bucket_name: String,
    pub region_name: String,
    pub image_folder: String,
    pub csv_folder: String,
}
