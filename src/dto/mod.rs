pub mod city_data_bundle;
pub mod dataset_table;
pub mod fetch_outcome;
pub mod render_summary;
