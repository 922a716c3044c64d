pub mod asset_kind;
pub mod fetch_error;
