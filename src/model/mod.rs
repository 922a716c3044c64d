pub mod configs;
pub mod record;
