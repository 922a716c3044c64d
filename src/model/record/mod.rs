pub mod annual_record;
pub mod daily_record;
