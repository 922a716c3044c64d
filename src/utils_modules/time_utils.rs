use crate::common::*;

#[doc = "Returns today's date in the local timezone as a `YYYY-MM-DD` string"]
pub fn get_current_date_str() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[doc = "Returns the Monday starting the ISO week that contains the given date"]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - chrono::Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_start_maps_every_weekday_to_its_monday() {
        let monday: NaiveDate = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        /* 2024-01-01 is a Monday; the whole week collapses onto it */
        for offset in 0..7 {
            let day: NaiveDate = monday + chrono::Duration::days(offset);
            assert_eq!(week_start(day), monday);
        }

        let next_monday: NaiveDate = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(week_start(next_monday), next_monday);
    }
}
