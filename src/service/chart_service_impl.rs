use crate::common::*;

use crate::traits::service_traits::chart_service::*;

use crate::dto::dataset_table::*;

use crate::model::record::{annual_record::*, daily_record::*};

use crate::utils_modules::time_utils::*;

/* Fixed domain constants: PM2.5-to-cigarettes divisor and WHO thresholds */
const CIGARETTES_CONSTANT: f64 = 22.0;
const WHO_STD_ANNUAL: f64 = 5.0;
const WHO_STD_DAILY: f64 = 15.0;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    data_year: String,
    min_date: NaiveDate,
}

impl ChartServiceImpl {
    #[doc = "Dashed horizontal reference line spanning the full plot width"]
    fn horizontal_reference_line(y: f64, color: NamedColor) -> Shape {
        Shape::new()
            .shape_type(ShapeType::Line)
            .x_ref("paper")
            .y_ref("y")
            .x0(0.0)
            .x1(1.0)
            .y0(y)
            .y1(y)
            .line(ShapeLine::new().color(color).width(1.5).dash(DashType::Dash))
    }

    #[doc = "Label pinned to the left end of a reference line"]
    fn reference_annotation(y: f64, text: &str) -> Annotation {
        Annotation::new()
            .x_ref("paper")
            .y_ref("y")
            .x(0.0)
            .y(y)
            .text(text)
            .show_arrow(false)
            .x_anchor(Anchor::Left)
            .font(Font::new().size(12))
    }

    fn horizontal_legend() -> Legend {
        Legend::new()
            .orientation(Orientation::Horizontal)
            .y_anchor(Anchor::Bottom)
            .y(1.02)
            .x_anchor(Anchor::Right)
            .x(1.0)
    }

    #[doc = "Sums the cigarette-equivalent of every row, rounded to one decimal"]
    pub fn annual_cigarette_total(rows: &[DailyRecord]) -> f64 {
        let total: f64 = rows.iter().map(|row| row.pm25 / CIGARETTES_CONSTANT).sum();
        (total * 10.0).round() / 10.0
    }

    #[doc = r#"
        Groups the per-row cigarette-equivalent by the Monday starting each
        ISO week, summing per week. Weeks without rows are absent from the
        result (no zero-fill).
    "#]
    pub fn weekly_cigarette_totals(rows: &[DailyRecord]) -> BTreeMap<NaiveDate, f64> {
        let mut weekly_summary: BTreeMap<NaiveDate, f64> = BTreeMap::new();

        for row in rows {
            *weekly_summary.entry(week_start(row.date)).or_insert(0.0) +=
                row.pm25 / CIGARETTES_CONSTANT;
        }

        weekly_summary
    }
}

impl ChartService for ChartServiceImpl {
    fn create_line_plot(&self, daily_table: &DatasetTable<DailyRecord>, city: &str) -> Option<Plot> {
        let rows: Vec<&DailyRecord> = daily_table
            .rows()
            .iter()
            .filter(|row| row.date >= self.min_date)
            .collect();

        /* The reference lines read the first row; an empty table must not index */
        let first_row: &DailyRecord = match rows.first() {
            Some(row) => row,
            None => {
                warn!(
                    "[ChartServiceImpl->create_line_plot] No daily data for city: {}",
                    city
                );
                return None;
            }
        };

        let num_violate_nat: usize = rows.iter().filter(|row| row.violate_daily_nat).count();
        let num_violate_who: usize = rows.iter().filter(|row| row.violate_daily_who).count();

        let dates: Vec<String> = rows
            .iter()
            .map(|row| row.date.format("%Y-%m-%d").to_string())
            .collect();
        let pm25_values: Vec<f64> = rows.iter().map(|row| row.pm25).collect();
        let max_pm25: f64 = pm25_values.iter().copied().fold(0.0, f64::max);

        let nat_std_daily: f64 = first_row.nat_std_daily;

        let mut plot: Plot = Plot::new();

        plot.add_trace(
            Scatter::new(dates.clone(), pm25_values.clone())
                .mode(Mode::Lines)
                .line(Line::new().color(NamedColor::Black))
                .name("PM2.5 Levels"),
        );

        plot.add_trace(
            Scatter::new(dates, pm25_values)
                .mode(Mode::Markers)
                .marker(Marker::new().color(NamedColor::Black).size(6))
                .name("PM2.5 Points"),
        );

        let title: String = format!(
            "In {}, {} experienced air quality exceeding the national standard for {} days and WHO standards for {} days.",
            self.data_year, city, num_violate_nat, num_violate_who
        );

        let layout: Layout = Layout::new()
            .title(Title::new(&title))
            .x_axis(Axis::new().title(Title::new("Date")))
            .y_axis(
                Axis::new()
                    .title(Title::new("PM2.5 Levels"))
                    .range(vec![0.0, max_pm25 + 10.0]),
            )
            .shapes(vec![
                Self::horizontal_reference_line(nat_std_daily, NamedColor::Blue),
                Self::horizontal_reference_line(WHO_STD_DAILY, NamedColor::Red),
            ])
            .annotations(vec![
                Self::reference_annotation(nat_std_daily, "Nat. Std. - Daily"),
                Self::reference_annotation(WHO_STD_DAILY, "WHO Std. - Daily"),
            ])
            .show_legend(true)
            .legend(Self::horizontal_legend());

        plot.set_layout(layout);
        Some(plot)
    }

    fn create_cigarettes_plot(
        &self,
        daily_table: &DatasetTable<DailyRecord>,
        city: &str,
    ) -> Option<Plot> {
        if daily_table.rows().is_empty() {
            warn!(
                "[ChartServiceImpl->create_cigarettes_plot] No daily data for city: {}",
                city
            );
            return None;
        }

        let annual_total: f64 = Self::annual_cigarette_total(daily_table.rows());
        let weekly_summary: BTreeMap<NaiveDate, f64> =
            Self::weekly_cigarette_totals(daily_table.rows());

        let weeks: Vec<String> = weekly_summary
            .keys()
            .map(|week| week.format("%Y-%m-%d").to_string())
            .collect();
        let cigarettes: Vec<f64> = weekly_summary.values().copied().collect();

        let mut plot: Plot = Plot::new();

        plot.add_trace(
            Bar::new(weeks, cigarettes)
                .name("Cigarettes")
                .marker(Marker::new().color(Rgb::new(228, 26, 28))),
        );

        let title: String = format!(
            "In {}, exposure to PM2.5 in {} has been the equivalent of smoking {:.1} cigarettes",
            city, self.data_year, annual_total
        );

        let layout: Layout = Layout::new()
            .title(Title::new(&title))
            .x_axis(
                Axis::new()
                    .title(Title::new("Week"))
                    .tick_format("%B")
                    .tick_angle(-45.0),
            )
            .y_axis(Axis::new().title(Title::new("Cigarettes")));

        plot.set_layout(layout);
        Some(plot)
    }

    fn create_annual_plot(
        &self,
        annual_table: &DatasetTable<AnnualRecord>,
        city: &str,
    ) -> Option<Plot> {
        let city_rows: Vec<&AnnualRecord> = annual_table
            .rows()
            .iter()
            .filter(|row| row.city == city)
            .collect();

        let first_row: &AnnualRecord = match city_rows.first() {
            Some(row) => row,
            None => {
                warn!("No data available for city: {}", city);
                return None;
            }
        };

        let nat_std_annual: f64 = first_row.nat_std_daily;

        let years: Vec<i32> = city_rows.iter().map(|row| row.year).collect();
        let pm25_values: Vec<f64> = city_rows.iter().map(|row| row.pm25).collect();

        let min_year: i32 = years.iter().copied().min().unwrap_or(first_row.year);
        let max_year: i32 = years.iter().copied().max().unwrap_or(first_row.year);

        /* One tick every 5 years, starting at the earliest year present */
        let tick_years: Vec<f64> = (min_year..=max_year)
            .step_by(5)
            .map(|year| year as f64)
            .collect();

        let mut plot: Plot = Plot::new();

        plot.add_trace(
            Bar::new(years, pm25_values)
                .name("PM2.5")
                .marker(Marker::new().color(Rgb::new(255, 127, 0))),
        );

        let title: String = format!("Annual Historical Data for {}", city);

        let layout: Layout = Layout::new()
            .title(Title::new(&title))
            .x_axis(Axis::new().title(Title::new("Year")).tick_values(tick_years))
            .y_axis(Axis::new().title(Title::new("PM2.5")))
            .shapes(vec![
                Self::horizontal_reference_line(nat_std_annual, NamedColor::Blue),
                Self::horizontal_reference_line(WHO_STD_ANNUAL, NamedColor::Red),
            ])
            .annotations(vec![
                Self::reference_annotation(nat_std_annual, "Nat. Std. - Annual"),
                Self::reference_annotation(WHO_STD_ANNUAL, "WHO Std. - Annual"),
            ])
            .show_legend(true)
            .legend(Self::horizontal_legend());

        plot.set_layout(layout);
        Some(plot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_service() -> ChartServiceImpl {
        ChartServiceImpl::new(
            "2024".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    fn daily_row(date: NaiveDate, pm25: f64, violate_nat: bool, violate_who: bool) -> DailyRecord {
        DailyRecord::new(date, pm25, 35.0, 15.0, violate_nat, violate_who)
    }

    fn daily_table(rows: Vec<DailyRecord>) -> DatasetTable<DailyRecord> {
        DatasetTable::new(String::new(), rows)
    }

    #[test]
    fn one_threshold_pm25_day_equals_one_cigarette() {
        let date: NaiveDate = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let rows: Vec<DailyRecord> = vec![daily_row(date, 22.0, false, true)];

        assert_eq!(ChartServiceImpl::annual_cigarette_total(&rows), 1.0);

        let weekly: BTreeMap<NaiveDate, f64> = ChartServiceImpl::weekly_cigarette_totals(&rows);
        assert_eq!(weekly.len(), 1);
        /* 2024-03-05 is a Tuesday; its week starts on Monday 2024-03-04 */
        let monday: NaiveDate = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(weekly[&monday], 1.0);
    }

    #[test]
    fn weeks_without_rows_are_absent_from_the_weekly_summary() {
        let first_week: NaiveDate = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let third_week: NaiveDate = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let rows: Vec<DailyRecord> = vec![
            daily_row(first_week, 11.0, false, false),
            daily_row(third_week, 33.0, false, true),
        ];

        let weekly: BTreeMap<NaiveDate, f64> = ChartServiceImpl::weekly_cigarette_totals(&rows);
        assert_eq!(weekly.len(), 2);
    }

    #[test]
    fn line_plot_handles_an_empty_filtered_table() {
        let service: ChartServiceImpl = chart_service();

        assert!(service.create_line_plot(&daily_table(Vec::new()), "Kanpur").is_none());

        /* Rows strictly before the configured minimum date are filtered out */
        let old_date: NaiveDate = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let stale: DatasetTable<DailyRecord> =
            daily_table(vec![daily_row(old_date, 50.0, true, true)]);
        assert!(service.create_line_plot(&stale, "Kanpur").is_none());
    }

    #[test]
    fn line_plot_is_built_for_populated_tables() {
        let service: ChartServiceImpl = chart_service();
        let date: NaiveDate = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let table: DatasetTable<DailyRecord> =
            daily_table(vec![daily_row(date, 42.0, true, true)]);

        assert!(service.create_line_plot(&table, "Kanpur").is_some());
    }

    #[test]
    fn cigarettes_plot_requires_at_least_one_row() {
        let service: ChartServiceImpl = chart_service();
        assert!(service
            .create_cigarettes_plot(&daily_table(Vec::new()), "Kigali")
            .is_none());
    }

    #[test]
    fn annual_plot_returns_none_for_an_absent_city() {
        let service: ChartServiceImpl = chart_service();
        let rows: Vec<AnnualRecord> = vec![AnnualRecord::new("Kanpur".to_string(), 2020, 80.0, 40.0)];
        let table: DatasetTable<AnnualRecord> = DatasetTable::new(String::new(), rows);

        assert!(service.create_annual_plot(&table, "Kolkata").is_none());
        assert!(service.create_annual_plot(&table, "Kanpur").is_some());
    }
}
