mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::s3_repository_impl::*;

mod env_configuration;

mod enums;

mod traits;

mod dto;

mod model;
use model::configs::{
    chart_config::*, dashboard_config::*, storage_config::*, total_config::*,
};

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{chart_service_impl::*, fetch_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* Global logger and initial setup */
    dotenv().ok();
    set_global_logger();

    info!("Pollution monitoring dashboard start!");

    let storage_config: &StorageConfig = get_storage_config_info();
    let dashboard_config: &DashboardConfig = get_dashboard_config_info();
    let chart_config: &ChartConfig = get_chart_config_info();

    /* Object storage connection */
    let s3_repository: S3RepositoryImpl = S3RepositoryImpl::new(storage_config).await;

    /* Dependency injection */
    let fetch_service: FetchServiceImpl<S3RepositoryImpl> = FetchServiceImpl::new(
        Arc::new(s3_repository),
        storage_config.image_folder().to_string(),
        storage_config.csv_folder().to_string(),
        dashboard_config.data_year().to_string(),
    );

    let chart_service: ChartServiceImpl = ChartServiceImpl::new(
        dashboard_config.data_year().to_string(),
        *chart_config.min_date(),
    );

    let main_controller: MainController<FetchServiceImpl<S3RepositoryImpl>, ChartServiceImpl> =
        MainController::new(fetch_service, chart_service);

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });
}
