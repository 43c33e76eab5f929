pub mod association;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod farm_service;
pub use farm_service::FarmService;
pub mod producer_service;
pub use producer_service::ProducerService;
