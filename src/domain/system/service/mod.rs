pub mod health_service;
pub mod stats_service;
