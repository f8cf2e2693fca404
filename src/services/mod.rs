pub mod analysis_service;
pub mod auth_service;
pub mod import_service;
pub mod order_service;
