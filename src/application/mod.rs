// Application layer - Use cases and the repository seam
pub mod dashboard_service;
pub mod equipment_service;
pub mod metrics_repository;
