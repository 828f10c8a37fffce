// Domain layer - Pure data models and display math
pub mod chart;
pub mod dashboard;
pub mod downtime;
pub mod equipment;
pub mod kpi;
pub mod sensor;
