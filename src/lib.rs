// Manufacturing KPI dashboard client - layered crate root
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
