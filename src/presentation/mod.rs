// Presentation layer - Fetch-cycle state, controller, and rendering
pub mod controller;
pub mod state;
pub mod view;
