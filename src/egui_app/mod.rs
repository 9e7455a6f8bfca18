//! egui front end: UI state, the controller that drives predictions, and the
//! renderer.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
