//! Imports/exports trade dashboard.
//!
//! Loads a trade dataset, draws a seeded sample, and renders filterable
//! previews, descriptive statistics and charts across a flat page menu.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
pub mod view;
