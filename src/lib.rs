//! Stride - a terminal client for a fitness social feed.
//!
//! The library holds everything but `main`, so integration tests can drive
//! the feed view-model against the mock service and render it into a
//! `TestBackend`.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
