//! Chama - a terminal client for chama savings groups
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cancel;
pub mod cli;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod screens;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
