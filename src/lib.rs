//! mesinyer library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod backend;
pub mod config;
pub mod decision_set;
pub mod dialog_manager;
pub mod emotes;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod roster;
pub mod timer;
pub mod ui;
pub mod validation;

pub use error::{Error, Result};

#[cfg(test)]
mod integration_tests;
