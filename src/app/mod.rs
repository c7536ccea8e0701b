//! Application module structure for MesinyerApp
//!
//! This module organizes the main application into focused submodules:
//! - `core`: MesinyerApp struct, initialization and shutdown
//! - `events`: Event processing from the session thread
//! - `update`: Main update loop and global shortcuts
//! - `dialogs`: Dialog rendering and action handling
//! - `panels`: Menu bar, status bar, contact list and conversation panel

pub mod core;
pub mod dialogs;
pub mod events;
pub mod panels;
pub mod update;

// Re-export MesinyerApp for public API
pub use self::core::MesinyerApp;
