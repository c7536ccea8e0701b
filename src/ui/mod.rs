//! UI rendering modules for the mesinyer client.
//!
//! This module contains all egui-based UI rendering code, organized by component:
//! - `contact_list`: Side panel with the grouped roster
//! - `menu`: Top menu bar
//! - `dialogs`: Dialogs, popups and their presets
//! - `theme`: Colors and styling utilities

pub mod contact_list;
pub mod dialogs;
pub mod menu;
pub mod theme;
