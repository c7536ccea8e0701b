//! Modal dialogs and windows - self-contained dialog components.
//!
//! Each dialog owns its editing state and returns `DialogAction`s
//! instead of mutating external state directly.
//!
//! # Architecture
//!
//! Dialogs are stored in the [`DialogManager`](crate::dialog_manager::DialogManager):
//! - `None` = dialog is closed
//! - `Some(dialog)` = dialog is open with its state
//!
//! `render()` returns the action (if any) plus whether the dialog is still
//! open. [`presets`] builds the common configurations.

mod about;
mod actions;
mod add_buddy;
mod add_contact;
mod confirm;
mod debug_log;
mod emotes;
mod entry;
mod invite;
mod message;
mod preferences;
pub mod presets;
mod status_toasts;
mod style;

// Re-export dialog types and actions
pub use about::{AboutDialog, AboutInfo};
pub use actions::{ConfirmPurpose, DialogAction, EntryPurpose, LoginPreferences, Response};
pub use add_buddy::AddBuddyDialog;
pub use add_contact::AddContactDialog;
pub use confirm::{ConfirmButtons, ConfirmDialog};
pub use debug_log::DebugLogDialog;
pub use emotes::EmotePicker;
pub use entry::EntryDialog;
pub use invite::InviteDialog;
pub use message::{MessageDialog, MessageKind};
pub use preferences::LoginPreferencesDialog;
pub use status_toasts::{StatusToasts, TOAST_LIFETIME};
pub use style::{StyleDialog, StyleMode, MAX_FONT_SIZE, MIN_FONT_SIZE};
