//! Dialog action types - dialogs return actions instead of mutating state directly.
//!
//! Whatever the old callback API threaded through as extra positional
//! arguments is carried here as named purposes, so the app knows what a
//! response refers to.

use crate::config::{MessageStyle, ProxySettings};

/// Which button (or window close) ended a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Accept,
    Cancel,
    Close,
    Yes,
    No,
    Clear,
}

/// What a yes/no style confirmation is asking about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmPurpose {
    RemoveContact(String),
    RemoveGroup(String),
    Quit,
}

/// What a single-line entry dialog edits, with the value it started from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryPurpose {
    AddGroup,
    SetNick { old: String },
    SetPersonalMessage { old: String },
    RenameGroup { old: String },
    SetAlias { account: String, old: Option<String> },
    SimulateInvitation,
}

/// Values accepted in the login preferences dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginPreferences {
    pub session: String,
    pub use_http: bool,
    pub proxy: ProxySettings,
}

/// Actions that dialogs can return to the main application.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogAction {
    Confirm {
        purpose: ConfirmPurpose,
        response: Response,
    },
    /// Accept or Clear on an entry dialog
    Entry {
        purpose: EntryPurpose,
        response: Response,
        text: String,
    },
    AddContact {
        account: String,
        group: Option<String>,
    },
    EmoteSelected(String),
    Invite(String),
    LoginPreferences(LoginPreferences),
    StyleChanged(MessageStyle),
    /// Ask the app to show an error dialog
    ShowError(String),
}
