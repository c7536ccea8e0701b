//! Core MesinyerApp struct definition and initialization

use std::path::PathBuf;

use crate::backend::SessionHandle;
use crate::config::{save_settings_to, settings_path, Settings};
use crate::dialog_manager::DialogManager;
use crate::error::Result;
use crate::logging::SharedLogQueue;
use crate::protocol::{Contact, SessionAction};
use crate::roster::Roster;
use crate::ui;
use crate::ui::dialogs::StatusToasts;

/// Lines kept in the conversation transcript
pub const MAX_TRANSCRIPT: usize = 500;

pub struct MesinyerApp {
    // Persisted settings, written back on exit
    pub settings: Settings,
    pub(super) settings_path: Option<PathBuf>,

    // Recent log records for the debug window and error details
    pub log_queue: SharedLogQueue,

    // Session thread and its channels
    pub session: SessionHandle,

    // Roster mirror, replaced on every RosterChanged
    pub contacts: Vec<Contact>,
    pub groups: Vec<String>,
    pub nick: String,
    pub personal_message: String,
    pub selected_contact: Option<String>,

    // Conversation
    pub participants: Vec<String>,
    pub transcript: Vec<String>,
    pub compose: String,

    pub toasts: StatusToasts,

    // Dialogs - managed centrally by DialogManager
    pub dialogs: DialogManager,

    pub(super) quit_requested: bool,
}

/// Nick to start with: the local part of the account, or "me".
pub fn default_nick(account: &str) -> String {
    match account.split('@').next() {
        Some(local) if !local.trim().is_empty() => local.trim().to_string(),
        _ => "me".to_string(),
    }
}

impl MesinyerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        log_queue: SharedLogQueue,
    ) -> Result<Self> {
        ui::theme::apply_theme(&cc.egui_ctx, &settings.theme);

        let session = SessionHandle::spawn(Roster::new(default_nick(&settings.account)))?;
        let mut app = Self::with_session(settings, log_queue, session);
        app.settings_path = settings_path();
        Ok(app)
    }

    /// Build the app around an already running session. Settings are not
    /// written back unless a settings path is set.
    pub fn with_session(
        settings: Settings,
        log_queue: SharedLogQueue,
        session: SessionHandle,
    ) -> Self {
        let nick = default_nick(&settings.account);
        Self {
            settings,
            settings_path: None,
            log_queue,
            session,
            contacts: Vec::new(),
            groups: Vec::new(),
            nick,
            personal_message: String::new(),
            selected_contact: None,
            participants: Vec::new(),
            transcript: Vec::new(),
            compose: String::new(),
            toasts: StatusToasts::default(),
            dialogs: DialogManager::new(),
            quit_requested: false,
        }
    }

    pub(super) fn send(&self, action: SessionAction) {
        let _ = self.session.action_tx.send(action);
    }

    pub fn contact(&self, account: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.account == account)
    }

    /// Append the composed text to the transcript as our own line.
    pub(super) fn send_compose(&mut self) {
        let text = self.compose.trim();
        if text.is_empty() {
            return;
        }
        if self.participants.is_empty() {
            self.toasts.push("Invite someone first", std::time::Instant::now());
            return;
        }

        self.transcript.push(format!("{}: {}", self.nick, text));
        if self.transcript.len() > MAX_TRANSCRIPT {
            let excess = self.transcript.len() - MAX_TRANSCRIPT;
            self.transcript.drain(..excess);
        }
        self.compose.clear();
    }
}

impl Drop for MesinyerApp {
    fn drop(&mut self) {
        // Report undecided invitations before the session shuts down
        self.dialogs.close_invitations();

        if let Some(path) = &self.settings_path {
            if let Err(e) = save_settings_to(path, &self.settings) {
                tracing::error!("Failed to save settings: {}", e);
            }
        }
    }
}
