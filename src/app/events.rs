//! Event processing from the session thread

use std::time::Instant;

use super::MesinyerApp;
use crate::decision_set::PendingInvitation;
use crate::logging;
use crate::protocol::SessionEvent;
use crate::ui::dialogs::presets;

impl MesinyerApp {
    /// Drain everything the session sent since the last frame.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.session.event_rx.try_recv() {
            self.process_event(event);
        }
    }

    pub fn process_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::RosterChanged { contacts, groups } => {
                self.contacts = contacts;
                self.groups = groups;
                if let Some(selected) = &self.selected_contact {
                    if !self.contacts.iter().any(|c| &c.account == selected) {
                        self.selected_contact = None;
                    }
                }
            }
            SessionEvent::ContactAddedYou { account, nick } => {
                logging::info(&format!("{} added you", account), Some("session"));
                self.dialogs
                    .add_invitation(PendingInvitation::new(account, nick), &self.session.action_tx);
            }
            SessionEvent::NickChanged(nick) => {
                self.toasts.push(format!("Nick changed to {}", nick), Instant::now());
                self.nick = nick;
            }
            SessionEvent::PersonalMessageChanged(message) => {
                self.personal_message = message;
            }
            SessionEvent::Invited(account) => {
                let name = self
                    .contact(&account)
                    .map(|c| c.display_name().to_string())
                    .unwrap_or_else(|| account.clone());
                self.transcript.push(format!("* {} joined the conversation", name));
                if !self.participants.contains(&account) {
                    self.participants.push(account);
                }
            }
            SessionEvent::Error(message) => {
                logging::warning(&message, Some("session"));
                self.dialogs
                    .show_message(presets::exc_error(&message, &self.log_queue));
            }
        }
    }
}
