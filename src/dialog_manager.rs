//! Dialog management for centralized dialog state and rendering.
//!
//! This module consolidates all dialog state into a single DialogManager,
//! reducing clutter in the main app struct and providing a clean API
//! for opening, rendering, and collecting dialog actions.

use crossbeam_channel::Sender;
use eframe::egui::Context;

use crate::decision_set::PendingInvitation;
use crate::logging::SharedLogQueue;
use crate::protocol::SessionAction;
use crate::ui::dialogs::{
    presets, AboutDialog, AddBuddyDialog, AddContactDialog, ConfirmDialog, DebugLogDialog,
    DialogAction, EmotePicker, EntryDialog, InviteDialog, LoginPreferencesDialog, MessageDialog,
    StyleDialog,
};

/// Manages all application dialogs in one place.
///
/// Uses the Option<Dialog> pattern where None = closed, Some = open.
/// Message dialogs stack, every other kind is one at a time.
#[derive(Default)]
pub struct DialogManager {
    pub messages: Vec<MessageDialog>,
    pub confirm: Option<ConfirmDialog>,
    pub entry: Option<EntryDialog>,
    pub add_contact: Option<AddContactDialog>,
    pub add_buddy: Option<AddBuddyDialog>,
    pub emote_picker: Option<EmotePicker>,
    pub invite: Option<InviteDialog>,
    pub preferences: Option<LoginPreferencesDialog>,
    pub style: Option<StyleDialog>,
    pub about: Option<AboutDialog>,
    pub debug_log: Option<DebugLogDialog>,
}

impl DialogManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_message(&mut self, dialog: MessageDialog) {
        self.messages.push(dialog);
    }

    pub fn show_confirm(&mut self, dialog: ConfirmDialog) {
        self.confirm = Some(dialog);
    }

    pub fn show_entry(&mut self, dialog: EntryDialog) {
        self.entry = Some(dialog);
    }

    pub fn show_add_contact(&mut self, dialog: AddContactDialog) {
        self.add_contact = Some(dialog);
    }

    /// Open the emoticon picker, or close it if it is already showing.
    pub fn toggle_emote_picker(&mut self, columns: usize) {
        self.emote_picker = match self.emote_picker {
            Some(_) => None,
            None => Some(presets::select_emote(columns)),
        };
    }

    pub fn show_invite(&mut self, dialog: InviteDialog) {
        self.invite = Some(dialog);
    }

    pub fn show_preferences(&mut self, dialog: LoginPreferencesDialog) {
        self.preferences = Some(dialog);
    }

    pub fn show_style(&mut self, dialog: StyleDialog) {
        self.style = Some(dialog);
    }

    pub fn show_about(&mut self, dialog: AboutDialog) {
        self.about = Some(dialog);
    }

    pub fn toggle_debug_log(&mut self) {
        self.debug_log = match self.debug_log {
            Some(_) => None,
            None => Some(DebugLogDialog::new()),
        };
    }

    /// Queue an invitation on the open "contact added you" dialog, or open
    /// a new one when none is running. An account already on the open
    /// dialog is not queued twice. Each dialog reports its decisions over
    /// `action_tx` when it finishes.
    pub fn add_invitation(
        &mut self,
        invitation: PendingInvitation,
        action_tx: &Sender<SessionAction>,
    ) {
        if let Some(dialog) = &mut self.add_buddy {
            if !dialog.is_finished()
                && dialog
                    .decisions()
                    .items()
                    .iter()
                    .any(|i| i.account == invitation.account)
            {
                return;
            }
            if dialog.append(invitation.clone()) {
                return;
            }
        }
        self.add_buddy = Some(presets::contact_added_you(vec![invitation], action_tx.clone()));
    }

    /// Number of invitations still waiting for a decision
    pub fn pending_invitations(&self) -> usize {
        self.add_buddy
            .as_ref()
            .filter(|d| !d.is_finished())
            .map_or(0, |d| d.decisions().len())
    }

    /// Finish any running invitation dialog so its decisions are reported.
    pub fn close_invitations(&mut self) {
        if let Some(mut dialog) = self.add_buddy.take() {
            dialog.close();
        }
    }

    /// Render all dialogs and collect their actions.
    pub fn render(&mut self, ctx: &Context, log_queue: &SharedLogQueue) -> Vec<DialogAction> {
        let mut actions: Vec<DialogAction> = Vec::new();

        // Message dialogs - no actions, just close
        self.messages.retain_mut(|dialog| dialog.render(ctx));

        if let Some(dialog) = &mut self.confirm {
            let (action, still_open) = dialog.render(ctx);
            actions.extend(action);
            if !still_open {
                self.confirm = None;
            }
        }

        if let Some(dialog) = &mut self.entry {
            let (action, still_open) = dialog.render(ctx);
            actions.extend(action);
            if !still_open {
                self.entry = None;
            }
        }

        if let Some(dialog) = &mut self.add_contact {
            let (action, still_open) = dialog.render(ctx);
            actions.extend(action);
            if !still_open {
                self.add_contact = None;
            }
        }

        // Decisions leave through the set's completion callback
        if let Some(dialog) = &mut self.add_buddy {
            if !dialog.render(ctx) {
                self.add_buddy = None;
            }
        }

        if let Some(picker) = &mut self.emote_picker {
            let (action, still_open) = picker.render(ctx);
            actions.extend(action);
            if !still_open {
                self.emote_picker = None;
            }
        }

        if let Some(dialog) = &mut self.invite {
            let (action, still_open) = dialog.render(ctx);
            actions.extend(action);
            if !still_open {
                self.invite = None;
            }
        }

        if let Some(dialog) = &mut self.preferences {
            let (action, still_open) = dialog.render(ctx);
            actions.extend(action);
            if !still_open {
                self.preferences = None;
            }
        }

        if let Some(dialog) = &mut self.style {
            let (action, still_open) = dialog.render(ctx);
            actions.extend(action);
            if !still_open {
                self.style = None;
            }
        }

        if let Some(dialog) = &mut self.about {
            if !dialog.render(ctx) {
                self.about = None;
            }
        }

        if let Some(dialog) = &mut self.debug_log {
            if !dialog.render(ctx, log_queue) {
                self.debug_log = None;
            }
        }

        actions
    }
}
