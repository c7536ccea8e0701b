//! Single-line entry dialogs (group names, nick, personal message, alias).

use eframe::egui;

use super::message::next_window_id;
use super::{DialogAction, EntryPurpose, Response};
use crate::validation::{validate_account, validate_display_text, validate_group_name};

/// Self-contained entry dialog state.
pub struct EntryDialog {
    pub title: String,
    pub prompt: String,
    pub purpose: EntryPurpose,
    pub input: String,
    /// Offer a Clear button (used to remove an alias)
    pub clear_button: bool,
    error: Option<String>,
    id: egui::Id,
}

impl EntryDialog {
    pub fn new(title: &str, prompt: &str, purpose: EntryPurpose, initial: &str) -> Self {
        Self {
            title: title.to_string(),
            prompt: prompt.to_string(),
            purpose,
            input: initial.to_string(),
            clear_button: false,
            error: None,
            id: next_window_id("entry_dialog"),
        }
    }

    pub fn with_clear_button(mut self) -> Self {
        self.clear_button = true;
        self
    }

    /// Validate the current input for this dialog's purpose.
    pub fn validate(&self) -> Result<(), String> {
        let text = self.input.trim();
        match &self.purpose {
            EntryPurpose::AddGroup | EntryPurpose::RenameGroup { .. } => validate_group_name(text),
            EntryPurpose::SetNick { .. } => {
                if text.is_empty() {
                    return Err("Nick cannot be empty".to_string());
                }
                validate_display_text(text)
            }
            EntryPurpose::SetPersonalMessage { .. } | EntryPurpose::SetAlias { .. } => {
                validate_display_text(text)
            }
            EntryPurpose::SimulateInvitation => validate_account(text),
        }
    }

    /// Try to accept the input. On failure the error is kept for display
    /// and no action is produced.
    pub fn accept(&mut self) -> Option<DialogAction> {
        match self.validate() {
            Ok(()) => {
                self.error = None;
                Some(DialogAction::Entry {
                    purpose: self.purpose.clone(),
                    response: Response::Accept,
                    text: self.input.trim().to_string(),
                })
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }

    pub fn clear(&self) -> DialogAction {
        DialogAction::Entry {
            purpose: self.purpose.clone(),
            response: Response::Clear,
            text: String::new(),
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Render the dialog.
    /// Returns an action on Accept or Clear; the second value is whether
    /// the dialog is still open.
    pub fn render(&mut self, ctx: &egui::Context) -> (Option<DialogAction>, bool) {
        let mut action: Option<DialogAction> = None;
        let mut should_close = false;
        let mut window_open = true;

        egui::Window::new(self.title.clone())
            .id(self.id)
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&self.prompt);

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.input).desired_width(260.0),
                );
                response.request_focus();

                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::from_rgb(231, 76, 60), err);
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        action = self.accept();
                        should_close = action.is_some();
                    }
                    if self.clear_button && ui.button("Clear").clicked() {
                        action = Some(self.clear());
                        should_close = true;
                    }
                    if ui.button("Cancel").clicked() {
                        should_close = true;
                    }
                });

                if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    action = self.accept();
                    should_close = action.is_some();
                }

                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    should_close = true;
                }
            });

        (action, window_open && !should_close)
    }
}
