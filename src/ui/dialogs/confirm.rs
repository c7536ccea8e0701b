//! Confirmation dialogs: yes/no, yes/no/cancel and accept/cancel.

use eframe::egui;

use super::message::next_window_id;
use super::{ConfirmPurpose, DialogAction, Response};

/// Button set offered by a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmButtons {
    YesNo,
    YesNoCancel,
    AcceptCancel,
}

impl ConfirmButtons {
    /// Buttons in display order with the response each one produces
    pub fn buttons(&self) -> &'static [(&'static str, Response)] {
        match self {
            ConfirmButtons::YesNo => &[("Yes", Response::Yes), ("No", Response::No)],
            ConfirmButtons::YesNoCancel => &[
                ("Yes", Response::Yes),
                ("No", Response::No),
                ("Cancel", Response::Cancel),
            ],
            ConfirmButtons::AcceptCancel => {
                &[("OK", Response::Accept), ("Cancel", Response::Cancel)]
            }
        }
    }
}

/// A question with a fixed set of answer buttons.
pub struct ConfirmDialog {
    pub message: String,
    pub buttons: ConfirmButtons,
    pub purpose: ConfirmPurpose,
    id: egui::Id,
}

impl ConfirmDialog {
    pub fn new(message: &str, buttons: ConfirmButtons, purpose: ConfirmPurpose) -> Self {
        Self {
            message: message.to_string(),
            buttons,
            purpose,
            id: next_window_id("confirm_dialog"),
        }
    }

    fn action(&self, response: Response) -> DialogAction {
        DialogAction::Confirm {
            purpose: self.purpose.clone(),
            response,
        }
    }

    /// Render the dialog. Every way of closing it yields an action;
    /// closing the window reports `Response::Close`.
    pub fn render(&mut self, ctx: &egui::Context) -> (Option<DialogAction>, bool) {
        let mut response: Option<Response> = None;
        let mut window_open = true;

        egui::Window::new("Confirm")
            .id(self.id)
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("❓")
                            .text_style(egui::TextStyle::Name("dialog_icon".into())),
                    );
                    ui.label(&self.message);
                });

                ui.add_space(8.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // right-to-left, so add in reverse to keep display order
                    for (label, button_response) in self.buttons.buttons().iter().rev() {
                        if ui.button(*label).clicked() {
                            response = Some(*button_response);
                        }
                    }
                });

                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    response = Some(Response::Close);
                }
            });

        if !window_open && response.is_none() {
            response = Some(Response::Close);
        }

        match response {
            Some(response) => (Some(self.action(response)), false),
            None => (None, true),
        }
    }
}
