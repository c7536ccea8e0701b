//! Menu bar, status bar, contact list and conversation panel rendering

use eframe::egui;

use super::MesinyerApp;
use crate::emotes::find_by_shortcut;
use crate::ui;
use crate::ui::menu::MenuAction;

/// Replace known emoticon shortcuts in a line with their glyphs.
pub fn render_emotes(line: &str) -> String {
    line.split(' ')
        .map(|word| find_by_shortcut(word).map_or(word, |e| e.glyph))
        .collect::<Vec<_>>()
        .join(" ")
}

impl MesinyerApp {
    /// Render the menu bar at the top of the window
    pub(super) fn render_menu_bar(&mut self, ctx: &egui::Context) {
        let mut requested: Option<MenuAction> = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            requested = ui::menu::render_menu_bar(ui, &self.settings.theme);
        });
        if let Some(action) = requested {
            self.handle_menu_action(ctx, action);
        }
    }

    /// Nick and personal message; clicking either opens its editor.
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let mut open: Option<MenuAction> = None;
        egui::TopBottomPanel::top("status_bar")
            .frame(
                egui::Frame::new()
                    .inner_margin(egui::Margin::symmetric(12, 6))
                    .fill(ctx.style().visuals.faint_bg_color),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let nick = egui::RichText::new(&self.nick).strong();
                    if ui
                        .add(egui::Label::new(nick).sense(egui::Sense::click()))
                        .on_hover_text("Click to change your nick")
                        .clicked()
                    {
                        open = Some(MenuAction::SetNick);
                    }
                    let message = if self.personal_message.is_empty() {
                        egui::RichText::new("<Click here to set your personal message>")
                            .weak()
                            .italics()
                    } else {
                        egui::RichText::new(&self.personal_message).italics()
                    };
                    if ui
                        .add(egui::Label::new(message).sense(egui::Sense::click()))
                        .clicked()
                    {
                        open = Some(MenuAction::SetPersonalMessage);
                    }

                    let pending = self.dialogs.pending_invitations();
                    if pending > 0 {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(format!("{} pending invitation(s)", pending));
                        });
                    }
                });
            });
        if let Some(action) = open {
            self.handle_menu_action(ctx, action);
        }
    }

    pub(super) fn render_contacts(&mut self, ctx: &egui::Context) {
        if let Some(action) = ui::contact_list::render_contact_list(
            ctx,
            &self.contacts,
            &self.groups,
            &mut self.selected_contact,
        ) {
            self.handle_contact_action(action);
        }
    }

    /// Bottom compose box plus the conversation transcript
    pub(super) fn render_conversation(&mut self, ctx: &egui::Context) {
        let mut emotes_clicked = false;
        let mut send = false;

        egui::TopBottomPanel::bottom("compose_panel")
            .frame(egui::Frame::new().inner_margin(egui::Margin::symmetric(12, 8)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("🙂").on_hover_text("Emoticons").clicked() {
                        emotes_clicked = true;
                    }
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.compose)
                            .hint_text("Type a message")
                            .desired_width(ui.available_width() - 60.0),
                    );
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        send = true;
                        response.request_focus();
                    }
                    if ui.button("Send").clicked() {
                        send = true;
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.participants.is_empty() {
                ui.weak("No conversation. Invite a contact to start one.");
            } else {
                let names: Vec<&str> = self
                    .participants
                    .iter()
                    .map(|account| {
                        self.contacts
                            .iter()
                            .find(|c| &c.account == account)
                            .map_or(account.as_str(), |c| c.display_name())
                    })
                    .collect();
                let title = format!("Conversation with {}", names.join(", "));
                ui.label(egui::RichText::new(title).strong());
            }
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in &self.transcript {
                        let text = render_emotes(line);
                        ui.label(ui::theme::styled_text(&text, &self.settings.message_style));
                    }
                });
        });

        if emotes_clicked {
            self.dialogs.toggle_emote_picker(self.settings.emote_columns);
        }
        if send {
            self.send_compose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_emotes() {
        assert_eq!(render_emotes("me: hi :) (Y)"), "me: hi 🙂 👍");
        assert_eq!(render_emotes("no shortcuts here"), "no shortcuts here");
    }
}
