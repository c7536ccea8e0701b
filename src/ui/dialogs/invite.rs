//! Invite dialog - pick a contact to invite into the conversation.

use eframe::egui;

use super::message::next_window_id;
use super::DialogAction;
use crate::protocol::Contact;

/// Self-contained invite dialog state.
pub struct InviteDialog {
    pub contacts: Vec<Contact>,
    pub filter: String,
    pub selected: Option<String>,
    id: egui::Id,
}

impl InviteDialog {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            filter: String::new(),
            selected: None,
            id: next_window_id("invite_dialog"),
        }
    }

    /// Contacts whose display name or account contains the filter text,
    /// case-insensitively.
    pub fn filtered(&self) -> Vec<&Contact> {
        let needle = self.filter.trim().to_lowercase();
        self.contacts
            .iter()
            .filter(|c| {
                needle.is_empty()
                    || c.account.to_lowercase().contains(&needle)
                    || c.display_name().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Invite the selected contact, or ask for an error dialog when nothing
    /// is selected.
    pub fn accept(&self) -> DialogAction {
        match &self.selected {
            Some(account) => DialogAction::Invite(account.clone()),
            None => DialogAction::ShowError("No contact selected".to_string()),
        }
    }

    /// Render the invite dialog.
    /// The second return value indicates if the dialog is still open; it
    /// stays open when Add is pressed without a selection.
    pub fn render(&mut self, ctx: &egui::Context) -> (Option<DialogAction>, bool) {
        let mut action: Option<DialogAction> = None;
        let mut should_close = false;
        let mut window_open = true;

        egui::Window::new("Invite")
            .id(self.id)
            .open(&mut window_open)
            .collapsible(false)
            .default_size([300.0, 340.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Search:");
                    ui.text_edit_singleline(&mut self.filter);
                });
                ui.separator();

                let mut picked: Option<(String, bool)> = None;
                egui::ScrollArea::vertical()
                    .max_height(240.0)
                    .show(ui, |ui| {
                        let visible = self.filtered();
                        if visible.is_empty() {
                            ui.weak("No matching contacts");
                        }
                        for contact in visible {
                            let is_selected =
                                self.selected.as_deref() == Some(contact.account.as_str());
                            let label = format!("{} <{}>", contact.display_name(), contact.account);
                            let response = ui.selectable_label(is_selected, label);
                            if response.double_clicked() {
                                picked = Some((contact.account.clone(), true));
                            } else if response.clicked() {
                                picked = Some((contact.account.clone(), false));
                            }
                        }
                    });

                if let Some((account, invite_now)) = picked {
                    self.selected = Some(account);
                    if invite_now {
                        action = Some(self.accept());
                        should_close = true;
                    }
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        let result = self.accept();
                        should_close = matches!(result, DialogAction::Invite(_));
                        action = Some(result);
                    }
                    if ui.button("Cancel").clicked() {
                        should_close = true;
                    }
                });

                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    should_close = true;
                }
            });

        (action, window_open && !should_close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts() -> Vec<Contact> {
        let mut ann = Contact::new("ann@example.com", "Ann");
        ann.alias = Some("Annie".into());
        vec![ann, Contact::new("bob@example.org", "Bob")]
    }

    #[test]
    fn test_filter_matches_account_and_name() {
        let mut dialog = InviteDialog::new(contacts());
        assert_eq!(dialog.filtered().len(), 2);

        dialog.filter = "ANNIE".into();
        assert_eq!(dialog.filtered().len(), 1);

        dialog.filter = "example.org".into();
        let visible = dialog.filtered();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].account, "bob@example.org");
    }

    #[test]
    fn test_accept_without_selection_reports_error() {
        let mut dialog = InviteDialog::new(contacts());
        assert_eq!(
            dialog.accept(),
            DialogAction::ShowError("No contact selected".into())
        );

        dialog.selected = Some("bob@example.org".into());
        assert_eq!(dialog.accept(), DialogAction::Invite("bob@example.org".into()));
    }
}
