//! Add contact dialog - account entry plus a group selector.

use eframe::egui;

use super::message::next_window_id;
use super::DialogAction;
use crate::validation::validate_account;

/// Self-contained add contact dialog state.
pub struct AddContactDialog {
    pub account: String,
    /// Group names, sorted; index 0 is the empty "no group" entry
    pub groups: Vec<String>,
    pub selected: usize,
    error: Option<String>,
    id: egui::Id,
}

impl AddContactDialog {
    /// Create the dialog over `groups`, preselecting `selected_group` if it
    /// is one of them.
    pub fn new(groups: &[String], selected_group: Option<&str>) -> Self {
        let mut sorted: Vec<String> = groups.to_vec();
        sorted.sort();
        sorted.dedup();
        sorted.insert(0, String::new());

        let selected = selected_group
            .and_then(|g| sorted.iter().position(|s| s == g))
            .unwrap_or(0);

        Self {
            account: String::new(),
            groups: sorted,
            selected,
            error: None,
            id: next_window_id("add_contact_dialog"),
        }
    }

    pub fn selected_group(&self) -> Option<&str> {
        match self.groups.get(self.selected) {
            Some(g) if !g.is_empty() => Some(g.as_str()),
            _ => None,
        }
    }

    pub fn accept(&mut self) -> Option<DialogAction> {
        if let Err(e) = validate_account(&self.account) {
            self.error = Some(e);
            return None;
        }
        self.error = None;
        Some(DialogAction::AddContact {
            account: self.account.trim().to_string(),
            group: self.selected_group().map(str::to_string),
        })
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Render the dialog.
    /// Returns `Some(DialogAction::AddContact)` on a valid Accept; the second
    /// value is whether the dialog is still open.
    pub fn render(&mut self, ctx: &egui::Context) -> (Option<DialogAction>, bool) {
        let mut action: Option<DialogAction> = None;
        let mut should_close = false;
        let mut window_open = true;

        egui::Window::new("Add contact")
            .id(self.id)
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Grid::new("add_contact_grid")
                    .num_columns(2)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Account:");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.account)
                                .hint_text("someone@example.com")
                                .desired_width(220.0),
                        );
                        ui.end_row();

                        ui.label("Group:");
                        let current = match self.groups.get(self.selected) {
                            Some(g) if !g.is_empty() => g.clone(),
                            _ => "(no group)".to_string(),
                        };
                        egui::ComboBox::from_id_salt("add_contact_group")
                            .selected_text(current)
                            .show_ui(ui, |ui| {
                                for (i, group) in self.groups.iter().enumerate() {
                                    let label = if group.is_empty() {
                                        "(no group)"
                                    } else {
                                        group.as_str()
                                    };
                                    ui.selectable_value(&mut self.selected, i, label);
                                }
                            });
                        ui.end_row();
                    });

                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::from_rgb(231, 76, 60), err);
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        action = self.accept();
                        should_close = action.is_some();
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

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> Vec<String> {
        vec!["Work".to_string(), "Family".to_string()]
    }

    #[test]
    fn test_groups_sorted_with_empty_first() {
        let dialog = AddContactDialog::new(&groups(), None);
        assert_eq!(dialog.groups, vec!["", "Family", "Work"]);
        assert_eq!(dialog.selected, 0);
        assert_eq!(dialog.selected_group(), None);
    }

    #[test]
    fn test_preselected_group() {
        let dialog = AddContactDialog::new(&groups(), Some("Work"));
        assert_eq!(dialog.selected_group(), Some("Work"));

        let unknown = AddContactDialog::new(&groups(), Some("Nope"));
        assert_eq!(unknown.selected_group(), None);
    }

    #[test]
    fn test_accept_requires_valid_account() {
        let mut dialog = AddContactDialog::new(&groups(), Some("Family"));
        dialog.account = "not an account".into();
        assert!(dialog.accept().is_none());
        assert!(dialog.error().is_some());

        dialog.account = " ann@example.com ".into();
        assert_eq!(
            dialog.accept(),
            Some(DialogAction::AddContact {
                account: "ann@example.com".into(),
                group: Some("Family".into()),
            })
        );
    }
}
