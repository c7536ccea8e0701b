//! "Contact added you" dialog: pages through pending invitations and lets
//! the user accept, reject or defer each one.

use eframe::egui;

use super::message::next_window_id;
use crate::decision_set::{PagedDecisionSet, PendingInvitation};

/// Paged invitation dialog. All decisions go through the wrapped
/// [`PagedDecisionSet`], whose callback reports the final result.
pub struct AddBuddyDialog {
    set: PagedDecisionSet,
    id: egui::Id,
}

impl AddBuddyDialog {
    pub fn new(set: PagedDecisionSet) -> Self {
        Self {
            set,
            id: next_window_id("add_buddy_dialog"),
        }
    }

    /// Queue another invitation. Returns `false` if this dialog has already
    /// finished and a new one is needed.
    pub fn append(&mut self, invitation: PendingInvitation) -> bool {
        self.set.append(invitation)
    }

    pub fn decisions(&self) -> &PagedDecisionSet {
        &self.set
    }

    pub fn decisions_mut(&mut self) -> &mut PagedDecisionSet {
        &mut self.set
    }

    /// Finish without further decisions, reporting what was decided so far.
    pub fn close(&mut self) {
        self.set.close();
    }

    pub fn is_finished(&self) -> bool {
        self.set.is_completed()
    }

    /// Text shown for the invitation under the cursor.
    pub fn invitation_text(invitation: &PendingInvitation) -> String {
        let who = if invitation.has_distinct_nick() {
            format!("{}\n({})", invitation.nick, invitation.account)
        } else {
            invitation.account.clone()
        };
        format!(
            "{} has added you.\nDo you want to add him/her to your contact list?",
            who
        )
    }

    /// Sensitivity of the back and forward arrows for the current page.
    fn arrows_enabled(&self) -> (bool, bool) {
        (self.set.can_go_back(), self.set.can_go_forward())
    }

    /// Render the dialog. Returns whether it is still open.
    pub fn render(&mut self, ctx: &egui::Context) -> bool {
        if self.set.is_completed() {
            return false;
        }

        let mut window_open = true;
        let (back, forward) = self.arrows_enabled();

        egui::Window::new("Add contact")
            .id(self.id)
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .default_pos([30.0, 30.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(back, egui::Button::new("◀"))
                        .clicked()
                    {
                        self.set.navigate(-1);
                    }
                    ui.label(self.set.page_label());
                    if ui
                        .add_enabled(forward, egui::Button::new("▶"))
                        .clicked()
                    {
                        self.set.navigate(1);
                    }
                });

                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("👤")
                            .text_style(egui::TextStyle::Name("dialog_icon".into())),
                    );
                    if let Some(current) = self.set.current() {
                        ui.label(Self::invitation_text(current));
                    }
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Remind me later").clicked() {
                        self.set.defer();
                    }
                    if ui.button("Remove").clicked() {
                        self.set.reject();
                    }
                    if ui.button("Add").clicked() {
                        self.set.accept();
                    }
                });
            });

        if !window_open {
            self.set.close();
        }

        !self.set.is_completed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_invitation_text_shows_nick_when_distinct() {
        let with_nick = PendingInvitation::new("ann@example.com", "Ann");
        let text = AddBuddyDialog::invitation_text(&with_nick);
        assert!(text.starts_with("Ann\n(ann@example.com) has added you."));

        let bare = PendingInvitation::new("bob@example.com", "bob@example.com");
        let text = AddBuddyDialog::invitation_text(&bare);
        assert!(text.starts_with("bob@example.com has added you."));
    }

    #[test]
    fn test_finished_dialog_refuses_appends() {
        let result = Rc::new(RefCell::new(None));
        let sink = result.clone();
        let set = PagedDecisionSet::with_items(
            [PendingInvitation::new("ann@example.com", "Ann")],
            move |accepted, rejected| {
                *sink.borrow_mut() = Some((accepted, rejected));
            },
        );
        let mut dialog = AddBuddyDialog::new(set);

        dialog.set.accept();
        assert!(dialog.is_finished());
        assert_eq!(
            result.borrow().clone(),
            Some((vec!["ann@example.com".to_string()], Vec::new()))
        );
        assert!(!dialog.append(PendingInvitation::new("bob@example.com", "Bob")));
    }

    #[test]
    fn test_arrows_follow_page_position() {
        let set = PagedDecisionSet::with_items(
            [
                PendingInvitation::new("ann@example.com", "Ann"),
                PendingInvitation::new("bob@example.com", "Bob"),
                PendingInvitation::new("cy@example.com", "Cy"),
            ],
            |_, _| {},
        );
        let mut dialog = AddBuddyDialog::new(set);
        assert_eq!(dialog.arrows_enabled(), (false, true));

        dialog.set.navigate(1);
        assert_eq!(dialog.arrows_enabled(), (true, true));

        dialog.set.navigate(1);
        assert_eq!(dialog.arrows_enabled(), (true, false));

        // A single invitation has nowhere to go
        dialog.set.defer();
        dialog.set.defer();
        assert_eq!(dialog.set.len(), 1);
        assert_eq!(dialog.arrows_enabled(), (false, false));
    }
}
