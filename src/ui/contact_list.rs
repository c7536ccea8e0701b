//! Contact list side panel, grouped by contact group.

use eframe::egui;

use crate::protocol::Contact;
use crate::ui::theme::contact_color;

/// Requests from the contact list's context menus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactListAction {
    SetAlias(String),
    Remove(String),
    Invite(String),
    RenameGroup(String),
    RemoveGroup(String),
}

/// Contacts bucketed by group: each named group in order (even when empty),
/// then contacts without a known group under `None`.
pub fn group_contacts<'a>(
    contacts: &'a [Contact],
    groups: &[String],
) -> Vec<(Option<String>, Vec<&'a Contact>)> {
    let mut sections: Vec<(Option<String>, Vec<&Contact>)> = groups
        .iter()
        .map(|g| (Some(g.clone()), Vec::new()))
        .collect();
    let mut ungrouped: Vec<&Contact> = Vec::new();

    for contact in contacts {
        let index = contact
            .group
            .as_ref()
            .and_then(|g| sections.iter().position(|(name, _)| name.as_ref() == Some(g)));
        match index {
            Some(i) => sections[i].1.push(contact),
            None => ungrouped.push(contact),
        }
    }

    for (_, members) in &mut sections {
        members.sort_by_key(|c| c.display_name().to_lowercase());
    }
    ungrouped.sort_by_key(|c| c.display_name().to_lowercase());
    if !ungrouped.is_empty() {
        sections.push((None, ungrouped));
    }
    sections
}

/// Render the contact list. Clicking selects a contact; right-click opens
/// its context menu.
pub fn render_contact_list(
    ctx: &egui::Context,
    contacts: &[Contact],
    groups: &[String],
    selected: &mut Option<String>,
) -> Option<ContactListAction> {
    let mut action: Option<ContactListAction> = None;

    egui::SidePanel::left("contacts_panel")
        .resizable(true)
        .default_width(220.0)
        .min_width(180.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.label(egui::RichText::new("CONTACTS").size(11.0).strong().weak());
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    if contacts.is_empty() && groups.is_empty() {
                        ui.label(egui::RichText::new("No contacts yet").italics().weak());
                    }

                    for (group, members) in group_contacts(contacts, groups) {
                        let title = match &group {
                            Some(name) => format!("{} ({})", name, members.len()),
                            None => format!("No group ({})", members.len()),
                        };
                        let header = egui::CollapsingHeader::new(title)
                            .id_salt(("contact_group", group.clone()))
                            .default_open(true)
                            .show(ui, |ui| {
                                for contact in members {
                                    let is_selected =
                                        selected.as_deref() == Some(contact.account.as_str());
                                    let text = egui::RichText::new(contact.display_name())
                                        .color(contact_color(&contact.account));
                                    let response = ui
                                        .selectable_label(is_selected, text)
                                        .on_hover_text(&contact.account);
                                    if response.clicked() {
                                        *selected = Some(contact.account.clone());
                                    }
                                    response.context_menu(|ui| {
                                        if ui.button("Invite to conversation").clicked() {
                                            action = Some(ContactListAction::Invite(
                                                contact.account.clone(),
                                            ));
                                            ui.close_menu();
                                        }
                                        if ui.button("Set alias...").clicked() {
                                            action = Some(ContactListAction::SetAlias(
                                                contact.account.clone(),
                                            ));
                                            ui.close_menu();
                                        }
                                        if ui.button("Remove").clicked() {
                                            action = Some(ContactListAction::Remove(
                                                contact.account.clone(),
                                            ));
                                            ui.close_menu();
                                        }
                                    });
                                }
                            });

                        if let Some(name) = group {
                            header.header_response.context_menu(|ui| {
                                if ui.button("Rename group...").clicked() {
                                    action = Some(ContactListAction::RenameGroup(name.clone()));
                                    ui.close_menu();
                                }
                                if ui.button("Remove group").clicked() {
                                    action = Some(ContactListAction::RemoveGroup(name.clone()));
                                    ui.close_menu();
                                }
                            });
                        }
                    }
                });
        });

    action
}
