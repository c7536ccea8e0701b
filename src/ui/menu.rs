//! Horizontal menu bar: Contacts, Me, Format, Settings, Help

use eframe::egui;

/// Actions that the menu can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddContact,
    AddGroup,
    Invite,
    SimulateInvitation,
    SetNick,
    SetPersonalMessage,
    SelectFont,
    SelectColor,
    SelectStyle,
    Emotes,
    LoginPreferences,
    ToggleTheme,
    DebugLog,
    About,
    Quit,
}

fn item(
    ui: &mut egui::Ui,
    label: &str,
    shortcut: Option<&str>,
    action: MenuAction,
    out: &mut Option<MenuAction>,
) {
    ui.horizontal(|ui| {
        if ui.button(label).clicked() {
            *out = Some(action);
            ui.close_menu();
        }
        if let Some(shortcut) = shortcut {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(shortcut).weak().small());
            });
        }
    });
}

/// Render the menu bar.
/// Returns Some(MenuAction) if an action was requested
pub fn render_menu_bar(ui: &mut egui::Ui, theme: &str) -> Option<MenuAction> {
    let mut menu_action: Option<MenuAction> = None;

    egui::menu::bar(ui, |ui| {
        ui.menu_button("Contacts", |ui| {
            item(ui, "Add contact...", Some("Ctrl+A"), MenuAction::AddContact, &mut menu_action);
            item(ui, "Add group...", None, MenuAction::AddGroup, &mut menu_action);
            item(
                ui,
                "Invite to conversation...",
                Some("Ctrl+I"),
                MenuAction::Invite,
                &mut menu_action,
            );
            ui.separator();
            item(
                ui,
                "Simulate invitation...",
                None,
                MenuAction::SimulateInvitation,
                &mut menu_action,
            );
            ui.separator();
            item(ui, "Quit", Some("Ctrl+Q"), MenuAction::Quit, &mut menu_action);
        });

        ui.menu_button("Me", |ui| {
            item(ui, "Change nick...", None, MenuAction::SetNick, &mut menu_action);
            item(
                ui,
                "Personal message...",
                None,
                MenuAction::SetPersonalMessage,
                &mut menu_action,
            );
        });

        ui.menu_button("Format", |ui| {
            item(ui, "Font...", None, MenuAction::SelectFont, &mut menu_action);
            item(ui, "Color...", None, MenuAction::SelectColor, &mut menu_action);
            item(ui, "Style...", None, MenuAction::SelectStyle, &mut menu_action);
            ui.separator();
            item(ui, "Emoticons...", Some("Ctrl+E"), MenuAction::Emotes, &mut menu_action);
        });

        ui.menu_button("Settings", |ui| {
            item(
                ui,
                "Login preferences...",
                None,
                MenuAction::LoginPreferences,
                &mut menu_action,
            );
            let theme_label = if theme == "light" { "Dark theme" } else { "Light theme" };
            item(ui, theme_label, None, MenuAction::ToggleTheme, &mut menu_action);
        });

        ui.menu_button("Help", |ui| {
            item(ui, "Debug log", Some("F12"), MenuAction::DebugLog, &mut menu_action);
            item(ui, "About", None, MenuAction::About, &mut menu_action);
        });
    });

    menu_action
}
