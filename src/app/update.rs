//! Main update loop and global shortcuts

use eframe::egui;
use std::time::Duration;

use super::MesinyerApp;
use crate::ui::menu::MenuAction;

/// Keyboard shortcut for a menu action, if one was pressed this frame.
fn shortcut_action(input: &egui::InputState) -> Option<MenuAction> {
    let ctrl = input.modifiers.ctrl;
    if ctrl && input.key_pressed(egui::Key::A) {
        Some(MenuAction::AddContact)
    } else if ctrl && input.key_pressed(egui::Key::I) {
        Some(MenuAction::Invite)
    } else if ctrl && input.key_pressed(egui::Key::E) {
        Some(MenuAction::Emotes)
    } else if ctrl && input.key_pressed(egui::Key::Q) {
        Some(MenuAction::Quit)
    } else if input.key_pressed(egui::Key::F12) {
        Some(MenuAction::DebugLog)
    } else {
        None
    }
}

impl eframe::App for MesinyerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process session events
        self.process_events();

        // Global keyboard shortcuts (work even when input doesn't have focus)
        if let Some(action) = ctx.input(shortcut_action) {
            self.handle_menu_action(ctx, action);
        }

        // Request repaint to keep checking for events
        ctx.request_repaint_after(Duration::from_millis(100));

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);
        self.render_contacts(ctx);
        self.render_conversation(ctx);

        self.render_dialogs(ctx);

        if self.quit_requested {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
