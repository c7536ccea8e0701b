//! Dialog rendering orchestration and action handling

use eframe::egui;
use std::time::Instant;

use super::MesinyerApp;
use crate::protocol::SessionAction;
use crate::ui::contact_list::ContactListAction;
use crate::ui::dialogs::{
    presets, AboutInfo, ConfirmPurpose, DialogAction, EntryPurpose, Response,
};
use crate::ui::menu::MenuAction;
use crate::ui::theme;

fn is_affirmative(response: Response) -> bool {
    matches!(response, Response::Yes | Response::Accept)
}

impl MesinyerApp {
    /// Render all dialogs and handle their actions
    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context) {
        // Floating status toasts (top-right corner)
        self.toasts.render(ctx);

        let actions = self.dialogs.render(ctx, &self.log_queue);
        for action in actions {
            self.handle_dialog_action(action);
        }
    }

    /// Apply a dialog action to local state and forward whatever the
    /// session needs to know.
    pub fn handle_dialog_action(&mut self, action: DialogAction) {
        if let Some(session_action) = self.apply_dialog_action(action) {
            self.send(session_action);
        }
    }

    /// Local half of [`handle_dialog_action`](Self::handle_dialog_action):
    /// returns the session action to send, if any.
    pub fn apply_dialog_action(&mut self, action: DialogAction) -> Option<SessionAction> {
        match action {
            DialogAction::Confirm { purpose, response } => {
                if !is_affirmative(response) {
                    return None;
                }
                match purpose {
                    ConfirmPurpose::RemoveContact(account) => {
                        Some(SessionAction::RemoveContact(account))
                    }
                    ConfirmPurpose::RemoveGroup(group) => Some(SessionAction::RemoveGroup(group)),
                    ConfirmPurpose::Quit => {
                        self.quit_requested = true;
                        None
                    }
                }
            }
            DialogAction::Entry {
                purpose,
                response,
                text,
            } => match (purpose, response) {
                (EntryPurpose::AddGroup, Response::Accept) => Some(SessionAction::AddGroup(text)),
                (EntryPurpose::SetNick { old }, Response::Accept) if text != old => {
                    Some(SessionAction::SetNick(text))
                }
                (EntryPurpose::SetPersonalMessage { old }, Response::Accept) if text != old => {
                    Some(SessionAction::SetPersonalMessage(text))
                }
                (EntryPurpose::RenameGroup { old }, Response::Accept) if text != old => {
                    Some(SessionAction::RenameGroup { old, new: text })
                }
                (EntryPurpose::SetAlias { account, old }, Response::Accept) => {
                    let alias = if text.is_empty() { None } else { Some(text) };
                    (alias != old).then_some(SessionAction::SetAlias { account, alias })
                }
                (EntryPurpose::SetAlias { account, .. }, Response::Clear) => {
                    Some(SessionAction::SetAlias { account, alias: None })
                }
                (EntryPurpose::SimulateInvitation, Response::Accept) => {
                    let nick = text.split('@').next().unwrap_or_default().to_string();
                    Some(SessionAction::SimulateInvitation { account: text, nick })
                }
                _ => None,
            },
            DialogAction::AddContact { account, group } => {
                self.toasts.push(format!("Adding {}", account), Instant::now());
                Some(SessionAction::AddContact { account, group })
            }
            DialogAction::EmoteSelected(shortcut) => {
                if !self.compose.is_empty() && !self.compose.ends_with(' ') {
                    self.compose.push(' ');
                }
                self.compose.push_str(&shortcut);
                self.compose.push(' ');
                None
            }
            DialogAction::Invite(account) => Some(SessionAction::InviteToConversation(account)),
            DialogAction::LoginPreferences(prefs) => {
                self.settings.session = prefs.session;
                self.settings.use_http = prefs.use_http;
                self.settings.proxy = prefs.proxy;
                self.toasts.push("Login preferences saved", Instant::now());
                None
            }
            DialogAction::StyleChanged(style) => {
                self.settings.message_style = style;
                None
            }
            DialogAction::ShowError(message) => {
                self.dialogs.show_message(presets::error(&message));
                None
            }
        }
    }

    /// Open whatever the menu (or its keyboard shortcut) asked for.
    pub(super) fn handle_menu_action(&mut self, ctx: &egui::Context, action: MenuAction) {
        match action {
            MenuAction::AddContact => {
                let group = self
                    .selected_contact
                    .as_deref()
                    .and_then(|account| self.contact(account))
                    .and_then(|c| c.group.clone());
                self.dialogs
                    .show_add_contact(presets::add_contact(&self.groups, group.as_deref()));
            }
            MenuAction::AddGroup => self.dialogs.show_entry(presets::add_group()),
            MenuAction::Invite => self
                .dialogs
                .show_invite(presets::invite_dialog(self.contacts.clone())),
            MenuAction::SimulateInvitation => {
                self.dialogs.show_entry(presets::simulate_invitation())
            }
            MenuAction::SetNick => self.dialogs.show_entry(presets::set_nick(&self.nick)),
            MenuAction::SetPersonalMessage => self
                .dialogs
                .show_entry(presets::set_message(&self.personal_message)),
            MenuAction::SelectFont => self
                .dialogs
                .show_style(presets::select_font(&self.settings.message_style)),
            MenuAction::SelectColor => self.dialogs.show_style(presets::select_color(
                &self.settings.message_style,
                self.settings.message_style.color,
            )),
            MenuAction::SelectStyle => self
                .dialogs
                .show_style(presets::select_style(&self.settings.message_style)),
            MenuAction::Emotes => {
                self.dialogs.toggle_emote_picker(self.settings.emote_columns)
            }
            MenuAction::LoginPreferences => {
                self.dialogs.show_preferences(presets::login_preferences(
                    &self.settings.session,
                    self.settings.use_http,
                    self.settings.proxy.clone(),
                ))
            }
            MenuAction::ToggleTheme => {
                self.settings.theme = if self.settings.theme == "light" {
                    "dark".to_string()
                } else {
                    "light".to_string()
                };
                theme::apply_theme(ctx, &self.settings.theme);
            }
            MenuAction::DebugLog => self.dialogs.toggle_debug_log(),
            MenuAction::About => self
                .dialogs
                .show_about(presets::about_dialog(AboutInfo::default())),
            MenuAction::Quit => self.dialogs.show_confirm(presets::yes_no(
                "Do you really want to quit?",
                ConfirmPurpose::Quit,
            )),
        }
    }

    pub(super) fn handle_contact_action(&mut self, action: ContactListAction) {
        match action {
            ContactListAction::SetAlias(account) => {
                let old = self.contact(&account).and_then(|c| c.alias.clone());
                self.dialogs
                    .show_entry(presets::set_contact_alias(&account, old.as_deref()));
            }
            ContactListAction::Remove(account) => {
                let message = format!("Remove {} from your contact list?", account);
                self.dialogs.show_confirm(presets::yes_no(
                    &message,
                    ConfirmPurpose::RemoveContact(account),
                ));
            }
            ContactListAction::Invite(account) => {
                self.send(SessionAction::InviteToConversation(account))
            }
            ContactListAction::RenameGroup(group) => {
                self.dialogs.show_entry(presets::rename_group(&group))
            }
            ContactListAction::RemoveGroup(group) => {
                let message = format!(
                    "Remove group {}? Its contacts are kept without a group.",
                    group
                );
                self.dialogs.show_confirm(presets::accept_cancel(
                    &message,
                    ConfirmPurpose::RemoveGroup(group),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SessionHandle;
    use crate::config::{MessageStyle, ProxySettings, Settings};
    use crate::logging::SharedLogQueue;
    use crate::roster::Roster;
    use crate::ui::dialogs::LoginPreferences;

    fn app() -> MesinyerApp {
        let session = SessionHandle::spawn(Roster::new("me")).unwrap();
        MesinyerApp::with_session(Settings::default(), SharedLogQueue::default(), session)
    }

    fn entry(purpose: EntryPurpose, response: Response, text: &str) -> DialogAction {
        DialogAction::Entry {
            purpose,
            response,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_confirm_only_acts_on_yes() {
        let mut app = app();
        let remove = |response| DialogAction::Confirm {
            purpose: ConfirmPurpose::RemoveContact("ann@example.com".into()),
            response,
        };
        assert_eq!(app.apply_dialog_action(remove(Response::No)), None);
        assert_eq!(app.apply_dialog_action(remove(Response::Close)), None);
        assert_eq!(
            app.apply_dialog_action(remove(Response::Yes)),
            Some(SessionAction::RemoveContact("ann@example.com".into()))
        );

        app.apply_dialog_action(DialogAction::Confirm {
            purpose: ConfirmPurpose::Quit,
            response: Response::Yes,
        });
        assert!(app.quit_requested);
    }

    #[test]
    fn test_unchanged_entries_send_nothing() {
        let mut app = app();
        assert_eq!(
            app.apply_dialog_action(entry(
                EntryPurpose::SetNick { old: "me".into() },
                Response::Accept,
                "me"
            )),
            None
        );
        assert_eq!(
            app.apply_dialog_action(entry(
                EntryPurpose::SetNick { old: "me".into() },
                Response::Accept,
                "you"
            )),
            Some(SessionAction::SetNick("you".into()))
        );
        assert_eq!(
            app.apply_dialog_action(entry(
                EntryPurpose::RenameGroup { old: "Work".into() },
                Response::Accept,
                "Office"
            )),
            Some(SessionAction::RenameGroup {
                old: "Work".into(),
                new: "Office".into()
            })
        );
    }

    #[test]
    fn test_alias_accept_and_clear() {
        let mut app = app();
        let purpose = EntryPurpose::SetAlias {
            account: "ann@example.com".into(),
            old: Some("Annie".into()),
        };
        assert_eq!(
            app.apply_dialog_action(entry(purpose.clone(), Response::Accept, "Annie")),
            None
        );
        assert_eq!(
            app.apply_dialog_action(entry(purpose.clone(), Response::Accept, "")),
            Some(SessionAction::SetAlias {
                account: "ann@example.com".into(),
                alias: None
            })
        );
        assert_eq!(
            app.apply_dialog_action(entry(purpose, Response::Clear, "")),
            Some(SessionAction::SetAlias {
                account: "ann@example.com".into(),
                alias: None
            })
        );
    }

    #[test]
    fn test_simulate_invitation_uses_local_part() {
        let mut app = app();
        assert_eq!(
            app.apply_dialog_action(entry(
                EntryPurpose::SimulateInvitation,
                Response::Accept,
                "zoe@example.com"
            )),
            Some(SessionAction::SimulateInvitation {
                account: "zoe@example.com".into(),
                nick: "zoe".into()
            })
        );
    }

    #[test]
    fn test_emote_inserts_shortcut() {
        let mut app = app();
        app.compose = "hi".into();
        app.apply_dialog_action(DialogAction::EmoteSelected(":)".into()));
        assert_eq!(app.compose, "hi :) ");
        app.apply_dialog_action(DialogAction::EmoteSelected("(Y)".into()));
        assert_eq!(app.compose, "hi :) (Y) ");
    }

    #[test]
    fn test_settings_actions() {
        let mut app = app();
        let proxy = ProxySettings {
            use_proxy: true,
            host: "proxy.local".into(),
            port: "3128".into(),
            ..ProxySettings::default()
        };
        app.apply_dialog_action(DialogAction::LoginPreferences(LoginPreferences {
            session: "offline".into(),
            use_http: true,
            proxy: proxy.clone(),
        }));
        assert!(app.settings.use_http);
        assert_eq!(app.settings.proxy, proxy);

        let style = MessageStyle {
            italic: true,
            ..MessageStyle::default()
        };
        app.apply_dialog_action(DialogAction::StyleChanged(style.clone()));
        assert_eq!(app.settings.message_style, style);
    }

    #[test]
    fn test_show_error_opens_dialog() {
        let mut app = app();
        app.apply_dialog_action(DialogAction::ShowError("No contact selected".into()));
        assert_eq!(app.dialogs.messages.len(), 1);
    }

    #[test]
    fn test_contact_actions_open_dialogs() {
        let mut app = app();
        app.handle_contact_action(ContactListAction::Remove("ann@example.com".into()));
        assert!(app.dialogs.confirm.is_some());
        app.handle_contact_action(ContactListAction::RenameGroup("Work".into()));
        assert!(app.dialogs.entry.is_some());
    }
}
