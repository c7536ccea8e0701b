//! Login preferences dialog - session backend, HTTP mode and proxy.

use eframe::egui;

use super::message::next_window_id;
use super::{DialogAction, LoginPreferences};
use crate::config::{ProxySettings, SESSIONS};
use crate::validation::{validate_host, validate_port};

/// Self-contained login preferences state.
pub struct LoginPreferencesDialog {
    pub session: String,
    pub use_http: bool,
    pub proxy: ProxySettings,
    error: Option<String>,
    id: egui::Id,
}

impl LoginPreferencesDialog {
    pub fn new(session: &str, use_http: bool, proxy: ProxySettings) -> Self {
        Self {
            session: session.to_string(),
            use_http,
            proxy,
            error: None,
            id: next_window_id("login_preferences"),
        }
    }

    fn session_label(&self) -> &str {
        SESSIONS
            .iter()
            .find(|(id, _)| *id == self.session)
            .map(|(_, name)| *name)
            .unwrap_or(self.session.as_str())
    }

    /// Check the proxy fields. Host and port only matter with the proxy on.
    pub fn validate(&self) -> Result<(), String> {
        if self.proxy.use_proxy {
            validate_host(&self.proxy.host)?;
            validate_port(&self.proxy.port)?;
            if self.proxy.use_auth && self.proxy.user.trim().is_empty() {
                return Err("Proxy user cannot be empty".to_string());
            }
        }
        Ok(())
    }

    pub fn accept(&mut self) -> Option<DialogAction> {
        if let Err(e) = self.validate() {
            self.error = Some(e);
            return None;
        }
        self.error = None;

        let mut proxy = self.proxy.clone();
        proxy.host = proxy.host.trim().to_string();
        proxy.port = proxy.port.trim().to_string();
        Some(DialogAction::LoginPreferences(LoginPreferences {
            session: self.session.clone(),
            use_http: self.use_http,
            proxy,
        }))
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Render the preferences dialog.
    /// The second return value indicates if the dialog is still open.
    pub fn render(&mut self, ctx: &egui::Context) -> (Option<DialogAction>, bool) {
        let mut action: Option<DialogAction> = None;
        let mut should_close = false;
        let mut window_open = true;

        egui::Window::new("Login preferences")
            .id(self.id)
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("login_prefs_session")
                    .num_columns(2)
                    .show(ui, |ui| {
                        ui.label("Session:");
                        let current = self.session_label().to_string();
                        egui::ComboBox::from_id_salt("login_prefs_session_combo")
                            .selected_text(current)
                            .show_ui(ui, |ui| {
                                for (id, name) in SESSIONS {
                                    ui.selectable_value(&mut self.session, id.to_string(), *name);
                                }
                            });
                        ui.end_row();
                    });

                ui.checkbox(&mut self.use_http, "Use HTTP method");
                ui.checkbox(&mut self.proxy.use_proxy, "Use proxy");

                ui.add_enabled_ui(self.proxy.use_proxy, |ui| {
                    egui::Grid::new("login_prefs_proxy")
                        .num_columns(2)
                        .show(ui, |ui| {
                            ui.label("Host:");
                            ui.text_edit_singleline(&mut self.proxy.host);
                            ui.end_row();
                            ui.label("Port:");
                            ui.text_edit_singleline(&mut self.proxy.port);
                            ui.end_row();
                        });

                    ui.checkbox(&mut self.proxy.use_auth, "Use authentication");
                    ui.add_enabled_ui(self.proxy.use_auth, |ui| {
                        egui::Grid::new("login_prefs_auth")
                            .num_columns(2)
                            .show(ui, |ui| {
                                ui.label("User:");
                                ui.text_edit_singleline(&mut self.proxy.user);
                                ui.end_row();
                                ui.label("Password:");
                                ui.add(
                                    egui::TextEdit::singleline(&mut self.proxy.password)
                                        .password(true),
                                );
                                ui.end_row();
                            });
                    });
                });

                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::from_rgb(231, 76, 60), err);
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        action = self.accept();
                        should_close = action.is_some();
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
    use crate::config::DEFAULT_SESSION;

    #[test]
    fn test_proxy_fields_ignored_when_disabled() {
        let mut dialog =
            LoginPreferencesDialog::new(DEFAULT_SESSION, true, ProxySettings::default());
        let action = dialog.accept();
        assert_eq!(
            action,
            Some(DialogAction::LoginPreferences(LoginPreferences {
                session: DEFAULT_SESSION.into(),
                use_http: true,
                proxy: ProxySettings::default(),
            }))
        );
    }

    #[test]
    fn test_enabled_proxy_needs_valid_port() {
        let proxy = ProxySettings {
            use_proxy: true,
            host: "proxy.local".into(),
            port: "http".into(),
            ..ProxySettings::default()
        };
        let mut dialog = LoginPreferencesDialog::new(DEFAULT_SESSION, false, proxy);
        assert!(dialog.accept().is_none());
        assert!(dialog.error().unwrap().contains("Invalid port"));

        dialog.proxy.port = " 8080 ".into();
        match dialog.accept() {
            Some(DialogAction::LoginPreferences(prefs)) => assert_eq!(prefs.proxy.port, "8080"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_auth_requires_user() {
        let proxy = ProxySettings {
            use_proxy: true,
            host: "proxy.local".into(),
            port: "3128".into(),
            use_auth: true,
            ..ProxySettings::default()
        };
        let dialog = LoginPreferencesDialog::new(DEFAULT_SESSION, false, proxy);
        assert!(dialog.validate().is_err());
    }

    #[test]
    fn test_unknown_session_label_falls_back_to_id() {
        let dialog = LoginPreferencesDialog::new("custom", false, ProxySettings::default());
        assert_eq!(dialog.session_label(), "custom");
        let known = LoginPreferencesDialog::new(DEFAULT_SESSION, false, ProxySettings::default());
        assert_eq!(known.session_label(), "Offline roster");
    }
}
