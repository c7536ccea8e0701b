//! About dialog.

use eframe::egui;

/// What the about dialog shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutInfo {
    pub name: String,
    pub version: String,
    pub copyright: String,
    pub comments: String,
    pub license: String,
    pub website: String,
    pub authors: Vec<String>,
    pub translators: Vec<String>,
}

impl Default for AboutInfo {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            copyright: String::new(),
            comments: "Instant messaging client".to_string(),
            license: "GPL-2.0-or-later".to_string(),
            website: String::new(),
            authors: Vec::new(),
            translators: Vec::new(),
        }
    }
}

pub struct AboutDialog {
    pub info: AboutInfo,
    show_license: bool,
}

impl AboutDialog {
    pub fn new(info: AboutInfo) -> Self {
        Self {
            info,
            show_license: false,
        }
    }

    /// Render the dialog. Returns whether it is still open.
    pub fn render(&mut self, ctx: &egui::Context) -> bool {
        let mut window_open = true;
        let mut should_close = false;

        egui::Window::new(format!("About {}", self.info.name))
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(format!("{} {}", self.info.name, self.info.version));
                    if !self.info.comments.is_empty() {
                        ui.label(&self.info.comments);
                    }
                    if !self.info.copyright.is_empty() {
                        ui.small(&self.info.copyright);
                    }
                    if !self.info.website.is_empty() {
                        ui.hyperlink(&self.info.website);
                    }
                });

                if !self.info.authors.is_empty() {
                    ui.separator();
                    ui.strong("Authors");
                    for author in &self.info.authors {
                        ui.label(author);
                    }
                }
                if !self.info.translators.is_empty() {
                    ui.separator();
                    ui.strong("Translators");
                    for translator in &self.info.translators {
                        ui.label(translator);
                    }
                }

                ui.separator();
                ui.horizontal(|ui| {
                    ui.toggle_value(&mut self.show_license, "License");
                    if ui.button("Close").clicked() {
                        should_close = true;
                    }
                });
                if self.show_license {
                    ui.label(&self.info.license);
                }

                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    should_close = true;
                }
            });

        window_open && !should_close
    }
}
