//! Message dialogs: error, warning, information and exception reports.

use eframe::egui;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Unique window id so several message dialogs can be open at once
pub(super) fn next_window_id(prefix: &str) -> egui::Id {
    egui::Id::new((prefix.to_string(), NEXT_ID.fetch_add(1, Ordering::Relaxed)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Warning,
    Information,
    Exception,
}

impl MessageKind {
    pub fn icon(&self) -> &'static str {
        match self {
            MessageKind::Error | MessageKind::Exception => "⛔",
            MessageKind::Warning => "⚠",
            MessageKind::Information => "ℹ",
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            MessageKind::Error => "Error!",
            MessageKind::Warning => "Warning",
            MessageKind::Information => "Information",
            MessageKind::Exception => "Exception",
        }
    }
}

/// A message with an icon, a single close button and optional details
/// that can be expanded.
pub struct MessageDialog {
    pub kind: MessageKind,
    pub title: String,
    pub message: String,
    pub details: Option<String>,
    pub show_details: bool,
    id: egui::Id,
}

impl MessageDialog {
    pub fn new(kind: MessageKind, message: &str) -> Self {
        Self {
            kind,
            title: kind.default_title().to_string(),
            message: message.to_string(),
            details: None,
            show_details: false,
            id: next_window_id("message_dialog"),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }

    /// Flip the details section, returning the new button label.
    pub fn toggle_details(&mut self) -> &'static str {
        self.show_details = !self.show_details;
        self.details_label()
    }

    pub fn details_label(&self) -> &'static str {
        if self.show_details {
            "Hide details"
        } else {
            "Show details"
        }
    }

    /// Render the dialog. Returns whether it is still open.
    pub fn render(&mut self, ctx: &egui::Context) -> bool {
        let mut window_open = true;
        let mut should_close = false;

        egui::Window::new(&self.title)
            .id(self.id)
            .open(&mut window_open)
            .collapsible(false)
            .resizable(self.details.is_some())
            .default_width(320.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(self.kind.icon())
                            .text_style(egui::TextStyle::Name("dialog_icon".into())),
                    );
                    ui.label(&self.message);
                });

                if let Some(details) = &self.details {
                    ui.add_space(4.0);
                    let label = if self.show_details { "Hide details" } else { "Show details" };
                    if ui.button(label).clicked() {
                        self.show_details = !self.show_details;
                    }
                    if self.show_details {
                        egui::ScrollArea::vertical()
                            .max_height(240.0)
                            .show(ui, |ui| {
                                ui.label(egui::RichText::new(details).monospace().small());
                            });
                    }
                }

                ui.add_space(8.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        should_close = true;
                    }
                });

                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    should_close = true;
                }
            });

        window_open && !should_close
    }
}
