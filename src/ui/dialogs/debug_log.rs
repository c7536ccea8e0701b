//! Debug window listing recent log records.

use eframe::egui;

use crate::logging::{LogRecord, Severity, SharedLogQueue};
use crate::ui::theme::severity_color;

pub struct DebugLogDialog {
    pub min_severity: Severity,
}

impl DebugLogDialog {
    pub fn new() -> Self {
        Self {
            min_severity: Severity::Debug,
        }
    }

    /// Records at or above the selected severity, oldest first.
    pub fn visible(&self, queue: &SharedLogQueue) -> Vec<LogRecord> {
        queue
            .snapshot()
            .into_iter()
            .filter(|r| r.severity >= self.min_severity)
            .collect()
    }

    /// Render the viewer. Returns whether it is still open.
    pub fn render(&mut self, ctx: &egui::Context, queue: &SharedLogQueue) -> bool {
        let mut window_open = true;

        egui::Window::new("Debug log")
            .open(&mut window_open)
            .default_size([520.0, 320.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Show:");
                    egui::ComboBox::from_id_salt("debug_log_severity")
                        .selected_text(self.min_severity.label())
                        .show_ui(ui, |ui| {
                            for severity in Severity::ALL {
                                ui.selectable_value(
                                    &mut self.min_severity,
                                    severity,
                                    severity.label(),
                                );
                            }
                        });
                    ui.weak(format!("{}/{} records", queue.len(), queue.capacity()));
                    if ui.button("Clear").clicked() {
                        queue.clear();
                    }
                });
                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for record in self.visible(queue) {
                            ui.label(
                                egui::RichText::new(record.to_string())
                                    .monospace()
                                    .color(severity_color(record.severity)),
                            );
                        }
                    });
            });

        window_open
    }
}

impl Default for DebugLogDialog {
    fn default() -> Self {
        Self::new()
    }
}
