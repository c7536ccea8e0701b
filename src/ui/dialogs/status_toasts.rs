//! Status toast notifications - floating messages in the top-right corner.

use eframe::egui;
use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Short-lived confirmations such as "Contact added".
#[derive(Default)]
pub struct StatusToasts {
    messages: Vec<(String, Instant)>,
}

impl StatusToasts {
    pub fn push(&mut self, message: impl Into<String>, now: Instant) {
        self.messages.push((message.into(), now));
    }

    /// Drop toasts older than [`TOAST_LIFETIME`].
    pub fn expire(&mut self, now: Instant) {
        self.messages
            .retain(|(_, shown)| now.saturating_duration_since(*shown) < TOAST_LIFETIME);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Expire old toasts and draw the rest.
    pub fn render(&mut self, ctx: &egui::Context) {
        self.expire(Instant::now());
        if self.messages.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("status_toast_area"))
            .anchor(egui::Align2::RIGHT_TOP, [-10.0, 50.0]) // Below menu bar
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(30, 30, 30, 230))
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        for (msg, _) in &self.messages {
                            ui.label(egui::RichText::new(msg).color(egui::Color32::LIGHT_GREEN));
                        }
                    });
            });
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
