//! Font, color and style dialogs for outgoing messages.
//!
//! One dialog type edits a copy of the [`MessageStyle`]; the mode decides
//! which controls are shown.

use eframe::egui;

use super::message::next_window_id;
use super::DialogAction;
use crate::config::{Color, FontFamilyChoice, MessageStyle};
use crate::ui::theme::styled_text;

pub const MIN_FONT_SIZE: f32 = 8.0;
pub const MAX_FONT_SIZE: f32 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMode {
    Font,
    Color,
    /// Everything at once
    Style,
}

impl StyleMode {
    pub fn title(&self) -> &'static str {
        match self {
            StyleMode::Font => "Select font",
            StyleMode::Color => "Select color",
            StyleMode::Style => "Message style",
        }
    }

    fn shows_font(&self) -> bool {
        matches!(self, StyleMode::Font | StyleMode::Style)
    }

    fn shows_color(&self) -> bool {
        matches!(self, StyleMode::Color | StyleMode::Style)
    }
}

pub struct StyleDialog {
    pub mode: StyleMode,
    pub style: MessageStyle,
    original: MessageStyle,
    id: egui::Id,
}

impl StyleDialog {
    pub fn new(mode: StyleMode, style: MessageStyle) -> Self {
        Self {
            mode,
            original: style.clone(),
            style,
            id: next_window_id("style_dialog"),
        }
    }

    pub fn is_modified(&self) -> bool {
        self.style != self.original
    }

    /// The edited style with its size clamped to the supported range.
    pub fn accept(&self) -> DialogAction {
        let mut style = self.style.clone();
        style.size = style.size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        DialogAction::StyleChanged(style)
    }

    /// Render the dialog.
    /// The second return value indicates if the dialog is still open.
    pub fn render(&mut self, ctx: &egui::Context) -> (Option<DialogAction>, bool) {
        let mut action: Option<DialogAction> = None;
        let mut should_close = false;
        let mut window_open = true;

        egui::Window::new(self.mode.title())
            .id(self.id)
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                if self.mode.shows_font() {
                    ui.horizontal(|ui| {
                        ui.label("Family:");
                        ui.radio_value(
                            &mut self.style.family,
                            FontFamilyChoice::Proportional,
                            "Proportional",
                        );
                        ui.radio_value(
                            &mut self.style.family,
                            FontFamilyChoice::Monospace,
                            "Monospace",
                        );
                    });
                    ui.add(
                        egui::Slider::new(&mut self.style.size, MIN_FONT_SIZE..=MAX_FONT_SIZE)
                            .text("Size"),
                    );
                }

                if self.mode == StyleMode::Style {
                    ui.horizontal(|ui| {
                        ui.checkbox(&mut self.style.bold, "Bold");
                        ui.checkbox(&mut self.style.italic, "Italic");
                        ui.checkbox(&mut self.style.underline, "Underline");
                        ui.checkbox(&mut self.style.strike, "Strike");
                    });
                }

                if self.mode.shows_color() {
                    ui.horizontal(|ui| {
                        ui.label("Color:");
                        let mut rgb = [
                            self.style.color.red,
                            self.style.color.green,
                            self.style.color.blue,
                        ];
                        if ui.color_edit_button_srgb(&mut rgb).changed() {
                            self.style.color = Color::new(rgb[0], rgb[1], rgb[2]);
                        }
                        ui.monospace(format!("#{}", self.style.color.to_hex()));
                    });
                }

                ui.separator();
                ui.label("Preview:");
                ui.label(styled_text("The quick brown fox", &self.style));

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        action = Some(self.accept());
                        should_close = true;
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

    #[test]
    fn test_modes() {
        assert!(StyleMode::Font.shows_font());
        assert!(!StyleMode::Font.shows_color());
        assert!(StyleMode::Color.shows_color());
        assert!(StyleMode::Style.shows_font() && StyleMode::Style.shows_color());
    }

    #[test]
    fn test_accept_clamps_size() {
        let mut dialog = StyleDialog::new(StyleMode::Font, MessageStyle::default());
        assert!(!dialog.is_modified());

        dialog.style.size = 100.0;
        dialog.style.bold = true;
        assert!(dialog.is_modified());
        match dialog.accept() {
            DialogAction::StyleChanged(style) => {
                assert_eq!(style.size, MAX_FONT_SIZE);
                assert!(style.bold);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
