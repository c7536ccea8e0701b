//! Emoticon picker popup.
//!
//! Opens at the pointer and hides itself shortly after the pointer leaves
//! it, unless the pointer comes back first.

use eframe::egui;
use std::time::Instant;

use super::DialogAction;
use crate::emotes::{emote_rows, Emote};
use crate::timer::AutoHideTimer;

pub struct EmotePicker {
    pub columns: usize,
    rows: Vec<Vec<&'static Emote>>,
    position: Option<egui::Pos2>,
    pointer_inside: bool,
    timer: AutoHideTimer,
}

impl EmotePicker {
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            rows: emote_rows(columns),
            position: None,
            pointer_inside: false,
            timer: AutoHideTimer::default(),
        }
    }

    pub fn rows(&self) -> &[Vec<&'static Emote>] {
        &self.rows
    }

    /// Track pointer enter/leave. Leaving arms the hide timer, coming back
    /// cancels it. Returns `true` if the picker should hide now.
    pub fn update_hover(&mut self, inside: bool, now: Instant) -> bool {
        if inside != self.pointer_inside {
            self.pointer_inside = inside;
            if inside {
                self.timer.cancel();
            } else {
                self.timer.arm(now);
            }
        }
        self.timer.poll(now)
    }

    pub fn is_hide_pending(&self) -> bool {
        self.timer.is_armed()
    }

    /// Render the picker.
    /// Returns the chosen emote (which also closes it); the second value is
    /// whether the picker is still open.
    pub fn render(&mut self, ctx: &egui::Context) -> (Option<DialogAction>, bool) {
        let mut action: Option<DialogAction> = None;

        let position = *self.position.get_or_insert_with(|| {
            ctx.input(|i| i.pointer.hover_pos())
                .unwrap_or_else(|| ctx.screen_rect().center())
        });

        let area = egui::Area::new(egui::Id::new("emote_picker"))
            .order(egui::Order::Foreground)
            .fixed_pos(position)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    egui::Grid::new("emote_grid")
                        .spacing([2.0, 2.0])
                        .show(ui, |ui| {
                            for row in &self.rows {
                                for emote in row {
                                    let button = egui::Button::new(
                                        egui::RichText::new(emote.glyph).size(20.0),
                                    )
                                    .frame(false);
                                    if ui
                                        .add(button)
                                        .on_hover_text(format!("{} {}", emote.name, emote.shortcut))
                                        .clicked()
                                    {
                                        action = Some(DialogAction::EmoteSelected(
                                            emote.shortcut.to_string(),
                                        ));
                                    }
                                }
                                ui.end_row();
                            }
                        });
                });
            });

        if action.is_some() {
            return (action, false);
        }

        let now = Instant::now();
        let inside = ctx
            .input(|i| i.pointer.hover_pos())
            .is_some_and(|pos| area.response.rect.contains(pos));
        if self.update_hover(inside, now) {
            return (None, false);
        }
        if let Some(remaining) = self.timer.remaining(now) {
            ctx.request_repaint_after(remaining);
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            return (None, false);
        }

        (None, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::AUTO_HIDE_DELAY;
    use std::time::Duration;

    #[test]
    fn test_layout_uses_columns() {
        let picker = EmotePicker::new(4);
        assert!(picker.rows().iter().all(|row| row.len() <= 4));
        assert_eq!(picker.rows()[0].len(), 4);
    }

    #[test]
    fn test_hides_after_pointer_leaves() {
        let mut picker = EmotePicker::new(8);
        let start = Instant::now();

        assert!(!picker.update_hover(true, start));
        assert!(!picker.update_hover(false, start));
        assert!(picker.is_hide_pending());
        assert!(!picker.update_hover(false, start + Duration::from_millis(100)));
        assert!(picker.update_hover(false, start + AUTO_HIDE_DELAY));
    }

    #[test]
    fn test_reentry_cancels_hide() {
        let mut picker = EmotePicker::new(8);
        let start = Instant::now();

        picker.update_hover(true, start);
        picker.update_hover(false, start);
        assert!(!picker.update_hover(true, start + Duration::from_millis(200)));
        assert!(!picker.is_hide_pending());
        assert!(!picker.update_hover(true, start + Duration::from_secs(2)));
    }

    #[test]
    fn test_never_entered_does_not_hide() {
        let mut picker = EmotePicker::new(8);
        let later = Instant::now() + Duration::from_secs(5);
        assert!(!picker.update_hover(false, later));
    }
}
