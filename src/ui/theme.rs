//! Colors and global egui styling.

use eframe::egui::{self, Color32, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

use crate::config::{FontFamilyChoice, MessageStyle};
use crate::logging::Severity;

/// Palette for contact names, picked by hashing the account.
const CONTACT_COLORS: [Color32; 12] = [
    Color32::from_rgb(231, 76, 60),   // red
    Color32::from_rgb(46, 204, 113),  // emerald
    Color32::from_rgb(52, 152, 219),  // blue
    Color32::from_rgb(155, 89, 182),  // amethyst
    Color32::from_rgb(241, 196, 15),  // sunflower
    Color32::from_rgb(230, 126, 34),  // carrot
    Color32::from_rgb(26, 188, 156),  // turquoise
    Color32::from_rgb(236, 100, 166), // pink
    Color32::from_rgb(41, 128, 185),  // belize
    Color32::from_rgb(39, 174, 96),   // nephritis
    Color32::from_rgb(243, 156, 18),  // orange
    Color32::from_rgb(22, 160, 133),  // green sea
];

/// Stable color for an account (FNV-1a over its bytes).
pub fn contact_color(account: &str) -> Color32 {
    let mut hash: u64 = 1469598103934665603u64;
    for b in account.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211u64);
    }
    CONTACT_COLORS[(hash as usize) % CONTACT_COLORS.len()]
}

pub fn severity_color(severity: Severity) -> Color32 {
    match severity {
        Severity::Debug => Color32::from_rgb(140, 140, 150),
        Severity::Info => Color32::from_rgb(52, 152, 219),
        Severity::Warning => Color32::from_rgb(243, 156, 18),
        Severity::Error => Color32::from_rgb(231, 76, 60),
        Severity::Critical => Color32::from_rgb(192, 57, 43),
    }
}

/// Text styles: egui defaults scaled up slightly, plus a named style for
/// dialog headlines.
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(10.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(16.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
        (TextStyle::Name("dialog_icon".into()), FontId::new(32.0, Proportional)),
    ]
    .into()
}

/// Apply spacing, button and input styling to the egui context.
pub fn apply_app_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = configure_text_styles();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(6);
    style.visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(88, 101, 242, 100);

    ctx.set_style(style);
}

/// Switch between the dark and light visuals, then reapply app styling.
pub fn apply_theme(ctx: &egui::Context, theme: &str) {
    match theme {
        "light" => ctx.set_visuals(egui::Visuals::light()),
        _ => ctx.set_visuals(egui::Visuals::dark()),
    }
    apply_app_style(ctx);
}

/// Render `text` the way outgoing messages will look with `style`.
pub fn styled_text(text: &str, style: &MessageStyle) -> egui::RichText {
    let family = match style.family {
        FontFamilyChoice::Proportional => FontFamily::Proportional,
        FontFamilyChoice::Monospace => FontFamily::Monospace,
    };
    let color = Color32::from_rgb(style.color.red, style.color.green, style.color.blue);

    let mut rich = egui::RichText::new(text)
        .font(FontId::new(style.size, family))
        .color(color);
    if style.bold {
        rich = rich.strong();
    }
    if style.italic {
        rich = rich.italics();
    }
    if style.underline {
        rich = rich.underline();
    }
    if style.strike {
        rich = rich.strikethrough();
    }
    rich
}
