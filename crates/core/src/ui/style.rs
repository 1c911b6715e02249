//! Tone → egui colour conversion and small shared widgets

use egui::{self, Color32, RichText, Ui};
use egui_phosphor::regular;

use crate::{StatusIcon, Tone};

pub fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

pub fn rgba(c: [u8; 3], alpha: f64) -> Color32 {
    Color32::from_rgba_unmultiplied(c[0], c[1], c[2], (alpha.clamp(0.0, 1.0) * 255.0) as u8)
}

pub fn tone_fg(tone: Tone) -> Color32 {
    rgb(tone.foreground())
}

pub fn tone_bg(tone: Tone) -> Color32 {
    rgb(tone.background())
}

pub fn status_icon(icon: StatusIcon) -> &'static str {
    match icon {
        StatusIcon::Check => regular::CHECK_CIRCLE,
        StatusIcon::Clock => regular::CLOCK,
        StatusIcon::Cross => regular::X_CIRCLE,
    }
}

/// Rounded pill with tone colours
pub fn pill(ui: &mut Ui, tone: Tone, text: impl Into<String>) -> egui::Response {
    egui::Frame::new()
        .fill(tone_bg(tone))
        .stroke(egui::Stroke::new(1.0, tone_fg(tone)))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text.into()).color(tone_fg(tone)).small().strong());
        })
        .response
}

/// Grey shimmer block used while data is loading
pub fn skeleton_rows(ui: &mut Ui, rows: usize, height: f32) {
    let fill = ui.visuals().widgets.inactive.bg_fill;
    for _ in 0..rows {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::hover());
        ui.painter().rect_filled(rect, 4.0, fill);
        ui.add_space(4.0);
    }
}
