//! Facility detail modal

use std::collections::HashSet;

use egui::{self, Color32, RichText, Ui};
use egui_phosphor::regular;

use crate::{format_rupees, image_source, status_label, BoxDetails, BoxStatus};
use super::{pill, status_icon, tone_fg};

/// Remembers which facility images failed so they fall back to the placeholder
#[derive(Debug, Clone)]
pub struct BoxModalState {
    pub api_base_url: String,
    failed_images: HashSet<i64>,
}

impl BoxModalState {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            failed_images: HashSet::new(),
        }
    }

    pub fn image_failed(&self, box_id: i64) -> bool {
        self.failed_images.contains(&box_id)
    }

    pub fn mark_image_failed(&mut self, box_id: i64) {
        self.failed_images.insert(box_id);
    }
}

/// Render the modal. Nothing is drawn while closed or without a box.
pub fn render_box_modal(
    ctx: &egui::Context,
    open: &mut bool,
    details: Option<&BoxDetails>,
    state: &mut BoxModalState,
) {
    let Some(details) = details else {
        return;
    };
    if !*open {
        return;
    }

    let mut keep_open = true;
    let mut close_clicked = false;

    egui::Window::new(details.name.as_str())
        .id(egui::Id::new(("box_modal", details.id)))
        .open(&mut keep_open)
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(720.0)
        .show(ctx, |ui| {
            let status = BoxStatus::parse(&details.status);
            ui.horizontal(|ui| {
                pill(ui, status.tone(), format!("{} {}", status_icon(status.icon()), status_label(&details.status)));
            });
            ui.separator();

            egui::ScrollArea::vertical().max_height(560.0).show(ui, |ui| {
                render_image(ui, details, state);
                render_basic_info(ui, details);
                render_sections(ui, details);
            });

            ui.separator();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });
        });

    *open = keep_open && !close_clicked;
}

fn render_image(ui: &mut Ui, details: &BoxDetails, state: &mut BoxModalState) {
    let failed = state.image_failed(details.id);
    let Some(url) = image_source(details.image.as_deref(), &state.api_base_url, failed) else {
        return;
    };

    let size = egui::vec2(ui.available_width(), 256.0);
    let image = egui::Image::new(url)
        .fit_to_exact_size(size)
        .corner_radius(8.0);

    if !failed && image.load_for_size(ui.ctx(), size).is_err() {
        tracing::debug!(box_id = details.id, "box image failed to load, using placeholder");
        state.mark_image_failed(details.id);
        ui.ctx().request_repaint();
    }

    ui.add(image);
    ui.add_space(12.0);
}

fn info_tile(ui: &mut Ui, icon: &str, color: Color32, title: &str, value: String) {
    egui::Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .corner_radius(6.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_min_width(180.0);
            ui.label(RichText::new(format!("{} {}", icon, title)).color(color).strong());
            ui.label(value);
        });
}

fn render_basic_info(ui: &mut Ui, details: &BoxDetails) {
    ui.horizontal_wrapped(|ui| {
        info_tile(ui, regular::MAP_PIN, Color32::from_rgb(59, 130, 246), "Location", details.location.clone());
        info_tile(ui, regular::CURRENCY_INR, Color32::from_rgb(16, 185, 129), "Price", format!("{}/hour", format_rupees(details.price)));
        info_tile(ui, regular::USERS, Color32::from_rgb(139, 92, 246), "Capacity", format!("{} people", details.capacity));
        if let Some(rating) = details.avg_rating {
            info_tile(ui, regular::STAR, Color32::from_rgb(245, 158, 11), "Rating", format!("{}/5", rating));
        }
        if let Some(created) = details.created_at {
            info_tile(ui, regular::CALENDAR, Color32::from_rgb(99, 102, 241), "Created", created.format("%d/%m/%Y").to_string());
        }
    });
    ui.add_space(12.0);
}

fn text_section(ui: &mut Ui, title: &str, body: Option<&str>) {
    let Some(body) = body.filter(|b| !b.trim().is_empty()) else {
        return;
    };
    ui.heading(title);
    ui.label(body);
    ui.add_space(12.0);
}

fn render_sections(ui: &mut Ui, details: &BoxDetails) {
    if !details.sports.is_empty() {
        ui.heading("Available Sports");
        ui.horizontal_wrapped(|ui| {
            for sport in &details.sports {
                pill(ui, crate::Tone::Info, sport.as_str());
            }
        });
        ui.add_space(12.0);
    }

    if !details.amenities.is_empty() {
        ui.heading("Amenities");
        let amenity_color = tone_fg(crate::Tone::Success);
        egui::Grid::new(("amenities", details.id))
            .num_columns(3)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                for (i, amenity) in details.amenities.iter().enumerate() {
                    ui.label(RichText::new(format!("{} {}", regular::CHECK_CIRCLE, amenity)).color(amenity_color));
                    if i % 3 == 2 {
                        ui.end_row();
                    }
                }
            });
        ui.add_space(12.0);
    }

    text_section(ui, "Description", details.description.as_deref());
    text_section(ui, "Full Description", details.full_description.as_deref());
    text_section(ui, "Rules", details.rules.as_deref());
    text_section(ui, "Contact Information", details.contact_info.as_deref());

    if details.has_coordinates() {
        ui.heading("Coordinates");
        ui.horizontal(|ui| {
            if let Some(lat) = details.latitude {
                ui.label(RichText::new("Latitude:").color(Color32::GRAY));
                ui.label(format!("{}", lat));
            }
            if let Some(lng) = details.longitude {
                ui.label(RichText::new("Longitude:").color(Color32::GRAY));
                ui.label(format!("{}", lng));
            }
        });
    }
}
