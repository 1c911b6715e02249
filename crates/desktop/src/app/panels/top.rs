//! Top bar - account info, logout and settings

use eframe::egui;
use egui_phosphor::regular;
use bookmybox_core::{pill, Role, Tone};

use crate::app::BookMyBoxApp;

fn role_tone(role: Role) -> Tone {
    match role {
        Role::User => Tone::Info,
        Role::Owner => Tone::Success,
        Role::Admin => Tone::Accent,
    }
}

impl BookMyBoxApp {
    pub(crate) fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("{} BookMyBox", regular::CUBE));
                ui.separator();

                if let Some(status) = &self.status {
                    ui.label(egui::RichText::new(format!("{} {}", regular::WARNING, status)).color(egui::Color32::YELLOW));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(regular::GEAR).on_hover_text("Settings").clicked() {
                        self.show_settings = true;
                    }

                    let Some(user) = self.session.user().cloned() else {
                        return;
                    };
                    if ui.button(format!("{} Logout", regular::SIGN_OUT)).clicked() {
                        self.logout();
                    }
                    pill(ui, role_tone(user.role), user.role.label());
                    ui.label(egui::RichText::new(&user.name).strong());
                    ui.label(egui::RichText::new(user.initials()).monospace().strong());
                });
            });
        });

        self.render_settings_window(ctx);
    }

    fn logout(&mut self) {
        match self.session.logout() {
            Ok(()) => self.status = None,
            Err(e) => self.status = Some(e.to_string()),
        }
        self.dashboard.reset();
        self.auth_screen = Default::default();
    }

    fn render_settings_window(&mut self, ctx: &egui::Context) {
        let mut show_settings = self.show_settings;

        egui::Window::new(format!("{} Settings", regular::GEAR))
            .open(&mut show_settings)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                    ui.label("API base URL:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.config.api_base_url)
                            .desired_width(260.0)
                            .hint_text("http://localhost:8000"),
                    );
                    ui.end_row();

                    ui.label("Session file:");
                    ui.label(self.session.storage().path().display().to_string());
                    ui.end_row();

                    ui.label("Log level:");
                    ui.text_edit_singleline(&mut self.config.log_level);
                    ui.end_row();
                });

                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("API and log level changes apply on next launch.")
                        .small()
                        .color(egui::Color32::GRAY),
                );
                if ui.button(format!("{} Save", regular::FLOPPY_DISK)).clicked() {
                    if let Err(e) = self.config.save() {
                        self.status = Some(e.to_string());
                    }
                }
            });

        self.show_settings = show_settings;
    }
}
