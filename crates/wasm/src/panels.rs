//! UI panel rendering for WasmApp

use bookmybox_core::pill;
use eframe::egui;
use egui_phosphor::regular;

use crate::app::WasmApp;

impl WasmApp {
    // ========================================================================
    // Top Panel
    // ========================================================================

    pub fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("{} BookMyBox", regular::CUBE));
                ui.separator();

                if let Some(status) = &self.status {
                    ui.colored_label(egui::Color32::YELLOW, format!("{} {}", regular::WARNING, status));
                }

                let Some(user) = self.session.user().cloned() else {
                    return;
                };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(format!("{} Logout", regular::SIGN_OUT)).clicked() {
                        if let Err(e) = self.session.logout() {
                            self.status = Some(e.to_string());
                        }
                        self.dashboard.reset();
                        self.auth_screen = Default::default();
                    }
                    pill(ui, bookmybox_core::Tone::Info, user.role.label());
                    ui.label(format!("{} {}", regular::USER, user.name));
                });
            });
        });
    }

    // ========================================================================
    // Central Panel
    // ========================================================================

    pub fn render_login(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.set_max_width(360.0);
                    if self.auth_screen.show(ui, &mut self.session, &self.demo_accounts).is_some() {
                        self.dashboard.reset();
                    }
                });
            });
        });
    }

    pub fn render_dashboard(&mut self, ctx: &egui::Context) {
        let Some(user) = self.session.user().cloned() else {
            return;
        };
        egui::CentralPanel::default().show(ctx, |ui| {
            self.dashboard.show(ctx, ui, &user);
        });
    }
}
