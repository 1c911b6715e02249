//! Sign-in screen shown while no session is active

use eframe::egui;
use tracing::info;

use crate::app::BookMyBoxApp;

impl BookMyBoxApp {
    pub(crate) fn render_auth_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(48.0);
                egui::Frame::new()
                    .fill(ui.visuals().extreme_bg_color)
                    .corner_radius(10.0)
                    .inner_margin(24.0)
                    .show(ui, |ui| {
                        ui.set_max_width(380.0);
                        if let Some(user) = self.auth_screen.show(ui, &mut self.session, &self.demo_accounts) {
                            info!(role = user.role.label(), "signed in from desktop");
                            self.dashboard.reset();
                        }
                    });
            });
        });
    }
}
