use eframe::egui;

use crate::app::BookMyBoxApp;

impl BookMyBoxApp {
    pub(crate) fn render_dashboard_panel(&mut self, ctx: &egui::Context) {
        let Some(user) = self.session.user().cloned() else {
            return;
        };
        egui::CentralPanel::default().show(ctx, |ui| {
            self.dashboard.show(ctx, ui, &user);
        });
    }
}
