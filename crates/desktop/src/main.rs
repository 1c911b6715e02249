// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod logging;
mod storage;

use app::BookMyBoxApp;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let config = Config::load();
    logging::init(&config.log_level);
    tracing::info!(api_base_url = %config.api_base_url, "starting BookMyBox desktop");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "BookMyBox",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(BookMyBoxApp::new(config)))
        }),
    )
}
