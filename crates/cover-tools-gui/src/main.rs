#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod logger;
mod preview;
mod ui_components;
mod views;
mod worker;

fn main() -> eframe::Result<()> {
    let logger = logger::AppLogger::new(256);
    if let Err(e) = logger.clone().init() {
        eprintln!("Failed to install logger: {e}");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime");
    let tokio_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Cover Tools"),
        ..Default::default()
    };

    eframe::run_native(
        "Cover Tools",
        options,
        Box::new(move |cc| Ok(Box::new(app::CoverToolsApp::new(cc, tokio_handle, logger)))),
    )
}
