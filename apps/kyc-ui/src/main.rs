#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::KycApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([680.0, 520.0])
            .with_resizable(false)
            .with_title("Router KYC Automation"),
        ..Default::default()
    };

    eframe::run_native(
        "Router KYC Automation",
        options,
        Box::new(|cc| Ok(Box::new(KycApp::new(cc)))),
    )
}
