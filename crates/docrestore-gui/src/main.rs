#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use eframe::egui;

mod app;
mod cache;
mod handlers;
mod logger;
mod ui_components;
mod views;
mod worker;

/// Desktop client for a DocRestore document-processing server
#[derive(Parser)]
#[command(
    name = "docrestore",
    about = "Browse preprocessed PDF documents page by page",
    version
)]
struct Options {
    /// Base URL of the document-processing backend
    #[arg(
        long,
        env = "DOCRESTORE_SERVER_URL",
        default_value = "http://localhost:5000"
    )]
    server_url: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::parse();

    let logger = logger::AppLogger::new(200);
    logger.clone().init()?;

    let runtime = tokio::runtime::Runtime::new()?;
    let tokio_handle = runtime.handle().clone();
    let server_url = options.server_url;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("DocRestore"),
        ..Default::default()
    };

    eframe::run_native(
        "DocRestore",
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(app::DocRestoreApp::new(
                cc,
                tokio_handle,
                server_url,
                logger,
            )))
        }),
    )?;

    Ok(())
}
