mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::scene`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use blockview_lib::actions;
pub use blockview_lib::client;
pub use blockview_lib::config;
pub use blockview_lib::geometry;
pub use blockview_lib::scene;
pub use blockview_lib::state;

use app::ViewerApp;
use client::{ApiClient, DEFAULT_API_URL};
use config::ViewerConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blockview=info".into()),
        )
        .init();

    let api_url = parse_api_url_arg().unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let client = match ApiClient::new(&api_url) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {e}");
            return;
        }
    };

    // One blocking fetch at startup; the viewer still opens when the
    // service is down, with built-in fallback constants.
    let cfg = match client.fetch_constants() {
        Ok(constants) => {
            tracing::info!("Loaded service constants from {}", client.base_url());
            ViewerConfig::from_constants(client.base_url(), &constants)
        }
        Err(e) => {
            tracing::error!("Could not load constants from {}: {e}", client.base_url());
            ViewerConfig::fallback(client.base_url())
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Block Layout Viewer")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "blockview",
        native_options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(cc, cfg, client)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_api_url_arg() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--api-url" && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
        i += 1;
    }
    None
}
