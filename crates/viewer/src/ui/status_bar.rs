use egui::Ui;

use crate::config::ViewerConfig;
use crate::state::{AppState, Phase};

pub fn show(ui: &mut Ui, state: &AppState, cfg: &ViewerConfig) {
    ui.horizontal(|ui| {
        let phase = match state.session.phase {
            Phase::Idle => "Idle",
            Phase::Requesting => "Generating...",
            Phase::Visualized => "Visualized",
            Phase::Failed => "Failed",
        };
        ui.weak(phase);

        ui.separator();
        ui.weak(format!("Blocks: {}", state.session.blocks.len()));

        ui.separator();
        ui.weak(format!("Service: {}", cfg.api_url));

        if cfg.degraded {
            ui.separator();
            ui.colored_label(
                egui::Color32::from_rgb(255, 183, 77),
                "offline constants",
            );
        }
    });
}
