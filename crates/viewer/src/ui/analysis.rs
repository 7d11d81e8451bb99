//! Summary analysis of the visualized layout.

use egui::Ui;

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.heading("Analysis");
    ui.add_space(4.0);

    let Some(analysis) = &state.analysis else {
        ui.weak("No layout. Generate a configuration first.");
        return;
    };

    let params = &analysis.parameters;
    egui::Grid::new("analysis_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            metric_row(ui, "Max width", params.w_max.as_deref());
            metric_row(ui, "Max length", params.l_max.as_deref());
            metric_row(ui, "Max height", params.h_max.as_deref());
            metric_row(ui, "Volume", params.volume.as_deref());

            ui.label("COG");
            ui.label(format_cog(&analysis.cog));
            ui.end_row();

            ui.label("Main front");
            ui.label(analysis.main_front.as_str());
            ui.end_row();
        });

    if !analysis.facade_areas.is_empty() {
        ui.add_space(6.0);
        ui.label("Facade areas");
        let mut directions: Vec<_> = analysis.facade_areas.iter().collect();
        directions.sort_by(|a, b| a.0.cmp(b.0));
        egui::Grid::new("facade_grid")
            .num_columns(2)
            .spacing([12.0, 2.0])
            .show(ui, |ui| {
                for (direction, area) in directions {
                    ui.weak(direction);
                    ui.label(area);
                    ui.end_row();
                }
            });
    }
}

fn metric_row(ui: &mut Ui, label: &str, value: Option<&str>) {
    ui.label(label);
    match value {
        Some(v) => ui.label(v),
        None => ui.weak("N/A"),
    };
    ui.end_row();
}

fn format_cog(cog: &shared::Cog) -> String {
    match (cog.x, cog.y, cog.z) {
        (Some(x), Some(y), Some(z)) => format!("({x:.2}, {y:.2}, {z:.2}) m"),
        _ => "N/A".to_string(),
    }
}
