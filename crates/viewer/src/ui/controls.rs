//! Block count inputs, action buttons and the status console.

use egui::Ui;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsAction {
    Generate,
    Reset,
    Export,
}

pub fn show(ui: &mut Ui, state: &mut AppState) -> Option<ControlsAction> {
    let mut action = None;

    ui.heading("Block Counts");
    ui.add_space(4.0);

    egui::Grid::new("count_inputs")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            ui.label("Comfort");
            ui.add(egui::DragValue::new(&mut state.inputs.comfort).range(0..=50));
            ui.end_row();

            ui.label("Transparent");
            ui.add(egui::DragValue::new(&mut state.inputs.transparent).range(0..=50));
            ui.end_row();

            ui.label("Opaque");
            ui.add(egui::DragValue::new(&mut state.inputs.opaque).range(0..=50));
            ui.end_row();
        });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let generate = ui.add_enabled(
            state.session.generate_enabled(),
            egui::Button::new("Generate"),
        );
        if generate.clicked() {
            action = Some(ControlsAction::Generate);
        }

        if ui.button("Reset").clicked() {
            action = Some(ControlsAction::Reset);
        }

        let export = ui.add_enabled(
            state.session.export_enabled(),
            egui::Button::new("Export CSV"),
        );
        if export.clicked() {
            action = Some(ControlsAction::Export);
        }
    });

    ui.add_space(8.0);
    ui.separator();
    ui.label("Console");
    ui.add_space(2.0);

    egui::ScrollArea::vertical()
        .id_salt("console_scroll")
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for line in &state.console.lines {
                let color = if line.is_error {
                    egui::Color32::from_rgb(239, 83, 80)
                } else {
                    egui::Color32::from_rgb(102, 187, 106)
                };
                ui.horizontal_wrapped(|ui| {
                    ui.colored_label(color, format!("[{}]", line.timestamp));
                    ui.label(&line.text);
                });
            }
        });

    action
}
