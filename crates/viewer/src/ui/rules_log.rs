//! Rule evaluation log from the last generate run.

use egui::Ui;
use shared::RuleStatus;

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.label("Rules");
    ui.add_space(2.0);

    egui::ScrollArea::vertical()
        .id_salt("rules_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if state.rules.is_empty() {
                ui.weak("No rule results yet.");
                return;
            }

            for entry in &state.rules {
                match entry.status {
                    RuleStatus::Separator => {
                        ui.vertical_centered(|ui| {
                            ui.weak(&entry.message);
                        });
                    }
                    RuleStatus::Pass => {
                        rule_line(ui, entry, egui::Color32::from_rgb(102, 187, 106), "PASS");
                    }
                    RuleStatus::Fail => {
                        rule_line(ui, entry, egui::Color32::from_rgb(239, 83, 80), "FAIL");
                    }
                }
            }
        });
}

fn rule_line(ui: &mut Ui, entry: &shared::RuleLogEntry, color: egui::Color32, tag: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.colored_label(color, tag);
        ui.label(&entry.rule);
        ui.weak(&entry.message);
    });
}
