//! Application style configuration

use eframe::egui;

pub fn configure_styles(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    // Dark theme matching the viewport background
    style.visuals = egui::Visuals::dark();

    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.visuals.menu_corner_radius = egui::CornerRadius::same(4);
    style.visuals.widgets.noninteractive.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(3);

    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);

    style.visuals.panel_fill = egui::Color32::from_rgb(24, 32, 46);
    style.visuals.window_fill = egui::Color32::from_rgb(30, 41, 59);
    style.visuals.selection.bg_fill = egui::Color32::from_rgb(40, 80, 140);

    ctx.set_style(style);
}
