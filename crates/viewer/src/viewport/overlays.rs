//! Viewport overlay drawing (axis labels, hints)

use egui::Painter;

use crate::scene::SceneView;

use super::camera::ArcBallCamera;

/// Draw axis labels just past the axis line ends
pub fn draw_axis_labels(painter: &Painter, rect: egui::Rect, camera: &ArcBallCamera) {
    let labels = [
        ([10.6_f32, 0.0, 0.0], "X", egui::Color32::from_rgb(220, 70, 70)),
        ([0.0, 10.6, 0.0], "Y", egui::Color32::from_rgb(70, 200, 70)),
        ([0.0, 0.0, 10.6], "Z", egui::Color32::from_rgb(70, 110, 220)),
    ];

    for (pos, label, color) in &labels {
        if let Some(screen) = camera.project(*pos, rect) {
            if rect.contains(screen) {
                painter.text(
                    screen,
                    egui::Align2::LEFT_BOTTOM,
                    *label,
                    egui::FontId::monospace(12.0),
                    *color,
                );
            }
        }
    }
}

/// Navigation hint, shown while the scene is empty
pub fn draw_empty_hint(painter: &Painter, rect: egui::Rect, scene: &SceneView) {
    if scene.layout.is_some() {
        return;
    }
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 20.0),
        egui::Align2::CENTER_BOTTOM,
        "Drag to orbit, right-drag to pan, scroll to zoom. Use Generate to create a layout.",
        egui::FontId::proportional(11.0),
        egui::Color32::from_rgb(120, 130, 145),
    );
}
