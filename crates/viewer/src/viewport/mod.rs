//! 3D viewport panel with OpenGL rendering

mod camera;
mod gl_renderer;
mod overlays;

use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::scene::{EnvironmentSet, SceneView};
use camera::ArcBallCamera;
use gl_renderer::GlRenderer;

/// Viewport background, matching the panel theme.
const BG_COLOR: [u8; 3] = [30, 41, 59];

pub struct ViewportPanel {
    camera: ArcBallCamera,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            camera: ArcBallCamera::new(),
            gl_renderer: None,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context, environment: &EnvironmentSet) {
        let renderer = GlRenderer::new(gl, &environment.grid, &environment.axes);
        self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
    }

    /// Point the orbit camera at a target
    pub fn focus_on(&mut self, target: glam::Vec3) {
        self.camera.target = target;
    }

    pub fn show(&mut self, ui: &mut Ui, scene: &SceneView) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        // ── Camera controls ─────────────────────────────────
        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            self.camera.rotate(-delta.x * 0.5, delta.y * 0.5);
        }
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            let delta = response.drag_delta();
            let scale = self.camera.distance * 0.002;
            self.camera.pan(-delta.x * scale, delta.y * scale);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.01);
            }
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        // ── GL rendering ────────────────────────────────────
        self.render_gl(ui, rect, scene);

        // ── Overlays ────────────────────────────────────────
        let painter = ui.painter_at(rect);
        overlays::draw_axis_labels(&painter, rect, &self.camera);
        overlays::draw_empty_hint(&painter, rect, scene);
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, scene: &SceneView) {
        let Some(gl_renderer) = &self.gl_renderer else {
            return;
        };

        let renderer_clone = gl_renderer.clone();
        let camera_yaw = self.camera.yaw;
        let camera_pitch = self.camera.pitch;
        let camera_distance = self.camera.distance;
        let camera_target = self.camera.target;
        let camera_fov = self.camera.fov;

        let layout = scene.layout.clone();
        let version = scene.version();

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();

                let camera = ArcBallCamera {
                    yaw: camera_yaw,
                    pitch: camera_pitch,
                    distance: camera_distance,
                    target: camera_target,
                    fov: camera_fov,
                };

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = renderer_clone.lock() {
                    r.sync_layout(gl, layout.as_ref(), version);

                    let render_params = gl_renderer::RenderParams {
                        viewport,
                        bg_color: BG_COLOR,
                    };
                    r.paint(gl, &camera, &render_params);
                }
            })),
        };

        ui.painter().add(callback);
    }
}
