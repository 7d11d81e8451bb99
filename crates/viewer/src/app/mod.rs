//! Main application module

mod styles;

use std::time::Duration;

use eframe::egui;

use crate::actions;
use crate::client::{ApiClient, ApiEvent};
use crate::config::ViewerConfig;
use crate::scene::SceneView;
use crate::state::{AppState, Phase};
use crate::ui::controls::ControlsAction;
use crate::ui::{analysis, controls, rules_log, status_bar};
use crate::viewport::ViewportPanel;

pub struct ViewerApp {
    state: AppState,
    scene: SceneView,
    cfg: ViewerConfig,
    client: ApiClient,
    viewport: ViewportPanel,
}

impl ViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, cfg: ViewerConfig, client: ApiClient) -> Self {
        styles::configure_styles(&cc.egui_ctx);

        let scene = SceneView::new(&cfg);
        let mut viewport = ViewportPanel::new();
        if let Some(gl) = cc.gl.as_ref() {
            viewport.init_gl(gl, &scene.environment);
        }
        viewport.focus_on(scene.view_target);

        let mut state = AppState::default();
        if cfg.degraded {
            state.console.error(format!(
                "CRITICAL: Could not connect to the computation service at {}. Start the service, then use Generate to retry.",
                cfg.api_url
            ));
        } else {
            state
                .console
                .info("System ready. Service constants loaded. Use Generate to start.");
        }

        Self {
            state,
            scene,
            cfg,
            client,
            viewport,
        }
    }

    /// Fold all queued completions from the async client into state.
    fn handle_events(&mut self) {
        for event in self.client.poll() {
            match event {
                ApiEvent::Generate { seq, result } => {
                    actions::apply_generate_completion(
                        &mut self.state,
                        &mut self.scene,
                        &self.cfg,
                        seq,
                        result,
                    );
                    if self.state.session.phase == Phase::Visualized {
                        self.viewport.focus_on(self.scene.view_target);
                    }
                }
                ApiEvent::Export { result } => {
                    if let Some(bytes) = actions::apply_export_completion(&mut self.state, result)
                    {
                        self.save_csv(&bytes);
                    }
                }
            }
        }
    }

    fn save_csv(&mut self, bytes: &[u8]) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("block_coordinates.csv")
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            self.state.console.info("Export cancelled.");
            return;
        };

        match std::fs::write(&path, bytes) {
            Ok(()) => self.state.console.info(format!(
                "Coordinates exported successfully to {}",
                path.display()
            )),
            Err(e) => self.state.console.error(format!("Export Error: {e}.")),
        }
    }

    fn dispatch(&mut self, action: ControlsAction, ctx: &egui::Context) {
        match action {
            ControlsAction::Generate => {
                if let Some((seq, request)) = actions::request_generate(&mut self.state) {
                    let repaint = ctx.clone();
                    self.client
                        .generate(seq, request, move || repaint.request_repaint());
                }
            }
            ControlsAction::Reset => {
                actions::reset(&mut self.state, &mut self.scene);
            }
            ControlsAction::Export => {
                if let Some(blocks) = actions::request_export(&mut self.state) {
                    let repaint = ctx.clone();
                    self.client
                        .export_csv(blocks, move || repaint.request_repaint());
                }
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_events();

        if self.state.session.phase == Phase::Requesting {
            // Keep polling until the in-flight completion arrives.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state, &self.cfg);
            });

        // ── Left panel: controls + console ───────────────────
        let mut action = None;
        egui::SidePanel::left("controls")
            .default_width(300.0)
            .width_range(240.0..=420.0)
            .resizable(true)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(8)),
            )
            .show(ctx, |ui| {
                action = controls::show(ui, &mut self.state);
            });
        if let Some(action) = action {
            self.dispatch(action, ctx);
        }

        // ── Right panel: analysis + rules log ────────────────
        egui::SidePanel::right("analysis_panel")
            .default_width(300.0)
            .width_range(220.0..=460.0)
            .resizable(true)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(8)),
            )
            .show(ctx, |ui| {
                let total = ui.available_height();
                let analysis_height = (total * 0.45).max(120.0);

                egui::ScrollArea::vertical()
                    .id_salt("analysis_scroll")
                    .max_height(analysis_height)
                    .show(ui, |ui| {
                        analysis::show(ui, &self.state);
                    });

                ui.add_space(2.0);
                ui.separator();
                ui.add_space(2.0);

                rules_log::show(ui, &self.state);
            });

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &self.scene);
            });
    }
}
