//! Headless test harness: drives the full session orchestration without a
//! window or a network, by injecting completions where the async client
//! would deliver them.

use shared::{GenerateRequest, GenerateResponse, ModuleBlock};

use crate::actions;
use crate::config::ViewerConfig;
use crate::fixtures;
use crate::scene::SceneView;
use crate::state::{AppState, Phase};

pub struct TestHarness {
    pub state: AppState,
    pub scene: SceneView,
    pub cfg: ViewerConfig,
    pending_generate: Option<(u64, GenerateRequest)>,
}

impl TestHarness {
    /// Harness with the canned service constants loaded.
    pub fn new() -> Self {
        let cfg = ViewerConfig::from_constants("http://localhost:5000", &fixtures::constants());
        Self::with_config(cfg)
    }

    pub fn with_config(cfg: ViewerConfig) -> Self {
        let scene = SceneView::new(&cfg);
        Self {
            state: AppState::default(),
            scene,
            cfg,
            pending_generate: None,
        }
    }

    // ── User actions ──────────────────────────────────────────

    /// Press Generate. Returns true when a request actually went out.
    pub fn click_generate(&mut self) -> bool {
        match actions::request_generate(&mut self.state) {
            Some(pending) => {
                self.pending_generate = Some(pending);
                true
            }
            None => false,
        }
    }

    pub fn click_reset(&mut self) {
        actions::reset(&mut self.state, &mut self.scene);
    }

    /// Press Export. Returns the blocks that would be sent, if any.
    pub fn click_export(&mut self) -> Option<Vec<ModuleBlock>> {
        actions::request_export(&mut self.state)
    }

    // ── Injected completions ──────────────────────────────────

    /// Body of the request currently in flight.
    pub fn pending_request(&self) -> Option<&GenerateRequest> {
        self.pending_generate.as_ref().map(|(_, req)| req)
    }

    /// Sequence number of the request currently in flight.
    pub fn pending_seq(&self) -> Option<u64> {
        self.pending_generate.as_ref().map(|(seq, _)| *seq)
    }

    /// Deliver the completion for the in-flight request.
    pub fn complete_generate(&mut self, result: Result<GenerateResponse, String>) {
        if let Some((seq, _)) = self.pending_generate.take() {
            self.deliver_generate(seq, result);
        }
    }

    /// Deliver a completion with an explicit sequence number, e.g. one that
    /// has already been orphaned.
    pub fn deliver_generate(&mut self, seq: u64, result: Result<GenerateResponse, String>) {
        actions::apply_generate_completion(&mut self.state, &mut self.scene, &self.cfg, seq, result);
    }

    pub fn complete_export(&mut self, result: Result<Vec<u8>, String>) -> Option<Vec<u8>> {
        actions::apply_export_completion(&mut self.state, result)
    }

    // ── Observations ──────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.state.session.phase
    }

    pub fn export_enabled(&self) -> bool {
        self.state.session.export_enabled()
    }

    pub fn block_count(&self) -> usize {
        self.scene
            .layout
            .as_ref()
            .map(|l| l.block_count)
            .unwrap_or(0)
    }

    pub fn last_console_line(&self) -> Option<&str> {
        self.state.console.last().map(|l| l.text.as_str())
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
