//! Session orchestration, independent of any UI toolkit.
//!
//! The app shell and the headless test harness both drive the session
//! through these functions: `request_*` validates state and produces the
//! outgoing call, `apply_*_completion` folds the asynchronous result back
//! into state and scene.

use shared::{GenerateRequest, GenerateResponse, ModuleBlock};

use crate::config::ViewerConfig;
use crate::scene::SceneView;
use crate::state::{AppState, InputCounts};

/// Validate inputs and open a new generate session. Returns the sequence
/// number and request body to send, or `None` when nothing should be sent.
pub fn request_generate(state: &mut AppState) -> Option<(u64, GenerateRequest)> {
    if !state.session.generate_enabled() {
        return None;
    }
    let Some(request) = state.inputs.validate() else {
        state.console.error("Input counts cannot be negative.");
        return None;
    };
    let seq = state.session.begin_request();
    state
        .console
        .info("Generating configuration (up to 1000 attempts)...");
    Some((seq, request))
}

/// Fold a generate completion into state and scene. Completions whose
/// sequence number is no longer current are dropped.
pub fn apply_generate_completion(
    state: &mut AppState,
    scene: &mut SceneView,
    cfg: &ViewerConfig,
    seq: u64,
    result: Result<GenerateResponse, String>,
) {
    if !state.session.accepts(seq) {
        tracing::debug!(seq, "dropping stale generate completion");
        return;
    }

    match result {
        Ok(response) => {
            if response.success {
                state.console.info(response.console);
            } else {
                state.console.error(response.console);
            }
            state.rules = response.log;

            if response.success {
                scene.rebuild(&response.coords, &response.analysis, cfg);
                state.analysis = Some(response.analysis);
                state.session.complete_success(response.coords);
            } else {
                scene.clear();
                state.analysis = None;
                state.session.complete_failure();
            }
        }
        Err(message) => {
            state.console.error(format!(
                "API error: {message}. Ensure the computation service is running at {}.",
                cfg.api_url
            ));
            // The previous visualization stays on screen, but export is
            // disabled until a fresh success.
            state.session.complete_failure();
        }
    }
}

/// Return inputs to their defaults and clear the whole session.
pub fn reset(state: &mut AppState, scene: &mut SceneView) {
    state.inputs = InputCounts::default();
    state.session.reset();
    state.rules.clear();
    state.analysis = None;
    scene.clear();
    state
        .console
        .info("Input fields reset to default (5, 3, 1). Scene cleared.");
}

/// Blocks to send to the export endpoint, or `None` (with a console error)
/// when there is no exportable layout.
pub fn request_export(state: &mut AppState) -> Option<Vec<ModuleBlock>> {
    if !state.session.export_enabled() {
        state.console.error("No valid configuration to export.");
        return None;
    }
    Some(state.session.blocks.clone())
}

/// Fold an export completion: CSV bytes ready to be saved, or `None` after
/// logging the service error.
pub fn apply_export_completion(
    state: &mut AppState,
    result: Result<Vec<u8>, String>,
) -> Option<Vec<u8>> {
    match result {
        Ok(bytes) => Some(bytes),
        Err(message) => {
            state.console.error(format!("Export Error: {message}."));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;
    use shared::{AnalysisResult, RuleLogEntry, RuleStatus};

    fn setup() -> (AppState, SceneView, ViewerConfig) {
        let cfg = ViewerConfig::fallback("http://localhost:5000");
        let scene = SceneView::new(&cfg);
        (AppState::default(), scene, cfg)
    }

    fn success_response() -> GenerateResponse {
        GenerateResponse {
            success: true,
            console: "SUCCESS! Valid configuration found.".into(),
            log: vec![RuleLogEntry {
                rule: "2.1 Block Count".into(),
                status: RuleStatus::Pass,
                message: "Status: True".into(),
            }],
            coords: vec![ModuleBlock {
                id: 1,
                block_type: "Comfort".into(),
                x: 1,
                y: 1,
                z: 1,
                dx: 2,
                dy: 2,
                dz: 1,
            }],
            analysis: AnalysisResult::default(),
        }
    }

    #[test]
    fn negative_inputs_never_produce_a_request() {
        let (mut state, _, _) = setup();
        state.inputs.opaque = -2;
        assert!(request_generate(&mut state).is_none());
        assert_eq!(state.session.phase, Phase::Idle);
        assert!(state.console.last().unwrap().is_error);
    }

    #[test]
    fn second_request_suppressed_while_first_in_flight() {
        let (mut state, _, _) = setup();
        assert!(request_generate(&mut state).is_some());
        assert!(request_generate(&mut state).is_none());
    }

    #[test]
    fn stale_completion_is_dropped() {
        let (mut state, mut scene, cfg) = setup();
        let (old_seq, _) = request_generate(&mut state).unwrap();
        reset(&mut state, &mut scene);
        let console_len = state.console.lines.len();

        apply_generate_completion(&mut state, &mut scene, &cfg, old_seq, Ok(success_response()));

        assert_eq!(state.session.phase, Phase::Idle);
        assert!(scene.layout.is_none());
        assert_eq!(state.console.lines.len(), console_len);
    }

    #[test]
    fn success_builds_scene_and_enables_export() {
        let (mut state, mut scene, cfg) = setup();
        let (seq, _) = request_generate(&mut state).unwrap();
        apply_generate_completion(&mut state, &mut scene, &cfg, seq, Ok(success_response()));

        assert_eq!(state.session.phase, Phase::Visualized);
        assert!(state.session.export_enabled());
        assert_eq!(scene.layout.as_ref().unwrap().block_count, 1);
        assert_eq!(state.rules.len(), 1);
        assert!(state.analysis.is_some());
    }

    #[test]
    fn domain_failure_clears_scene_and_keeps_rules() {
        let (mut state, mut scene, cfg) = setup();
        let (seq, _) = request_generate(&mut state).unwrap();
        apply_generate_completion(&mut state, &mut scene, &cfg, seq, Ok(success_response()));

        let (seq, _) = request_generate(&mut state).unwrap();
        let failure = GenerateResponse {
            success: false,
            console: "FAILURE! No valid configuration found after 1000 attempts.".into(),
            log: vec![RuleLogEntry {
                rule: "Separator".into(),
                status: RuleStatus::Separator,
                message: "--- End of Attempt 1000 (Invalid) ---".into(),
            }],
            ..GenerateResponse::default()
        };
        apply_generate_completion(&mut state, &mut scene, &cfg, seq, Ok(failure));

        assert_eq!(state.session.phase, Phase::Failed);
        assert!(scene.layout.is_none());
        assert!(state.analysis.is_none());
        assert_eq!(state.rules.len(), 1);
        assert!(!state.session.export_enabled());
        assert!(state.console.last().unwrap().is_error);
    }

    #[test]
    fn transport_error_logs_diagnostic_with_service_url() {
        let (mut state, mut scene, cfg) = setup();
        let (seq, _) = request_generate(&mut state).unwrap();
        apply_generate_completion(
            &mut state,
            &mut scene,
            &cfg,
            seq,
            Err("connection refused".into()),
        );

        assert_eq!(state.session.phase, Phase::Failed);
        let line = state.console.last().unwrap();
        assert!(line.is_error);
        assert!(line.text.contains("connection refused"));
        assert!(line.text.contains("http://localhost:5000"));
    }

    #[test]
    fn export_requires_visualized_layout() {
        let (mut state, _, _) = setup();
        assert!(request_export(&mut state).is_none());
        assert!(state.console.last().unwrap().is_error);
    }

    #[test]
    fn export_completion_paths() {
        let (mut state, _, _) = setup();
        let bytes = apply_export_completion(&mut state, Ok(b"id,type\n".to_vec()));
        assert_eq!(bytes.as_deref(), Some(b"id,type\n".as_slice()));

        let none = apply_export_completion(&mut state, Err("No coordinates provided".into()));
        assert!(none.is_none());
        assert!(state
            .console
            .last()
            .unwrap()
            .text
            .contains("No coordinates provided"));
    }
}
