//! Integration tests for the generate/reset/export session, driven through
//! the headless harness with canned service responses.

use blockview_lib::fixtures;
use blockview_lib::harness::TestHarness;
use blockview_lib::state::Phase;

#[test]
fn generate_success_full_cycle() {
    let mut h = TestHarness::new();
    assert_eq!(h.phase(), Phase::Idle);

    assert!(h.click_generate());
    assert_eq!(h.phase(), Phase::Requesting);
    let request = h.pending_request().unwrap();
    assert_eq!(request.comfort, 5);
    assert_eq!(request.transparent, 3);
    assert_eq!(request.opaque, 1);

    h.complete_generate(Ok(fixtures::success_response()));
    assert_eq!(h.phase(), Phase::Visualized);
    assert_eq!(h.block_count(), 9);
    assert!(h.export_enabled());
    assert!(h.last_console_line().unwrap().starts_with("SUCCESS!"));

    let layout = h.scene.layout.as_ref().unwrap();
    assert!(layout.cog.is_some());
    assert!(layout.front.is_some());
    assert_eq!(h.state.rules.len(), 5);
    assert!(h.state.analysis.is_some());
}

#[test]
fn generate_failure_clears_previous_layout() {
    let mut h = TestHarness::new();
    h.click_generate();
    h.complete_generate(Ok(fixtures::success_response()));
    assert_eq!(h.block_count(), 9);

    h.click_generate();
    h.complete_generate(Ok(fixtures::failure_response()));
    assert_eq!(h.phase(), Phase::Failed);
    assert_eq!(h.block_count(), 0);
    assert!(!h.export_enabled());
    assert!(h.state.analysis.is_none());
    // The failing rule log replaces the previous one.
    assert_eq!(h.state.rules.len(), 3);
    assert!(h.last_console_line().unwrap().starts_with("FAILURE!"));
}

#[test]
fn transport_error_reports_service_url() {
    let mut h = TestHarness::new();
    h.click_generate();
    h.complete_generate(Err("connection refused".into()));

    assert_eq!(h.phase(), Phase::Failed);
    assert!(!h.export_enabled());
    let line = h.last_console_line().unwrap();
    assert!(line.contains("connection refused"));
    assert!(line.contains(&h.cfg.api_url));
}

#[test]
fn reset_restores_defaults_and_clears_scene() {
    let mut h = TestHarness::new();
    h.state.inputs.comfort = 9;
    h.click_generate();
    h.complete_generate(Ok(fixtures::success_response()));

    h.click_reset();
    assert_eq!(h.phase(), Phase::Idle);
    assert_eq!(h.state.inputs.comfort, 5);
    assert_eq!(h.block_count(), 0);
    assert!(h.state.rules.is_empty());
    assert!(h.state.analysis.is_none());
    assert!(!h.export_enabled());
}

#[test]
fn stale_response_after_reset_is_ignored() {
    let mut h = TestHarness::new();
    h.click_generate();
    let orphaned_seq = h.pending_seq().unwrap();
    h.click_reset();

    h.deliver_generate(orphaned_seq, Ok(fixtures::success_response()));
    assert_eq!(h.phase(), Phase::Idle);
    assert_eq!(h.block_count(), 0);
    assert!(!h.export_enabled());
}

#[test]
fn stale_response_after_newer_request_is_ignored() {
    let mut h = TestHarness::new();
    h.click_generate();
    let first_seq = h.pending_seq().unwrap();
    h.click_reset();
    h.click_generate();

    // The old completion arrives late and must not complete the new session.
    h.deliver_generate(first_seq, Ok(fixtures::failure_response()));
    assert_eq!(h.phase(), Phase::Requesting);

    h.complete_generate(Ok(fixtures::success_response()));
    assert_eq!(h.phase(), Phase::Visualized);
    assert_eq!(h.block_count(), 9);
}

#[test]
fn export_round_trip() {
    let mut h = TestHarness::new();
    assert!(h.click_export().is_none());

    h.click_generate();
    h.complete_generate(Ok(fixtures::success_response()));

    let blocks = h.click_export().unwrap();
    assert_eq!(blocks.len(), 9);
    assert_eq!(blocks[0].id, 1);

    let csv = h.complete_export(Ok(b"id,type,x,y,z,dx,dy,dz\n".to_vec()));
    assert!(csv.is_some());

    let failed = h.complete_export(Err("No coordinates provided".into()));
    assert!(failed.is_none());
    assert!(h
        .last_console_line()
        .unwrap()
        .contains("No coordinates provided"));
}

#[test]
fn scene_rebuild_bumps_version_for_renderer_resync() {
    let mut h = TestHarness::new();
    let v0 = h.scene.version();

    h.click_generate();
    h.complete_generate(Ok(fixtures::success_response()));
    let v1 = h.scene.version();
    assert!(v1 > v0);

    h.click_reset();
    assert!(h.scene.version() > v1);
}
