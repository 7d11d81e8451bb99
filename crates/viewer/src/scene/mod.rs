//! Render-side scene model.
//!
//! The environment (grid, axes) is built once from the configuration and
//! never changes. The layout group is replaced wholesale on every rebuild
//! and dropped on clear; the renderer watches [`SceneView::version`] to know
//! when its GPU buffers are stale.

pub mod mesh;

use std::sync::Arc;

use glam::Vec3;
use shared::{AnalysisResult, ModuleBlock};

use crate::config::ViewerConfig;
use crate::geometry;
use mesh::{LineMeshData, MeshData};

/// Blocks are drawn translucent so interior structure stays visible.
pub const BLOCK_ALPHA: f32 = 0.7;

const COG_RADIUS: f32 = 0.5;
const COG_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
const FRONT_COLOR: [f32; 3] = [0.0, 1.0, 1.0];
const FRONT_ARROW_LENGTH: f32 = 4.0;
const FRONT_ARROW_HEAD_LENGTH: f32 = 1.5;
const FRONT_ARROW_HEAD_RADIUS: f32 = 0.5;
const AXES_LENGTH: f32 = 10.0;
const GRID_OPACITY: f32 = 0.5;

/// Static scenery shared by every session.
pub struct EnvironmentSet {
    pub grid: LineMeshData,
    pub axes: LineMeshData,
}

impl EnvironmentSet {
    fn build(cfg: &ViewerConfig) -> Self {
        Self {
            grid: mesh::grid_floor(cfg.grid_span, cfg.sx(), cfg.sy(), GRID_OPACITY),
            axes: mesh::axes(AXES_LENGTH),
        }
    }
}

/// Everything derived from one generate response, replaced atomically.
pub struct LayoutGroup {
    /// All block boxes merged into one mesh.
    pub blocks: MeshData,
    pub cog: Option<MeshData>,
    pub front: Option<MeshData>,
    pub block_count: usize,
}

pub struct SceneView {
    pub environment: EnvironmentSet,
    pub layout: Option<Arc<LayoutGroup>>,
    version: u64,
    /// Orbit target the camera frames after a rebuild.
    pub view_target: Vec3,
}

impl SceneView {
    pub fn new(cfg: &ViewerConfig) -> Self {
        Self {
            environment: EnvironmentSet::build(cfg),
            layout: None,
            version: 0,
            view_target: geometry::grid_midpoint(cfg),
        }
    }

    /// Bumped whenever the layout group changes, so the renderer re-uploads.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Drop the layout group. A no-op (version included) when already empty.
    pub fn clear(&mut self) {
        if self.layout.take().is_some() {
            self.version += 1;
        }
    }

    /// Replace the layout group from a successful generate response.
    pub fn rebuild(&mut self, blocks: &[ModuleBlock], analysis: &AnalysisResult, cfg: &ViewerConfig) {
        let mut block_mesh = MeshData::default();
        for block in blocks {
            let bb = geometry::block_box(block, cfg);
            mesh::push_box(&mut block_mesh, bb.center, bb.size, bb.color);
        }

        let cog = geometry::cog_marker(&analysis.cog).map(|pos| {
            let mut m = MeshData::default();
            mesh::push_sphere(&mut m, pos, COG_RADIUS, 16, 32, COG_COLOR);
            m
        });

        let front = geometry::front_indicator(analysis.main_front, cfg).map(|fi| {
            let mut m = MeshData::default();
            mesh::push_arrow(
                &mut m,
                fi.anchor,
                fi.direction,
                FRONT_ARROW_LENGTH,
                FRONT_ARROW_HEAD_LENGTH,
                FRONT_ARROW_HEAD_RADIUS,
                FRONT_COLOR,
            );
            m
        });

        self.layout = Some(Arc::new(LayoutGroup {
            blocks: block_mesh,
            cog,
            front,
            block_count: blocks.len(),
        }));
        self.version += 1;
        self.view_target = geometry::grid_midpoint(cfg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Cog, MainFront};

    fn cfg() -> ViewerConfig {
        ViewerConfig::fallback("http://localhost:5000")
    }

    fn block(id: u32, x: u32, y: u32) -> ModuleBlock {
        ModuleBlock {
            id,
            block_type: "Comfort".into(),
            x,
            y,
            z: 1,
            dx: 2,
            dy: 2,
            dz: 1,
        }
    }

    #[test]
    fn clear_on_empty_scene_keeps_version() {
        let cfg = cfg();
        let mut scene = SceneView::new(&cfg);
        assert_eq!(scene.version(), 0);
        scene.clear();
        scene.clear();
        assert_eq!(scene.version(), 0);
    }

    #[test]
    fn rebuild_then_clear_bumps_version_each_time() {
        let cfg = cfg();
        let mut scene = SceneView::new(&cfg);
        scene.rebuild(&[block(1, 1, 1)], &AnalysisResult::default(), &cfg);
        assert_eq!(scene.version(), 1);
        scene.clear();
        assert_eq!(scene.version(), 2);
        assert!(scene.layout.is_none());
    }

    #[test]
    fn rebuild_merges_blocks_and_builds_markers() {
        let cfg = cfg();
        let mut scene = SceneView::new(&cfg);
        let analysis = AnalysisResult {
            cog: Cog {
                x: Some(6.4),
                y: Some(6.1),
                z: Some(2.6),
            },
            main_front: MainFront::XPlus,
            ..AnalysisResult::default()
        };
        scene.rebuild(&[block(1, 1, 1), block(2, 3, 1)], &analysis, &cfg);

        let layout = scene.layout.as_ref().unwrap();
        assert_eq!(layout.block_count, 2);
        assert_eq!(layout.blocks.vertex_count(), 48);
        assert!(layout.cog.is_some());
        assert!(layout.front.is_some());
    }

    #[test]
    fn missing_analysis_yields_no_markers() {
        let cfg = cfg();
        let mut scene = SceneView::new(&cfg);
        scene.rebuild(&[block(1, 1, 1)], &AnalysisResult::default(), &cfg);
        let layout = scene.layout.as_ref().unwrap();
        assert!(layout.cog.is_none());
        assert!(layout.front.is_none());
    }

    #[test]
    fn view_target_is_grid_midpoint() {
        let cfg = cfg();
        let mut scene = SceneView::new(&cfg);
        let expected = geometry::grid_midpoint(&cfg);
        assert_eq!(scene.view_target, expected);
        scene.rebuild(&[block(1, 1, 1)], &AnalysisResult::default(), &cfg);
        assert_eq!(scene.view_target, expected);
    }
}
