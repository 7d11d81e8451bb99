//! Module-grid → render-space mapping.
//!
//! Render space is Y-up: the grid's third axis (height) maps to render Y
//! and the grid's second axis to render Z (depth), so render axes are
//! `(gridX, gridZ, gridY)`. This permutation must match the service's
//! coordinate convention exactly; getting it wrong rotates the whole
//! layout.

use glam::Vec3;
use shared::{Cog, MainFront, ModuleBlock};

use crate::config::ViewerConfig;

/// Height above the ground plane at which the main-front arrow is anchored.
pub const FRONT_INDICATOR_HEIGHT: f32 = 5.0;

/// Render-space descriptor of one block: axis-aligned box + display color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockBox {
    pub center: Vec3,
    pub size: Vec3,
    pub color: [f32; 3],
}

/// Render-space main-front indicator: unit direction and arrow anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontIndicator {
    pub anchor: Vec3,
    pub direction: Vec3,
}

/// Map one block's 1-based grid indices and extents to a render-space box.
pub fn block_box(block: &ModuleBlock, cfg: &ViewerConfig) -> BlockBox {
    let size = Vec3::new(
        block.dx as f32 * cfg.sx(),
        block.dz as f32 * cfg.sz(),
        block.dy as f32 * cfg.sy(),
    );
    // Blocks are 1-based in the grid but rendered 0-based from the origin.
    let start = Vec3::new(
        (block.x - 1) as f32 * cfg.sx(),
        (block.z - 1) as f32 * cfg.sz(),
        (block.y - 1) as f32 * cfg.sy(),
    );
    BlockBox {
        center: start + size * 0.5,
        size,
        color: cfg.color_for(&block.block_type),
    }
}

/// Render position of the center-of-gravity marker, or `None` when any
/// component is absent (a missing value must not silently become zero).
pub fn cog_marker(cog: &Cog) -> Option<Vec3> {
    match (cog.x, cog.y, cog.z) {
        (Some(x), Some(y), Some(z)) => Some(Vec3::new(x as f32, z as f32, y as f32)),
        _ => None,
    }
}

/// Main-front arrow at the midpoint of the matching grid edge, pointing
/// outward. `N/A` yields no indicator.
pub fn front_indicator(front: MainFront, cfg: &ViewerConfig) -> Option<FrontIndicator> {
    let span_x = cfg.grid_span as f32 * cfg.sx();
    let span_y = cfg.grid_span as f32 * cfg.sy();
    let mut anchor = Vec3::new(span_x / 2.0, FRONT_INDICATOR_HEIGHT, span_y / 2.0);

    let direction = match front {
        MainFront::XPlus => {
            anchor.x = span_x;
            Vec3::X
        }
        MainFront::XMinus => {
            anchor.x = 0.0;
            Vec3::NEG_X
        }
        MainFront::YPlus => {
            anchor.z = span_y;
            Vec3::Z
        }
        MainFront::YMinus => {
            anchor.z = 0.0;
            Vec3::NEG_Z
        }
        MainFront::NotApplicable => return None,
    };

    Some(FrontIndicator { anchor, direction })
}

/// Camera framing target after a rebuild. Derived from the fixed grid span,
/// never from block data.
pub fn grid_midpoint(cfg: &ViewerConfig) -> Vec3 {
    let span_x = cfg.grid_span as f32 * cfg.sx();
    let span_y = cfg.grid_span as f32 * cfg.sy();
    Vec3::new(span_x / 2.0, span_y / 2.0, span_y / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UNKNOWN_BLOCK_COLOR;

    fn test_cfg() -> ViewerConfig {
        let mut cfg = ViewerConfig::fallback("http://localhost:5000");
        cfg.colors
            .insert("Comfort".to_string(), [1.0, 0.84, 0.0]);
        cfg
    }

    fn block(x: u32, y: u32, z: u32, dx: u32, dy: u32, dz: u32) -> ModuleBlock {
        ModuleBlock {
            id: 1,
            block_type: "Comfort".into(),
            x,
            y,
            z,
            dx,
            dy,
            dz,
        }
    }

    #[test]
    fn block_box_applies_axis_permutation() {
        let cfg = test_cfg();
        // Module size 2.75 / 2.75 / 3.0.
        let b = block(1, 2, 3, 2, 1, 1);
        let bb = block_box(&b, &cfg);

        // Render X from grid x/dx.
        assert_eq!(bb.size.x, 2.0 * 2.75);
        assert_eq!(bb.center.x, 0.0 + 2.0 * 2.75 / 2.0);
        // Render Y (up) from grid z/dz.
        assert_eq!(bb.size.y, 3.0);
        assert_eq!(bb.center.y, 2.0 * 3.0 + 1.5);
        // Render Z (depth) from grid y/dy.
        assert_eq!(bb.size.z, 2.75);
        assert_eq!(bb.center.z, 1.0 * 2.75 + 2.75 / 2.0);
    }

    #[test]
    fn swapping_grid_y_and_z_never_changes_render_x() {
        let cfg = test_cfg();
        for (y, z, dy, dz) in [(1, 4, 2, 1), (3, 2, 1, 3), (5, 1, 1, 1)] {
            let a = block_box(&block(2, y, z, 3, dy, dz), &cfg);
            let b = block_box(&block(2, z, y, 3, dz, dy), &cfg);
            assert_eq!(a.center.x, b.center.x);
            assert_eq!(a.size.x, b.size.x);
            // Depth and height do move.
            assert_ne!((a.center.y, a.center.z), (b.center.y, b.center.z));
        }
    }

    #[test]
    fn unknown_block_type_maps_to_neutral_color() {
        let cfg = test_cfg();
        let mut b = block(1, 1, 1, 1, 1, 1);
        b.block_type = "Mystery".into();
        assert_eq!(block_box(&b, &cfg).color, UNKNOWN_BLOCK_COLOR);
    }

    #[test]
    fn cog_marker_uses_permutation_and_requires_all_components() {
        let full = Cog {
            x: Some(6.4),
            y: Some(6.1),
            z: Some(2.6),
        };
        assert_eq!(cog_marker(&full), Some(Vec3::new(6.4, 2.6, 6.1)));

        let partial = Cog {
            x: Some(6.4),
            y: None,
            z: Some(2.6),
        };
        assert_eq!(cog_marker(&partial), None);
        assert_eq!(cog_marker(&Cog::default()), None);
    }

    #[test]
    fn front_indicator_anchors_and_directions() {
        let cfg = test_cfg();
        let span = 5.0 * 2.75;

        let xp = front_indicator(MainFront::XPlus, &cfg).unwrap();
        assert_eq!(xp.anchor, Vec3::new(span, FRONT_INDICATOR_HEIGHT, span / 2.0));
        assert_eq!(xp.direction, Vec3::X);

        let xm = front_indicator(MainFront::XMinus, &cfg).unwrap();
        assert_eq!(xm.anchor.x, 0.0);
        assert_eq!(xm.direction, Vec3::NEG_X);

        let yp = front_indicator(MainFront::YPlus, &cfg).unwrap();
        assert_eq!(yp.anchor, Vec3::new(span / 2.0, FRONT_INDICATOR_HEIGHT, span));
        assert_eq!(yp.direction, Vec3::Z);

        let ym = front_indicator(MainFront::YMinus, &cfg).unwrap();
        assert_eq!(ym.anchor.z, 0.0);
        assert_eq!(ym.direction, Vec3::NEG_Z);

        assert!(front_indicator(MainFront::NotApplicable, &cfg).is_none());
    }

    #[test]
    fn grid_midpoint_is_fixed_by_span() {
        let cfg = test_cfg();
        let mid = grid_midpoint(&cfg);
        assert_eq!(mid, Vec3::new(2.5 * 2.75, 2.5 * 2.75, 2.5 * 2.75));
    }
}
