//! Process-wide viewer configuration.
//!
//! Built once at startup from the service's constants endpoint (or from
//! built-in fallbacks when it is unreachable) and passed by reference
//! everywhere — there are no mutable globals.

use std::collections::HashMap;

use shared::{ConstantsResponse, ModuleSize, DEFAULT_GRID_SPAN};

/// Display color for block types missing from the color table.
pub const UNKNOWN_BLOCK_COLOR: [f32; 3] = [0.62, 0.62, 0.66];

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Base URL of the computation service, without a trailing slash.
    pub api_url: String,
    pub module_size: ModuleSize,
    /// Block type → linear RGB display color.
    pub colors: HashMap<String, [f32; 3]>,
    /// Modules per horizontal grid axis.
    pub grid_span: u32,
    /// True when the constants endpoint was unreachable and fallbacks are
    /// in use; remote calls are unlikely to succeed until reload.
    pub degraded: bool,
}

impl ViewerConfig {
    /// Fallback configuration so the interface still renders without the
    /// service.
    pub fn fallback(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            module_size: ModuleSize::default(),
            colors: HashMap::new(),
            grid_span: DEFAULT_GRID_SPAN,
            degraded: true,
        }
    }

    pub fn from_constants(api_url: impl Into<String>, constants: &ConstantsResponse) -> Self {
        let colors = constants
            .block_colors
            .iter()
            .filter_map(|(t, hex)| parse_hex_color(hex).map(|c| (t.clone(), c)))
            .collect();
        Self {
            api_url: api_url.into(),
            module_size: constants.module_size,
            colors,
            grid_span: constants.grid_max,
            degraded: false,
        }
    }

    /// Total lookup: unknown types get a fixed neutral color.
    pub fn color_for(&self, block_type: &str) -> [f32; 3] {
        self.colors
            .get(block_type)
            .copied()
            .unwrap_or(UNKNOWN_BLOCK_COLOR)
    }

    // Module size as f32, per render axis name.
    pub fn sx(&self) -> f32 {
        self.module_size.x as f32
    }
    pub fn sy(&self) -> f32 {
        self.module_size.y as f32
    }
    pub fn sz(&self) -> f32 {
        self.module_size.z as f32
    }
}

/// Parse a `#RRGGBB` string into linear RGB components.
pub fn parse_hex_color(s: &str) -> Option<[f32; 3]> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
}
