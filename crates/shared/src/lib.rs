//! Wire-contract types for the block layout computation service.
//!
//! Field names and enum renames mirror the service's JSON exactly; do not
//! change them without a matching service-side change.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Number of modules along each horizontal grid axis.
pub const DEFAULT_GRID_SPAN: u32 = 5;

/// One placed module, in 1-based module-grid coordinates.
///
/// `x/y/z` index the block's minimum corner, `dx/dy/dz` are its extents in
/// module units. The service guarantees all six are positive, the horizontal
/// footprint stays within the grid, and no two blocks overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleBlock {
    pub id: u32,
    #[serde(rename = "type")]
    pub block_type: String,
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub dx: u32,
    pub dy: u32,
    pub dz: u32,
}

impl ModuleBlock {
    /// Highest occupied 1-based index along the grid X axis.
    pub fn max_x(&self) -> u32 {
        self.x + self.dx - 1
    }

    /// Highest occupied 1-based index along the grid Y axis.
    pub fn max_y(&self) -> u32 {
        self.y + self.dy - 1
    }

    /// Whether the horizontal footprint fits a `span × span` grid.
    pub fn fits_grid(&self, span: u32) -> bool {
        self.x >= 1 && self.y >= 1 && self.z >= 1 && self.max_x() <= span && self.max_y() <= span
    }
}

/// Physical size in meters of one module along the three grid axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModuleSize {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for ModuleSize {
    /// Built-in fallback used when the constants endpoint is unreachable.
    fn default() -> Self {
        Self {
            x: 2.75,
            y: 2.75,
            z: 3.0,
        }
    }
}

/// Summary metrics, pre-formatted by the service (e.g. `"13.75 m"`).
/// Any field may be absent; a failed generate returns an empty object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisParameters {
    #[serde(rename = "W_max", default, skip_serializing_if = "Option::is_none")]
    pub w_max: Option<String>,
    #[serde(rename = "L_max", default, skip_serializing_if = "Option::is_none")]
    pub l_max: Option<String>,
    #[serde(rename = "H_max", default, skip_serializing_if = "Option::is_none")]
    pub h_max: Option<String>,
    #[serde(rename = "Volume_V", default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
}

/// Center of gravity in physical (meter) units, module-grid axis order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cog {
    #[serde(rename = "X", default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(rename = "Y", default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(rename = "Z", default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

/// Dominant open facing direction of a layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MainFront {
    #[serde(rename = "X+")]
    XPlus,
    #[serde(rename = "X-")]
    XMinus,
    #[serde(rename = "Y+")]
    YPlus,
    #[serde(rename = "Y-")]
    YMinus,
    #[default]
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl MainFront {
    pub fn as_str(&self) -> &'static str {
        match self {
            MainFront::XPlus => "X+",
            MainFront::XMinus => "X-",
            MainFront::YPlus => "Y+",
            MainFront::YMinus => "Y-",
            MainFront::NotApplicable => "N/A",
        }
    }
}

/// Summary analysis of a complete layout. Every field defaults so that the
/// empty object sent on failure deserializes cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub parameters: AnalysisParameters,
    #[serde(default)]
    pub cog: Cog,
    #[serde(default)]
    pub main_front: MainFront,
    /// Exposed facade area per direction, pre-formatted (e.g. `"24.75 m²"`).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub facade_areas: HashMap<String, String>,
}

/// Outcome of a single rule evaluation in the generation log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleStatus {
    Pass,
    Fail,
    /// Visual divider between generation attempts; message-only.
    Separator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleLogEntry {
    #[serde(default)]
    pub rule: String,
    pub status: RuleStatus,
    pub message: String,
}

/// `POST /generate` request body. Counts are validated non-negative before
/// a request is ever constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub comfort: u32,
    pub transparent: u32,
    pub opaque: u32,
}

/// `POST /generate` response body, for both success and failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    /// Human-readable one-line summary for the console.
    #[serde(default)]
    pub console: String,
    #[serde(default)]
    pub log: Vec<RuleLogEntry>,
    #[serde(default)]
    pub coords: Vec<ModuleBlock>,
    #[serde(default)]
    pub analysis: AnalysisResult,
}

/// `POST /export_csv` request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub coords: Vec<ModuleBlock>,
}

/// Error body returned by the export endpoint on a non-success status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportErrorBody {
    pub error: String,
}

/// `GET /constants` response body. `BLOCK_SIZES` is carried for
/// completeness but unused by the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantsResponse {
    #[serde(rename = "MODULE_SIZE")]
    pub module_size: ModuleSize,
    /// Block type → `#RRGGBB` display color.
    #[serde(rename = "BLOCK_COLORS", default)]
    pub block_colors: HashMap<String, String>,
    #[serde(rename = "BLOCK_SIZES", default)]
    pub block_sizes: HashMap<String, [u32; 3]>,
    #[serde(rename = "GRID_MAX", default = "default_grid_max")]
    pub grid_max: u32,
}

fn default_grid_max() -> u32 {
    DEFAULT_GRID_SPAN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_block_wire_names() {
        let json = r#"{"id":1,"type":"Comfort","x":1,"y":2,"z":1,"dx":2,"dy":2,"dz":1}"#;
        let block: ModuleBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.block_type, "Comfort");
        assert_eq!(block.max_x(), 2);
        assert_eq!(block.max_y(), 3);
        assert!(block.fits_grid(5));

        let back = serde_json::to_value(&block).unwrap();
        assert_eq!(back["type"], "Comfort");
        assert!(back.get("block_type").is_none());
    }

    #[test]
    fn block_outside_grid_detected() {
        let block = ModuleBlock {
            id: 1,
            block_type: "Opaque".into(),
            x: 5,
            y: 1,
            z: 1,
            dx: 2,
            dy: 2,
            dz: 1,
        };
        assert!(!block.fits_grid(5));
    }

    #[test]
    fn main_front_renames() {
        assert_eq!(
            serde_json::from_str::<MainFront>(r#""X+""#).unwrap(),
            MainFront::XPlus
        );
        assert_eq!(
            serde_json::from_str::<MainFront>(r#""N/A""#).unwrap(),
            MainFront::NotApplicable
        );
        assert_eq!(
            serde_json::to_string(&MainFront::YMinus).unwrap(),
            r#""Y-""#
        );
    }

    #[test]
    fn rule_status_uppercase() {
        let entry: RuleLogEntry = serde_json::from_str(
            r#"{"rule":"2.2 Min Comfort on Ground (>=2)","status":"PASS","message":"Status: True"}"#,
        )
        .unwrap();
        assert_eq!(entry.status, RuleStatus::Pass);

        let sep: RuleLogEntry = serde_json::from_str(
            r#"{"rule":"Separator","status":"SEPARATOR","message":"--- End of Attempt 1 (Invalid) ---"}"#,
        )
        .unwrap();
        assert_eq!(sep.status, RuleStatus::Separator);
    }

    #[test]
    fn failed_generate_has_empty_analysis() {
        let json = r#"{"success":false,"console":"FAILURE!","coords":[],"analysis":{},"log":[]}"#;
        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.analysis, AnalysisResult::default());
        assert_eq!(resp.analysis.main_front, MainFront::NotApplicable);
        assert!(resp.analysis.cog.x.is_none());
    }

    #[test]
    fn analysis_parameters_are_verbatim_strings() {
        let json = r#"{"parameters":{"W_max":"13.75 m","Volume_V":"680.63 m³"},"cog":{"X":6.4,"Y":6.1,"Z":2.6},"main_front":"Y-"}"#;
        let analysis: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.parameters.w_max.as_deref(), Some("13.75 m"));
        assert_eq!(analysis.parameters.l_max, None);
        assert_eq!(analysis.cog.z, Some(2.6));
        assert_eq!(analysis.main_front, MainFront::YMinus);
    }

    #[test]
    fn constants_wire_names() {
        let json = r##"{
            "MODULE_SIZE": {"x": 2.75, "y": 2.75, "z": 3.0},
            "BLOCK_COLORS": {"Comfort": "#FFD700"},
            "BLOCK_SIZES": {"Comfort": [2, 2, 1]},
            "GRID_MAX": 5
        }"##;
        let constants: ConstantsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(constants.module_size.x, 2.75);
        assert_eq!(constants.block_colors["Comfort"], "#FFD700");
        assert_eq!(constants.block_sizes["Comfort"], [2, 2, 1]);
        assert_eq!(constants.grid_max, 5);
    }

    #[test]
    fn constants_grid_max_defaults_when_missing() {
        let json = r#"{"MODULE_SIZE": {"x": 2.0, "y": 2.0, "z": 2.0}}"#;
        let constants: ConstantsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(constants.grid_max, DEFAULT_GRID_SPAN);
        assert!(constants.block_colors.is_empty());
    }
}
