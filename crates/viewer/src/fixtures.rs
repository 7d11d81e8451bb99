//! Factory data for tests: canned service responses on the exact wire
//! format, plus parsed variants.
//!
//! The success layout is a valid 5×5 configuration with 5 Comfort,
//! 3 Transparent and 1 Opaque block.

use shared::{ConstantsResponse, GenerateResponse};

pub const SUCCESS_RESPONSE_JSON: &str = r#"{
  "success": true,
  "console": "SUCCESS! Valid configuration found on attempt 17.",
  "log": [
    {"rule": "2.1 Block Count", "status": "PASS", "message": "Status: True"},
    {"rule": "2.2 Min Comfort on Ground (>=2)", "status": "PASS", "message": "Status: True"},
    {"rule": "2.3 Transparent Adjacency", "status": "PASS", "message": "Status: True"},
    {"rule": "2.4 Structural Support", "status": "PASS", "message": "Status: True"},
    {"rule": "Separator", "status": "SEPARATOR", "message": "--- End of Attempt 17 (Valid) ---"}
  ],
  "coords": [
    {"id": 1, "type": "Comfort", "x": 1, "y": 1, "z": 1, "dx": 2, "dy": 2, "dz": 1},
    {"id": 2, "type": "Comfort", "x": 3, "y": 1, "z": 1, "dx": 2, "dy": 2, "dz": 1},
    {"id": 3, "type": "Comfort", "x": 1, "y": 3, "z": 1, "dx": 2, "dy": 2, "dz": 1},
    {"id": 4, "type": "Comfort", "x": 1, "y": 1, "z": 2, "dx": 2, "dy": 2, "dz": 1},
    {"id": 5, "type": "Comfort", "x": 3, "y": 1, "z": 2, "dx": 2, "dy": 2, "dz": 1},
    {"id": 6, "type": "Transparent", "x": 5, "y": 1, "z": 1, "dx": 1, "dy": 2, "dz": 1},
    {"id": 7, "type": "Transparent", "x": 5, "y": 3, "z": 1, "dx": 1, "dy": 2, "dz": 1},
    {"id": 8, "type": "Transparent", "x": 5, "y": 1, "z": 2, "dx": 1, "dy": 2, "dz": 1},
    {"id": 9, "type": "Opaque", "x": 3, "y": 3, "z": 1, "dx": 2, "dy": 2, "dz": 1}
  ],
  "analysis": {
    "parameters": {
      "W_max": "13.75 m",
      "L_max": "11.00 m",
      "H_max": "6.00 m",
      "Volume_V": "680.63 m³"
    },
    "cog": {"X": 6.4, "Y": 6.1, "Z": 2.6},
    "main_front": "X+",
    "facade_areas": {
      "X+": "66.00 m²",
      "X-": "49.50 m²",
      "Y+": "41.25 m²",
      "Y-": "57.75 m²"
    }
  }
}"#;

pub const FAILURE_RESPONSE_JSON: &str = r#"{
  "success": false,
  "console": "FAILURE! No valid configuration found after 1000 attempts.",
  "log": [
    {"rule": "2.1 Block Count", "status": "PASS", "message": "Status: True"},
    {"rule": "2.2 Min Comfort on Ground (>=2)", "status": "FAIL", "message": "Status: False"},
    {"rule": "Separator", "status": "SEPARATOR", "message": "--- End of Attempt 1000 (Invalid) ---"}
  ],
  "coords": [],
  "analysis": {}
}"#;

pub const CONSTANTS_JSON: &str = r##"{
  "MODULE_SIZE": {"x": 2.75, "y": 2.75, "z": 3.0},
  "BLOCK_COLORS": {
    "Comfort": "#FFD700",
    "Transparent": "#87CEEB",
    "Opaque": "#3CB371"
  },
  "BLOCK_SIZES": {
    "Comfort": [2, 2, 1],
    "Transparent": [1, 2, 1],
    "Opaque": [2, 2, 1]
  },
  "GRID_MAX": 5
}"##;

pub fn success_response() -> GenerateResponse {
    serde_json::from_str(SUCCESS_RESPONSE_JSON).expect("success fixture parses")
}

pub fn failure_response() -> GenerateResponse {
    serde_json::from_str(FAILURE_RESPONSE_JSON).expect("failure fixture parses")
}

pub fn constants() -> ConstantsResponse {
    serde_json::from_str(CONSTANTS_JSON).expect("constants fixture parses")
}
