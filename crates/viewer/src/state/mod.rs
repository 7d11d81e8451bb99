pub mod console;
pub mod session;

pub use console::{ConsoleLine, ConsoleState};
pub use session::{Phase, SessionState};

use shared::{AnalysisResult, GenerateRequest, RuleLogEntry};

/// Requested block counts, as edited in the controls panel.
///
/// Kept signed so out-of-range edits are representable and rejected at
/// request time rather than silently clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputCounts {
    pub comfort: i32,
    pub transparent: i32,
    pub opaque: i32,
}

impl Default for InputCounts {
    fn default() -> Self {
        Self {
            comfort: 5,
            transparent: 3,
            opaque: 1,
        }
    }
}

impl InputCounts {
    /// Build a request body, or `None` when any count is negative.
    pub fn validate(&self) -> Option<GenerateRequest> {
        if self.comfort < 0 || self.transparent < 0 || self.opaque < 0 {
            return None;
        }
        Some(GenerateRequest {
            comfort: self.comfort as u32,
            transparent: self.transparent as u32,
            opaque: self.opaque as u32,
        })
    }
}

/// Combined application state
#[derive(Debug, Default)]
pub struct AppState {
    pub inputs: InputCounts,
    pub session: SessionState,
    pub console: ConsoleState,
    /// Rule evaluation log from the last generate, newest run last.
    pub rules: Vec<RuleLogEntry>,
    /// Analysis of the layout on screen; `None` while idle or failed.
    pub analysis: Option<AnalysisResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_counts_match_controls() {
        let counts = InputCounts::default();
        assert_eq!((counts.comfort, counts.transparent, counts.opaque), (5, 3, 1));
        assert_eq!(
            counts.validate(),
            Some(GenerateRequest {
                comfort: 5,
                transparent: 3,
                opaque: 1
            })
        );
    }

    #[test]
    fn negative_counts_rejected() {
        let counts = InputCounts {
            comfort: -1,
            ..InputCounts::default()
        };
        assert_eq!(counts.validate(), None);
    }

    #[test]
    fn zero_counts_are_valid() {
        let counts = InputCounts {
            comfort: 0,
            transparent: 0,
            opaque: 0,
        };
        assert!(counts.validate().is_some());
    }
}
