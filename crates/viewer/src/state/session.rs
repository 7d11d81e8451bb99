use shared::ModuleBlock;

/// Lifecycle of the current generation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No layout and no request outstanding.
    #[default]
    Idle,
    /// A generate request is in flight.
    Requesting,
    /// A valid layout is on screen.
    Visualized,
    /// The last generate finished without a valid layout.
    Failed,
}

/// Session state with stale-response protection.
///
/// Every generate request gets a fresh sequence number; a completion is
/// only applied while its number is still the current one. A reset or a
/// newer request orphans in-flight responses, which are then dropped on
/// arrival instead of resurrecting an abandoned session.
#[derive(Debug, Default)]
pub struct SessionState {
    pub phase: Phase,
    next_seq: u64,
    current_seq: Option<u64>,
    /// Blocks of the layout currently on screen, kept verbatim for export.
    pub blocks: Vec<ModuleBlock>,
}

impl SessionState {
    /// Start a new generate request and return its sequence number.
    pub fn begin_request(&mut self) -> u64 {
        self.next_seq += 1;
        self.current_seq = Some(self.next_seq);
        self.phase = Phase::Requesting;
        self.next_seq
    }

    /// Whether a completion with this sequence number is still current.
    pub fn accepts(&self, seq: u64) -> bool {
        self.phase == Phase::Requesting && self.current_seq == Some(seq)
    }

    pub fn complete_success(&mut self, blocks: Vec<ModuleBlock>) {
        self.blocks = blocks;
        self.current_seq = None;
        self.phase = Phase::Visualized;
    }

    pub fn complete_failure(&mut self) {
        self.blocks.clear();
        self.current_seq = None;
        self.phase = Phase::Failed;
    }

    /// Return to the idle state, orphaning any in-flight request.
    pub fn reset(&mut self) {
        self.blocks.clear();
        self.current_seq = None;
        self.phase = Phase::Idle;
    }

    pub fn generate_enabled(&self) -> bool {
        self.phase != Phase::Requesting
    }

    /// Export needs a visualized layout with at least one block.
    pub fn export_enabled(&self) -> bool {
        self.phase == Phase::Visualized && !self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: u32) -> ModuleBlock {
        ModuleBlock {
            id,
            block_type: "Comfort".into(),
            x: 1,
            y: 1,
            z: 1,
            dx: 2,
            dy: 2,
            dz: 1,
        }
    }

    #[test]
    fn request_lifecycle() {
        let mut s = SessionState::default();
        assert_eq!(s.phase, Phase::Idle);
        assert!(s.generate_enabled());
        assert!(!s.export_enabled());

        let seq = s.begin_request();
        assert_eq!(s.phase, Phase::Requesting);
        assert!(!s.generate_enabled());
        assert!(s.accepts(seq));

        s.complete_success(vec![block(1)]);
        assert_eq!(s.phase, Phase::Visualized);
        assert!(s.export_enabled());
        assert!(!s.accepts(seq));
    }

    #[test]
    fn newer_request_orphans_older_one() {
        let mut s = SessionState::default();
        let first = s.begin_request();
        let second = s.begin_request();
        assert!(!s.accepts(first));
        assert!(s.accepts(second));
    }

    #[test]
    fn reset_orphans_in_flight_request() {
        let mut s = SessionState::default();
        let seq = s.begin_request();
        s.reset();
        assert_eq!(s.phase, Phase::Idle);
        assert!(!s.accepts(seq));
    }

    #[test]
    fn failure_clears_blocks() {
        let mut s = SessionState::default();
        s.begin_request();
        s.complete_success(vec![block(1), block(2)]);
        s.begin_request();
        s.complete_failure();
        assert_eq!(s.phase, Phase::Failed);
        assert!(s.blocks.is_empty());
        assert!(!s.export_enabled());
    }
}
