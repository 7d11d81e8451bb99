use chrono::Local;

/// One timestamped console line.
#[derive(Debug, Clone)]
pub struct ConsoleLine {
    pub timestamp: String,
    pub text: String,
    pub is_error: bool,
}

/// Append-only status console shown under the controls.
#[derive(Debug, Default)]
pub struct ConsoleState {
    pub lines: Vec<ConsoleLine>,
}

impl ConsoleState {
    pub fn info(&mut self, text: impl Into<String>) {
        self.push(text.into(), false);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(text.into(), true);
    }

    fn push(&mut self, text: String, is_error: bool) {
        self.lines.push(ConsoleLine {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            text,
            is_error,
        });
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn last(&self) -> Option<&ConsoleLine> {
        self.lines.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_order_and_error_flag() {
        let mut console = ConsoleState::default();
        console.info("Generating layout...");
        console.error("API error: connection refused");
        assert_eq!(console.lines.len(), 2);
        assert!(!console.lines[0].is_error);
        assert!(console.lines[1].is_error);
        assert_eq!(console.last().unwrap().text, "API error: connection refused");

        console.clear();
        assert!(console.lines.is_empty());
    }
}
