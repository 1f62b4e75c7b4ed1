//! Main-loop lifecycle
//!
//! The render loop is a two-state machine with a single exit transition,
//! evaluated once per iteration, so the termination condition is testable
//! without a window.

/// Render-loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// The loop keeps iterating.
    Running,
    /// The loop exits after the current iteration.
    Closing,
}

impl LoopState {
    /// Evaluate the exit transition for one iteration.
    ///
    /// `close_requested` is the windowing system's close flag (close button,
    /// `set_should_close`); `quit_pressed` is the quit-key state observed
    /// this iteration. Either one moves the loop to [`Self::Closing`] by the
    /// end of the same iteration. `Closing` is terminal.
    #[must_use]
    pub fn step(self, close_requested: bool, quit_pressed: bool) -> Self {
        match self {
            Self::Running if close_requested || quit_pressed => Self::Closing,
            state => state,
        }
    }

    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_stays_running_without_input() {
        assert_eq!(LoopState::Running.step(false, false), LoopState::Running);
    }

    #[test]
    fn test_close_request_closes_same_iteration() {
        assert_eq!(LoopState::Running.step(true, false), LoopState::Closing);
    }

    #[test]
    fn test_quit_key_closes_same_iteration() {
        let state = LoopState::Running.step(false, true);
        assert_eq!(state, LoopState::Closing);
        assert!(!state.is_running());
    }

    #[test]
    fn test_closing_is_terminal() {
        assert_eq!(LoopState::Closing.step(false, false), LoopState::Closing);
    }
}
