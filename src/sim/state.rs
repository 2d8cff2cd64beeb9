//! Mode and game-state enums, plus the events emitted on their transitions

/// Per-frame status of the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No goal has been set yet
    #[default]
    Free,
    /// Goal is pulling and the head is clear of the trail
    Forced,
    /// Head is touching its own trail
    Crash,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Free => "Free",
            Mode::Forced => "Forced",
            Mode::Crash => "Crash",
        }
    }
}

/// Outer session state: gates whether physics advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Ready,
    Pause,
    Running,
    /// Reserved; nothing in the body logic enters it yet
    Lose,
    /// Reserved; nothing in the body logic enters it yet
    Win,
}

impl GameState {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Ready => "Ready",
            GameState::Pause => "Pause",
            GameState::Running => "Running",
            GameState::Lose => "Lose",
            GameState::Win => "Win",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Lose | GameState::Win)
    }

    /// Status line shown by the host, `None` when it should be hidden
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            GameState::Running => None,
            other => Some(other.as_str()),
        }
    }
}

/// A committed mode transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    pub from: Mode,
    pub to: Mode,
}

impl ModeChange {
    pub fn is_crash(&self) -> bool {
        self.to == Mode::Crash
    }
}

/// Observable events for collaborators (haptics, status text)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    ModeChanged { from: Mode, to: Mode },
    StateChanged { from: GameState, to: GameState },
}

impl From<ModeChange> for SimEvent {
    fn from(change: ModeChange) -> Self {
        SimEvent::ModeChanged {
            from: change.from,
            to: change.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(GameState::Running.status_text(), None);
        assert_eq!(GameState::Pause.status_text(), Some("Pause"));
        assert_eq!(GameState::Ready.status_text(), Some("Ready"));
    }

    #[test]
    fn test_terminal_states() {
        assert!(GameState::Lose.is_terminal());
        assert!(GameState::Win.is_terminal());
        assert!(!GameState::Pause.is_terminal());
        assert!(!GameState::Running.is_terminal());
    }
}
