use std::time::Duration;

/// Interval between two auto-scroll steps.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

impl PlaybackState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Stopped => Self::Playing,
            Self::Playing => Self::Stopped,
        }
    }

    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }

    /// Label shown on the play button: the action a click would perform.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Stopped => "Play",
            Self::Playing => "Pause",
        }
    }
}
