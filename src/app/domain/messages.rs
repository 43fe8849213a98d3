/// All messages that can be sent through the FLTK channel.
/// Widgets, shortcuts and the scroll timer send one of these; `AppState::dispatch` handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Playback
    TogglePlay,
    ScrollTick,
    ResetScroll,

    // Controls
    FontSizeChanged(i32),
    SpeedChanged(i32),
    ToggleTheme,

    // Window
    Resized(i32),
    WindowClose,
}
