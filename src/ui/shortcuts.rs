use fltk::{
    app::{self, Sender},
    enums::{Event, EventState},
    prelude::*,
    window::Window,
};

use crate::app::domain::Message;

/// Ctrl+P toggles playback, Ctrl+R rewinds to the top.
pub fn shortcut_message(ctrl: bool, key: char) -> Option<Message> {
    if !ctrl {
        return None;
    }
    match key.to_ascii_lowercase() {
        'p' => Some(Message::TogglePlay),
        'r' => Some(Message::ResetScroll),
        _ => None,
    }
}

/// Route the prompter shortcuts to the channel. Keys the focused editor
/// leaves unhandled reach the window as `Event::Shortcut`.
pub fn install_shortcuts(window: &mut Window, sender: &Sender<Message>) {
    let s = *sender;
    window.handle(move |_, event| match event {
        Event::Shortcut | Event::KeyDown => {
            let ctrl = app::event_state().contains(EventState::Ctrl);
            let key = app::event_key().to_char();
            match key.and_then(|c| shortcut_message(ctrl, c)) {
                Some(msg) => {
                    s.send(msg);
                    true
                }
                None => false,
            }
        }
        _ => false,
    });
}
