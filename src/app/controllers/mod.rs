//! Controllers - orchestration of prompter state.
//!
//! - `prompter` - playback, scrolling, font, theme and settings persistence

pub mod prompter;

pub use prompter::{PlayIndicator, PromptDisplay, PrompterController, ScrollTicker};
