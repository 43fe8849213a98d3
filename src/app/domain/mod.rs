//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Persisted prompter settings
//! - Playback state and tick interval
//! - Colour palettes and font families
//! - Message types for the event system

pub mod messages;
pub mod palette;
pub mod playback;
pub mod settings;

pub use messages::Message;
pub use palette::{FontFamily, Palette, Rgb};
pub use playback::{PlaybackState, TICK_INTERVAL};
pub use settings::PrompterSettings;
