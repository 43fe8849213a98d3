//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (PrompterSettings, PlaybackState, Palette, Message)
//! - `controllers/` - Orchestration (PrompterController and its display/timer seams)
//! - `infrastructure/` - External integrations (settings store, logging, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod state;

// Re-exports for convenient external access
pub use controllers::{PlayIndicator, PromptDisplay, PrompterController, ScrollTicker};
pub use domain::{FontFamily, Message, Palette, PlaybackState, PrompterSettings, Rgb};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::store::{JsonFileStore, MemoryStore, SettingsStore, StoreIdentity};
