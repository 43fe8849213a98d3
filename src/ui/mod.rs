//! FLTK front end: window construction and adapters for the controller seams.

pub mod display;
pub mod main_window;
pub mod shortcuts;
pub mod theme;
pub mod ticker;
