use fltk::{
    enums::Color,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::domain::{Palette, Rgb};

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Paint the prompt text area with the given palette.
pub fn apply_palette(editor: &mut TextEditor, palette: Palette) {
    editor.set_color(to_color(palette.background));
    editor.set_text_color(to_color(palette.foreground));
    editor.set_cursor_color(to_color(palette.foreground));
    if palette == Palette::DARK {
        editor.set_selection_color(Color::from_rgb(70, 70, 100));
    } else {
        editor.set_selection_color(Color::from_rgb(173, 216, 230));
    }
    editor.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
        let on: i32 = if is_dark { 1 } else { 0 };

        // 20 on Windows 11 / Windows 10 2004+, 19 on Windows 10 1809-1903
        for attribute in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}

#[cfg(not(target_os = "windows"))]
pub fn set_windows_titlebar_theme(_window: &Window, _is_dark: bool) {}
