use fltk::{
    draw,
    enums::Font,
    prelude::*,
    text::{PositionType, TextEditor},
};

use crate::app::controllers::PromptDisplay;
use crate::app::domain::{FontFamily, Palette};
use super::theme::apply_palette;

/// Inset of the text area inside the editor frame.
const TEXT_INSET: i32 = 4;

/// Display lines that fit in `visible_height`, counting a partly shown last
/// line, the way FLTK sizes its text area.
pub fn visible_lines(visible_height: i32, line_height: i32) -> i32 {
    let line_height = line_height.max(1);
    (visible_height.max(0) + line_height - 1) / line_height
}

/// Largest pixel offset FLTK lets the top line reach. FLTK caps the 1-based
/// top line at `buffer_lines + 3 - visible_lines`, where `total_lines` is
/// `buffer_lines + 1`.
pub fn max_offset(total_lines: i32, visible_lines: i32, line_height: i32) -> i32 {
    (total_lines + 1 - visible_lines).max(0) * line_height
}

/// Current offset given the top line on screen. A top line other than the
/// one last applied means the user scrolled by hand.
pub fn resolve_position(offset: i32, applied_top: i32, current_top: i32, line_height: i32) -> i32 {
    if current_top == applied_top {
        offset
    } else {
        current_top * line_height
    }
}

/// Offset to keep after scrolling to `requested_top`. When FLTK stopped
/// short of it the end of the text is on screen, so the offset sits at `max`.
pub fn settle_offset(offset: i32, requested_top: i32, actual_top: i32, max: i32) -> i32 {
    if actual_top < requested_top { max } else { offset }
}

/// Pixel-addressed scrolling over an FLTK text editor.
///
/// FLTK scrolls text displays by whole (display) lines, so the offset is kept
/// in pixels here and mapped onto a top line when applied.
pub struct FltkDisplay {
    editor: TextEditor,
    offset: i32,
    applied_top: i32,
}

impl FltkDisplay {
    pub fn new(editor: TextEditor) -> Self {
        Self {
            editor,
            offset: 0,
            applied_top: 0,
        }
    }

    /// Rendered height of one line in the editor's font.
    fn line_height(&self) -> i32 {
        draw::set_font(self.editor.text_font(), self.editor.text_size());
        draw::height().max(1)
    }

    fn total_lines(&self) -> i32 {
        match self.editor.buffer() {
            Some(buf) => self.editor.count_lines(0, buf.length(), true) + 1,
            None => 1,
        }
    }

    fn visible_height(&self) -> i32 {
        (self.editor.h() - 2 * TEXT_INSET).max(0)
    }

    /// Zero-based display line currently at the top of the text area.
    fn top_line(&self) -> i32 {
        let pos = self.editor.xy_to_position(
            self.editor.x() + TEXT_INSET,
            self.editor.y() + TEXT_INSET,
            PositionType::Cursor,
        );
        self.editor.count_lines(0, pos, true)
    }
}

impl PromptDisplay for FltkDisplay {
    fn scroll_position(&self) -> i32 {
        resolve_position(self.offset, self.applied_top, self.top_line(), self.line_height())
    }

    fn set_scroll_position(&mut self, position: i32) {
        let max = self.max_scroll_position();
        let offset = position.clamp(0, max);
        let requested_top = offset / self.line_height();
        // FLTK numbers display lines from 1.
        self.editor.scroll(requested_top + 1, 0);
        let actual_top = self.top_line();
        self.offset = settle_offset(offset, requested_top, actual_top, max);
        self.applied_top = actual_top;
        self.editor.redraw();
    }

    fn max_scroll_position(&self) -> i32 {
        let line_height = self.line_height();
        let visible = visible_lines(self.visible_height(), line_height);
        max_offset(self.total_lines(), visible, line_height)
    }

    fn set_font(&mut self, family: FontFamily, size: i32) {
        let font = match family {
            FontFamily::Sans => Font::Helvetica,
        };
        self.editor.set_text_font(font);
        self.editor.set_text_size(size);
        self.editor.redraw();
    }

    fn set_colors(&mut self, palette: Palette) {
        apply_palette(&mut self.editor, palette);
    }
}
