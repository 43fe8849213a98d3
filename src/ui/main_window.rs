use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, Event},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    valuator::HorNiceSlider,
    window::Window,
};

use crate::app::controllers::PlayIndicator;
use crate::app::domain::Message;
use crate::app::domain::settings::{MAX_FONT_SIZE, MAX_SPEED, MIN_FONT_SIZE, MIN_SPEED};
use super::shortcuts::install_shortcuts;

pub const WINDOW_TITLE: &str = "Teleprompter";
const CONTROLS_HEIGHT: i32 = 36;

pub struct MainWidgets {
    pub wind: Window,
    pub editor: TextEditor,
    pub play_button: Button,
    pub font_slider: HorNiceSlider,
    pub speed_slider: HorNiceSlider,
}

impl PlayIndicator for Button {
    fn set_label(&mut self, label: &str) {
        WidgetExt::set_label(self, label);
        self.redraw();
    }
}

fn control_label(text: &str, width: i32, row: &mut Flex) {
    let frame = Frame::default()
        .with_label(text)
        .with_align(Align::Right | Align::Inside);
    row.fixed(&frame, width);
}

fn slider(min: i32, max: i32) -> HorNiceSlider {
    let mut slider = HorNiceSlider::default();
    slider.set_range(min as f64, max as f64);
    slider.set_step(1.0, 1);
    slider
}

/// Build the window and its controls. Slider positions are set later, from
/// the loaded settings.
pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let s = sender;

    let mut wind = Window::new(100, 100, 600, 400, WINDOW_TITLE);
    wind.set_xclass(WINDOW_TITLE);

    let mut flex = Flex::new(0, 0, 600, 400, None);
    flex.set_type(FlexType::Column);
    flex.set_margin(6);

    let mut editor = TextEditor::new(0, 0, 0, 0, "");
    editor.set_buffer(TextBuffer::default());
    editor.wrap_mode(WrapMode::AtBounds, 0);

    let mut row = Flex::default();
    row.set_type(FlexType::Row);
    row.set_pad(6);

    let mut play_button = Button::default().with_label("Play");
    row.fixed(&play_button, 70);

    control_label("Font Size:", 70, &mut row);
    let mut font_slider = slider(MIN_FONT_SIZE, MAX_FONT_SIZE);

    control_label("Speed:", 50, &mut row);
    let mut speed_slider = slider(MIN_SPEED, MAX_SPEED);

    let mut theme_button = Button::default().with_label("Toggle Theme");
    row.fixed(&theme_button, 110);

    row.end();
    flex.fixed(&row, CONTROLS_HEIGHT);
    flex.end();
    wind.resizable(&flex);
    wind.end();

    play_button.set_callback({ let s = *s; move |_| s.send(Message::TogglePlay) });
    theme_button.set_callback({ let s = *s; move |_| s.send(Message::ToggleTheme) });
    font_slider.set_callback({ let s = *s; move |sl| s.send(Message::FontSizeChanged(sl.value() as i32)) });
    speed_slider.set_callback({ let s = *s; move |sl| s.send(Message::SpeedChanged(sl.value() as i32)) });

    // Moves also land here; only width changes matter.
    let mut last_width = wind.w();
    wind.resize_callback({
        let s = *s;
        move |_, _, _, w, _| {
            if w != last_width {
                last_width = w;
                s.send(Message::Resized(w));
            }
        }
    });

    // Close goes through the dispatch loop so settings are saved first.
    wind.set_callback({
        let s = *s;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    install_shortcuts(&mut wind, s);

    MainWidgets {
        wind,
        editor,
        play_button,
        font_slider,
        speed_slider,
    }
}
