use fltk::{
    app::Sender,
    button::Button,
    prelude::*,
    valuator::HorNiceSlider,
    window::Window,
};

use super::controllers::PrompterController;
use super::domain::{Message, PrompterSettings};
use super::infrastructure::store::SettingsStore;
use crate::ui::display::FltkDisplay;
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::set_windows_titlebar_theme;
use crate::ui::ticker::FltkTicker;

pub type FltkController = PrompterController<FltkDisplay, FltkTicker, Button>;

/// Main application coordinator: owns the controller, the widgets it does
/// not drive itself, and the settings store.
pub struct AppState<S: SettingsStore> {
    pub controller: FltkController,
    pub window: Window,
    pub font_slider: HorNiceSlider,
    pub speed_slider: HorNiceSlider,
    store: S,
}

impl<S: SettingsStore> AppState<S> {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        store: S,
    ) -> Self {
        let MainWidgets {
            wind,
            editor,
            play_button,
            font_slider,
            speed_slider,
        } = widgets;

        let mut controller = PrompterController::new(
            PrompterSettings::default(),
            FltkDisplay::new(editor),
            FltkTicker::new(sender),
            play_button,
        );
        controller.load_settings(&store);

        let mut state = Self {
            controller,
            window: wind,
            font_slider,
            speed_slider,
            store,
        };
        state.sync_sliders();
        state
    }

    /// Move both sliders to the controller's current values.
    pub fn sync_sliders(&mut self) {
        let settings = self.controller.settings();
        self.font_slider.set_value(settings.font_size as f64);
        self.speed_slider.set_value(settings.speed as f64);
    }

    pub fn show(&mut self) {
        self.window.show();
        set_windows_titlebar_theme(&self.window, self.controller.is_dark());
    }

    /// Handle one message. Returns `true` if the app should exit.
    pub fn dispatch(&mut self, msg: Message) -> bool {
        match msg {
            Message::TogglePlay => self.controller.toggle_play(),
            Message::ScrollTick => self.controller.on_scroll_tick(),
            Message::ResetScroll => self.controller.reset_scroll(),
            Message::FontSizeChanged(size) => self.controller.change_font_size(size),
            Message::SpeedChanged(speed) => self.controller.set_speed(speed),
            Message::ToggleTheme => {
                self.controller.toggle_theme();
                set_windows_titlebar_theme(&self.window, self.controller.is_dark());
            }
            Message::Resized(width) => {
                self.controller.on_resize(width);
                self.sync_sliders();
            }
            Message::WindowClose => {
                self.close();
                return true;
            }
        }
        false
    }

    /// Stop playback, persist preferences and hide the window.
    pub fn close(&mut self) {
        if self.controller.is_playing() {
            self.controller.toggle_play();
        }
        if let Err(e) = self.controller.save_settings(&mut self.store) {
            log::error!("Failed to save settings: {}", e);
        }
        self.window.hide();
    }
}
