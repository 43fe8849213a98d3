use std::time::Duration;

use crate::app::domain::settings::{clamp_font_size, clamp_speed, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::app::domain::{FontFamily, Palette, PlaybackState, PrompterSettings, TICK_INTERVAL};
use crate::app::infrastructure::error::AppError;
use crate::app::infrastructure::store::SettingsStore;

/// Window width (px) per point of font size when the window is resized.
pub const RESIZE_FONT_DIVISOR: i32 = 40;

/// Multi-line text surface with a vertical scroll position.
pub trait PromptDisplay {
    fn scroll_position(&self) -> i32;
    fn set_scroll_position(&mut self, position: i32);
    fn max_scroll_position(&self) -> i32;
    fn set_font(&mut self, family: FontFamily, size: i32);
    fn set_colors(&mut self, palette: Palette);
}

/// Recurring timer driving `PrompterController::on_scroll_tick`.
pub trait ScrollTicker {
    fn start(&mut self, interval: Duration);
    fn stop(&mut self);
}

/// Whatever shows the play/pause action to the user.
pub trait PlayIndicator {
    fn set_label(&mut self, label: &str);
}

/// Font size derived from the window width, kept inside the slider range.
pub fn font_size_for_width(width: i32) -> i32 {
    (width / RESIZE_FONT_DIVISOR).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

/// Owns the prompter state and reacts to UI and timer events.
pub struct PrompterController<D, T, I> {
    display: D,
    ticker: T,
    indicator: I,
    playback: PlaybackState,
    font_family: FontFamily,
    font_size: i32,
    speed: i32,
    is_dark: bool,
}

impl<D, T, I> PrompterController<D, T, I>
where
    D: PromptDisplay,
    T: ScrollTicker,
    I: PlayIndicator,
{
    pub fn new(settings: PrompterSettings, display: D, ticker: T, indicator: I) -> Self {
        let settings = settings.clamped();
        let mut controller = Self {
            display,
            ticker,
            indicator,
            playback: PlaybackState::Stopped,
            font_family: FontFamily::Sans,
            font_size: settings.font_size,
            speed: settings.speed,
            is_dark: settings.dark_theme,
        };
        controller.apply_font();
        controller.apply_theme();
        controller.indicator.set_label(controller.playback.button_label());
        controller
    }

    // --- Playback ---

    pub fn toggle_play(&mut self) {
        match self.playback {
            PlaybackState::Playing => self.ticker.stop(),
            PlaybackState::Stopped => self.ticker.start(TICK_INTERVAL),
        }
        self.playback = self.playback.toggled();
        self.indicator.set_label(self.playback.button_label());
        log::debug!("Playback {:?}", self.playback);
    }

    /// Advance by `speed` units, or pause once the end is reached.
    /// The offset is left at the maximum rather than rewound.
    pub fn on_scroll_tick(&mut self) {
        // A tick already queued when playback stopped is dropped.
        if !self.playback.is_playing() {
            return;
        }

        let position = self.display.scroll_position();
        let max = self.display.max_scroll_position();
        if position < max {
            self.display
                .set_scroll_position((position + self.speed).min(max));
        } else {
            log::debug!("Reached end of text at offset {}", position);
            self.toggle_play();
        }
    }

    pub fn reset_scroll(&mut self) {
        self.display.set_scroll_position(0);
    }

    // --- Font, speed, theme ---

    pub fn change_font_size(&mut self, size: i32) {
        self.font_size = clamp_font_size(size);
        self.apply_font();
    }

    pub fn set_speed(&mut self, speed: i32) {
        self.speed = clamp_speed(speed);
    }

    pub fn toggle_theme(&mut self) {
        self.is_dark = !self.is_dark;
        self.apply_theme();
        log::debug!("Dark theme {}", self.is_dark);
    }

    /// Window width drives the font size, replacing the user's choice.
    pub fn on_resize(&mut self, width: i32) {
        self.change_font_size(font_size_for_width(width));
    }

    fn apply_font(&mut self) {
        self.display.set_font(self.font_family, self.font_size);
    }

    fn apply_theme(&mut self) {
        self.display.set_colors(self.palette());
    }

    // --- Settings ---

    pub fn settings(&self) -> PrompterSettings {
        PrompterSettings {
            font_size: self.font_size,
            speed: self.speed,
            dark_theme: self.is_dark,
        }
    }

    /// Replace font, speed and theme with what the store holds.
    pub fn load_settings(&mut self, store: &impl SettingsStore) {
        let settings = PrompterSettings::load(store);
        self.font_size = settings.font_size;
        self.speed = settings.speed;
        self.is_dark = settings.dark_theme;
        self.apply_font();
        self.apply_theme();
    }

    pub fn save_settings(&self, store: &mut impl SettingsStore) -> Result<(), AppError> {
        self.settings().save(store)
    }

    // --- Accessors ---

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn play_label(&self) -> &'static str {
        self.playback.button_label()
    }

    pub fn font_size(&self) -> i32 {
        self.font_size
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.is_dark)
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::Rgb;
    use crate::app::infrastructure::store::MemoryStore;

    #[derive(Default)]
    struct FakeDisplay {
        position: i32,
        max: i32,
        font: Option<(FontFamily, i32)>,
        colors: Option<Palette>,
    }

    impl PromptDisplay for FakeDisplay {
        fn scroll_position(&self) -> i32 {
            self.position
        }

        fn set_scroll_position(&mut self, position: i32) {
            self.position = position.clamp(0, self.max);
        }

        fn max_scroll_position(&self) -> i32 {
            self.max
        }

        fn set_font(&mut self, family: FontFamily, size: i32) {
            self.font = Some((family, size));
        }

        fn set_colors(&mut self, palette: Palette) {
            self.colors = Some(palette);
        }
    }

    #[derive(Default)]
    struct FakeTicker {
        interval: Option<Duration>,
        starts: usize,
        stops: usize,
    }

    impl FakeTicker {
        fn running(&self) -> bool {
            self.interval.is_some()
        }
    }

    impl ScrollTicker for FakeTicker {
        fn start(&mut self, interval: Duration) {
            self.interval = Some(interval);
            self.starts += 1;
        }

        fn stop(&mut self) {
            self.interval = None;
            self.stops += 1;
        }
    }

    #[derive(Default)]
    struct FakeButton {
        label: String,
    }

    impl PlayIndicator for FakeButton {
        fn set_label(&mut self, label: &str) {
            self.label = label.to_string();
        }
    }

    type TestController = PrompterController<FakeDisplay, FakeTicker, FakeButton>;

    fn controller_with(settings: PrompterSettings, max: i32) -> TestController {
        let display = FakeDisplay {
            max,
            ..Default::default()
        };
        PrompterController::new(settings, display, FakeTicker::default(), FakeButton::default())
    }

    fn controller(max: i32) -> TestController {
        controller_with(PrompterSettings::default(), max)
    }

    #[test]
    fn test_fresh_instance_uses_defaults() {
        let c = controller(100);
        assert_eq!(c.font_size(), 14);
        assert_eq!(c.speed(), 5);
        assert!(!c.is_dark());
        assert!(!c.is_playing());
        assert_eq!(c.indicator().label, "Play");
        assert_eq!(c.display().font, Some((FontFamily::Sans, 14)));
        assert_eq!(c.display().colors, Some(Palette::LIGHT));
    }

    #[test]
    fn test_toggle_play_starts_and_stops_timer() {
        let mut c = controller(100);

        c.toggle_play();
        assert!(c.is_playing());
        assert_eq!(c.ticker().interval, Some(Duration::from_millis(50)));
        assert_eq!(c.indicator().label, "Pause");

        c.toggle_play();
        assert!(!c.is_playing());
        assert!(!c.ticker().running());
        assert_eq!(c.indicator().label, "Play");
        assert_eq!(c.ticker().starts, 1);
        assert_eq!(c.ticker().stops, 1);
    }

    #[test]
    fn test_tick_advances_by_speed() {
        let mut c = controller(100);
        c.set_speed(7);
        c.toggle_play();
        c.on_scroll_tick();
        assert_eq!(c.display().scroll_position(), 7);
        c.on_scroll_tick();
        assert_eq!(c.display().scroll_position(), 14);
        assert!(c.is_playing());
    }

    #[test]
    fn test_tick_stops_at_end_without_rewinding() {
        let mut c = controller(12);
        c.set_speed(10);
        c.toggle_play();

        c.on_scroll_tick();
        assert_eq!(c.display().scroll_position(), 10);
        c.on_scroll_tick();
        assert_eq!(c.display().scroll_position(), 12);
        assert!(c.is_playing());

        c.on_scroll_tick();
        assert!(!c.is_playing());
        assert_eq!(c.display().scroll_position(), 12);
        assert_eq!(c.indicator().label, "Play");
    }

    #[test]
    fn test_repeated_ticks_at_end_stop_exactly_once() {
        let mut c = controller(0);
        c.toggle_play();
        for _ in 0..5 {
            c.on_scroll_tick();
        }
        assert!(!c.is_playing());
        assert_eq!(c.ticker().starts, 1);
        assert_eq!(c.ticker().stops, 1);
    }

    #[test]
    fn test_tick_while_stopped_is_ignored() {
        let mut c = controller(100);
        c.on_scroll_tick();
        assert_eq!(c.display().scroll_position(), 0);
        assert!(!c.is_playing());
        assert_eq!(c.ticker().starts, 0);
    }

    #[test]
    fn test_reset_scroll_keeps_playback_state() {
        let mut c = controller(100);
        c.toggle_play();
        c.on_scroll_tick();
        c.on_scroll_tick();
        c.reset_scroll();
        assert_eq!(c.display().scroll_position(), 0);
        assert!(c.is_playing());

        c.toggle_play();
        c.display_mut().position = 40;
        c.reset_scroll();
        assert_eq!(c.display().scroll_position(), 0);
        assert!(!c.is_playing());
    }

    #[test]
    fn test_font_size_is_clamped_and_applied() {
        let mut c = controller(100);
        for (requested, expected) in [(9, 10), (10, 10), (22, 22), (30, 30), (31, 30)] {
            c.change_font_size(requested);
            assert_eq!(c.font_size(), expected);
            assert_eq!(c.display().font, Some((FontFamily::Sans, expected)));
        }
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut c = controller(100);
        c.set_speed(0);
        assert_eq!(c.speed(), 1);
        c.set_speed(11);
        assert_eq!(c.speed(), 10);
        c.set_speed(3);
        assert_eq!(c.speed(), 3);
    }

    #[test]
    fn test_toggle_theme_twice_restores_light_colors() {
        let mut c = controller(100);
        c.toggle_theme();
        assert!(c.is_dark());
        assert_eq!(c.display().colors, Some(Palette::DARK));

        c.toggle_theme();
        let colors = c.display().colors.unwrap();
        assert_eq!(colors.background, Rgb::WHITE);
        assert_eq!(colors.foreground, Rgb::BLACK);
    }

    #[test]
    fn test_resize_derives_font_size() {
        let mut c = controller(100);
        c.on_resize(200);
        assert_eq!(c.font_size(), 10);
        c.on_resize(600);
        assert_eq!(c.font_size(), 15);
        c.on_resize(4000);
        assert_eq!(c.font_size(), 30);
        assert_eq!(c.display().font, Some((FontFamily::Sans, 30)));
    }

    #[test]
    fn test_resize_overrides_manual_font_choice() {
        let mut c = controller(100);
        c.change_font_size(28);
        c.on_resize(480);
        assert_eq!(c.font_size(), 12);
    }

    #[test]
    fn test_font_size_for_width() {
        assert_eq!(font_size_for_width(0), 10);
        assert_eq!(font_size_for_width(439), 10);
        assert_eq!(font_size_for_width(440), 11);
        assert_eq!(font_size_for_width(1200), 30);
    }

    #[test]
    fn test_saved_settings_restore_on_reopen() {
        let mut store = MemoryStore::default();

        let mut c = controller(100);
        c.set_speed(10);
        c.change_font_size(30);
        c.toggle_theme();
        c.save_settings(&mut store).unwrap();
        assert_eq!(store.sync_count(), 1);

        let reopened = controller_with(PrompterSettings::load(&store), 100);
        assert_eq!(reopened.speed(), 10);
        assert_eq!(reopened.font_size(), 30);
        assert!(reopened.is_dark());
        assert_eq!(reopened.display().colors, Some(Palette::DARK));
    }

    #[test]
    fn test_load_settings_reapplies_display() {
        let mut store = MemoryStore::default();
        PrompterSettings {
            font_size: 20,
            speed: 2,
            dark_theme: true,
        }
        .save(&mut store)
        .unwrap();

        let mut c = controller(100);
        c.load_settings(&store);
        assert_eq!(c.settings().font_size, 20);
        assert_eq!(c.settings().speed, 2);
        assert!(c.settings().dark_theme);
        assert_eq!(c.display().font, Some((FontFamily::Sans, 20)));
        assert_eq!(c.display().colors, Some(Palette::DARK));
    }

    #[test]
    fn test_new_clamps_out_of_range_settings() {
        let c = controller_with(
            PrompterSettings {
                font_size: 2,
                speed: 50,
                dark_theme: false,
            },
            100,
        );
        assert_eq!(c.font_size(), 10);
        assert_eq!(c.speed(), 10);
    }
}
