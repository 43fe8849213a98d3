use crate::app::infrastructure::error::AppError;
use crate::app::infrastructure::store::SettingsStore;

pub const MIN_FONT_SIZE: i32 = 10;
pub const MAX_FONT_SIZE: i32 = 30;
pub const MIN_SPEED: i32 = 1;
pub const MAX_SPEED: i32 = 10;

pub const DEFAULT_FONT_SIZE: i32 = 14;
pub const DEFAULT_SPEED: i32 = 5;

pub const KEY_FONT_SIZE: &str = "font_size";
pub const KEY_SPEED: &str = "speed";
pub const KEY_DARK_THEME: &str = "dark_theme";

/// The three preferences that survive a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrompterSettings {
    pub font_size: i32,
    pub speed: i32,
    pub dark_theme: bool,
}

impl Default for PrompterSettings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            speed: DEFAULT_SPEED,
            dark_theme: false,
        }
    }
}

pub fn clamp_font_size(size: i32) -> i32 {
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

pub fn clamp_speed(speed: i32) -> i32 {
    speed.clamp(MIN_SPEED, MAX_SPEED)
}

impl PrompterSettings {
    /// Read preferences from the store. Missing keys fall back to defaults and
    /// out-of-range numbers are pulled back into their slider range.
    pub fn load(store: &impl SettingsStore) -> Self {
        let defaults = Self::default();
        Self {
            font_size: clamp_font_size(store.get_or(KEY_FONT_SIZE, defaults.font_size)),
            speed: clamp_speed(store.get_or(KEY_SPEED, defaults.speed)),
            dark_theme: store.get_or(KEY_DARK_THEME, defaults.dark_theme),
        }
    }

    /// Write preferences to the store and flush it.
    pub fn save(&self, store: &mut impl SettingsStore) -> Result<(), AppError> {
        store.set_value(KEY_FONT_SIZE, self.font_size)?;
        store.set_value(KEY_SPEED, self.speed)?;
        store.set_value(KEY_DARK_THEME, self.dark_theme)?;
        store.sync()
    }

    pub fn clamped(self) -> Self {
        Self {
            font_size: clamp_font_size(self.font_size),
            speed: clamp_speed(self.speed),
            dark_theme: self.dark_theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::store::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_default_settings() {
        let settings = PrompterSettings::default();
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.speed, 5);
        assert!(!settings.dark_theme);
    }

    #[test]
    fn test_load_from_empty_store_uses_defaults() {
        let store = MemoryStore::default();
        assert_eq!(PrompterSettings::load(&store), PrompterSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::default();
        let settings = PrompterSettings {
            font_size: 30,
            speed: 10,
            dark_theme: true,
        };
        settings.save(&mut store).unwrap();

        assert_eq!(store.get(KEY_FONT_SIZE), Some(json!(30)));
        assert_eq!(store.get(KEY_SPEED), Some(json!(10)));
        assert_eq!(store.get(KEY_DARK_THEME), Some(json!(true)));
        assert_eq!(PrompterSettings::load(&store), settings);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let mut store = MemoryStore::default();
        store.set(KEY_FONT_SIZE, json!(99));
        store.set(KEY_SPEED, json!(0));
        let settings = PrompterSettings::load(&store);
        assert_eq!(settings.font_size, MAX_FONT_SIZE);
        assert_eq!(settings.speed, MIN_SPEED);
    }

    #[test]
    fn test_wrong_type_falls_back_to_default() {
        let mut store = MemoryStore::default();
        store.set(KEY_FONT_SIZE, json!("large"));
        store.set(KEY_DARK_THEME, json!(1));
        let settings = PrompterSettings::load(&store);
        assert_eq!(settings.font_size, 14);
        assert!(!settings.dark_theme);
    }

    #[test]
    fn test_clamped() {
        let settings = PrompterSettings {
            font_size: 4,
            speed: 42,
            dark_theme: true,
        }
        .clamped();
        assert_eq!(settings.font_size, 10);
        assert_eq!(settings.speed, 10);
        assert!(settings.dark_theme);
    }
}
