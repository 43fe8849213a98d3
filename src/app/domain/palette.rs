#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}

/// Background/foreground pair applied to the prompt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Rgb::WHITE,
        foreground: Rgb::BLACK,
    };

    pub const DARK: Palette = Palette {
        background: Rgb::BLACK,
        foreground: Rgb::WHITE,
    };

    pub fn for_theme(is_dark: bool) -> Self {
        if is_dark { Self::DARK } else { Self::LIGHT }
    }
}

/// Font families the prompt can be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    /// Proportional sans-serif (Arial/Helvetica).
    #[default]
    Sans,
}
