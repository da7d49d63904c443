use expatise_core::ThemeMode;
use ratatui::style::Color;

/// Runtime palette for the current light/dark mode
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey: Color,

    // Semantic colors
    pub accent: Color,
    pub crown: Color,
    pub selection: Color,
    pub toggle_on: Color,
    pub toggle_off: Color,
    pub error: Color,
    pub success: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg0: Color::Rgb(0x1d, 0x20, 0x27),
            bg1: Color::Rgb(0x27, 0x2b, 0x35),
            bg2: Color::Rgb(0x33, 0x38, 0x45),
            fg0: Color::Rgb(0xe6, 0xe8, 0xee),
            fg1: Color::Rgb(0xc3, 0xc7, 0xd1),
            grey: Color::Rgb(0x8a, 0x90, 0x9e),
            accent: Color::Rgb(0x5b, 0x9c, 0xf5),
            crown: Color::Rgb(0xf5, 0xc2, 0x42),
            selection: Color::Rgb(0x3b, 0x42, 0x55),
            toggle_on: Color::Rgb(0x5b, 0x9c, 0xf5),
            toggle_off: Color::Rgb(0x55, 0x5b, 0x68),
            error: Color::Rgb(0xea, 0x69, 0x62),
            success: Color::Rgb(0xa9, 0xb6, 0x65),
        }
    }

    pub fn light() -> Self {
        Self {
            bg0: Color::Rgb(0xf7, 0xf8, 0xfb),
            bg1: Color::Rgb(0xff, 0xff, 0xff),
            bg2: Color::Rgb(0xe4, 0xe7, 0xee),
            fg0: Color::Rgb(0x1f, 0x23, 0x2b),
            fg1: Color::Rgb(0x3c, 0x42, 0x4f),
            grey: Color::Rgb(0x7a, 0x80, 0x8c),
            accent: Color::Rgb(0x2f, 0x6f, 0xdb),
            crown: Color::Rgb(0xd9, 0x9a, 0x06),
            selection: Color::Rgb(0xd6, 0xe2, 0xf8),
            toggle_on: Color::Rgb(0x2f, 0x6f, 0xdb),
            toggle_off: Color::Rgb(0xb8, 0xbd, 0xc7),
            error: Color::Rgb(0xc9, 0x3c, 0x37),
            success: Color::Rgb(0x4f, 0x8a, 0x10),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_mode() {
        assert_eq!(Theme::for_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::for_mode(ThemeMode::Light), Theme::light());
        assert_ne!(Theme::dark().bg0, Theme::light().bg0);
    }
}
