use ratatui::style::{Color, Style};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// The built-in color themes
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ThemeName {
    #[default]
    Default,
    WarmSunset,
    OceanBreeze,
    SolarizedDark,
}

impl ThemeName {
    /// Returns the palette of the theme, as 256-color indices.
    ///
    /// This doesn't use the `From` trait, as we can't make that a const fn
    pub const fn palette(self) -> Palette {
        let (background, success, primary, danger) = match self {
            Self::Default => (235, 70, 250, 160),
            Self::WarmSunset => (52, 142, 223, 203),
            Self::OceanBreeze => (17, 79, 188, 124),
            Self::SolarizedDark => (235, 108, 136, 167),
        };

        Palette {
            background: Color::Indexed(background),
            success: Color::Indexed(success),
            primary: Color::Indexed(primary),
            danger: Color::Indexed(danger),
        }
    }
}

/// The four colors every theme is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub success: Color,
    pub primary: Color,
    pub danger: Color,
}

/// Styles derived from a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
}

impl From<ThemeName> for Theme {
    fn from(value: ThemeName) -> Self {
        Self {
            palette: value.palette(),
        }
    }
}

impl Theme {
    /// Plain text on the background
    pub const fn base(&self) -> Style {
        Style::new()
            .fg(self.palette.primary)
            .bg(self.palette.background)
    }

    /// Correctly typed text
    pub const fn success(&self) -> Style {
        Style::new()
            .fg(self.palette.success)
            .bg(self.palette.background)
    }

    /// Mistyped text
    pub const fn error(&self) -> Style {
        Style::new().fg(self.palette.primary).bg(self.palette.danger)
    }

    /// The cursor, the status bar and the selected menu entry
    pub const fn reverse(&self) -> Style {
        Style::new()
            .fg(self.palette.background)
            .bg(self.palette.primary)
    }
}
