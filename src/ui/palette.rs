use crate::settings::Theme;
use ratatui::style::{Color, Modifier, Style};

// Brand colors
const INDIGO: Color = Color::Rgb(0x4F, 0x46, 0xE5); // #4f46e5 - primary
const INDIGO_LIGHT: Color = Color::Rgb(0x81, 0x8C, 0xF8); // #818cf8 - primary on dark
const SLATE_900: Color = Color::Rgb(0x0F, 0x17, 0x2A); // #0f172a - dark background
const SLATE_700: Color = Color::Rgb(0x33, 0x41, 0x55); // #334155
const SLATE_400: Color = Color::Rgb(0x94, 0xA3, 0xB8); // #94a3b8 - muted on dark
const SLATE_500: Color = Color::Rgb(0x64, 0x74, 0x8B); // #64748b - muted on light
const GRAY_50: Color = Color::Rgb(0xF9, 0xFA, 0xFB); // #f9fafb - light background
const INDIGO_50: Color = Color::Rgb(0xEE, 0xF2, 0xFF); // #eef2ff - selection on light
const GREEN: Color = Color::Rgb(0x16, 0xA3, 0x4A); // #16a34a
const AMBER: Color = Color::Rgb(0xD9, 0x77, 0x06); // #d97706
const RED: Color = Color::Rgb(0xDC, 0x26, 0x26); // #dc2626

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub selection: Color,
    pub good: Color,
    pub warn: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: SLATE_900,
                text: GRAY_50,
                muted: SLATE_400,
                accent: INDIGO_LIGHT,
                selection: SLATE_700,
                good: GREEN,
                warn: AMBER,
                error: RED,
            },
            Theme::Light => Self {
                background: GRAY_50,
                text: SLATE_900,
                muted: SLATE_500,
                accent: INDIGO,
                selection: INDIGO_50,
                good: GREEN,
                warn: AMBER,
                error: RED,
            },
        }
    }

    #[must_use]
    pub fn base(&self) -> Style {
        Style::new().bg(self.background).fg(self.text)
    }

    #[must_use]
    pub fn header(&self) -> Style {
        Style::new().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn selected(&self) -> Style {
        Style::new()
            .bg(self.selection)
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted(&self) -> Style {
        Style::new().fg(self.muted)
    }

    #[must_use]
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::new().fg(self.accent)
        } else {
            Style::new().fg(self.muted)
        }
    }

    /// Green below 30, amber up to 60, red above.
    #[must_use]
    pub fn risk(&self, score: u8) -> Color {
        match score {
            0..=29 => self.good,
            30..=60 => self.warn,
            _ => self.error,
        }
    }
}
