//! Color palette.

use iced::Color;

/// Colors used across the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Brand
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    // Surfaces
    pub surface: Color,
    pub surface_sunken: Color,
    pub background: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Accents
    pub accent_purple: Color,
    pub accent_red: Color,
    pub avatar: Color,

    // States
    pub selected: Color,
    pub selected_border: Color,
    pub hover: Color,
    pub divider_active: Color,

    // Borders
    pub border_subtle: Color,
    pub border_medium: Color,
}

impl Palette {
    /// Slate surfaces with a blue primary and a purple accent for drafts.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.15, 0.39, 0.92), // #2563EB
            primary_light: Color::from_rgb(0.38, 0.56, 0.98),
            primary_dark: Color::from_rgb(0.11, 0.31, 0.85),

            surface: Color::WHITE,
            surface_sunken: Color::from_rgb(0.945, 0.96, 0.976), // slate-100
            background: Color::from_rgb(0.973, 0.98, 0.988),    // slate-50

            text_primary: Color::from_rgb(0.12, 0.16, 0.23), // slate-800
            text_secondary: Color::from_rgb(0.28, 0.33, 0.41),
            text_muted: Color::from_rgb(0.39, 0.45, 0.55), // slate-500
            text_on_primary: Color::WHITE,

            accent_purple: Color::from_rgb(0.58, 0.2, 0.92),
            accent_red: Color::from_rgb(0.86, 0.15, 0.15),
            avatar: Color::from_rgb(0.86, 0.92, 1.0), // blue-100

            selected: Color::from_rgb(0.94, 0.96, 1.0),
            selected_border: Color::from_rgb(0.15, 0.39, 0.92),
            hover: Color::from_rgb(0.96, 0.97, 0.985),
            divider_active: Color::from_rgb(0.38, 0.65, 0.98), // blue-400

            border_subtle: Color::from_rgb(0.886, 0.91, 0.94), // slate-200
            border_medium: Color::from_rgb(0.8, 0.835, 0.88),
        }
    }
}

/// Gets the active palette.
#[must_use]
pub const fn current() -> Palette {
    Palette::light()
}
