//! Button style functions.

use iced::widget::button;
use iced::{Background, Border, Color, Shadow};

use super::palette;
use super::radius;

/// Primary action button (sync, generate).
pub fn primary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.primary)),
        text_color: p.text_on_primary,
        border: Border {
            color: p.primary,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.primary_light)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.primary_dark)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(p.surface_sunken)),
            text_color: p.text_muted,
            border: Border {
                color: p.border_subtle,
                ..base.border
            },
            ..base
        },
    }
}

/// Outlined secondary button.
pub fn secondary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.surface)),
        text_color: p.text_primary,
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            border: Border {
                color: p.border_medium,
                ..base.border
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(p.surface_sunken)),
            text_color: p.text_muted,
            ..base
        },
    }
}

/// Borderless icon/text button.
pub fn ghost_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_muted,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::SMALL.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            text_color: p.text_primary,
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
    }
}

/// Category entry in the navigation rail.
pub fn category_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_secondary,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            text_color: p.text_primary,
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
    }
}

/// Active category entry.
pub fn category_button_selected_style(
    _theme: &iced::Theme,
    _status: button::Status,
) -> button::Style {
    let p = palette::current();

    button::Style {
        background: Some(Background::Color(p.selected)),
        text_color: p.primary,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Email card in the list.
pub fn email_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.surface)),
        text_color: p.text_primary,
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            border: Border {
                color: p.border_medium,
                ..base.border
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
    }
}

/// Selected email card.
pub fn email_button_selected_style(_theme: &iced::Theme, _status: button::Status) -> button::Style {
    let p = palette::current();

    button::Style {
        background: Some(Background::Color(p.selected)),
        text_color: p.text_primary,
        border: Border {
            color: p.selected_border,
            width: 1.5,
            radius: radius::MEDIUM.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}
