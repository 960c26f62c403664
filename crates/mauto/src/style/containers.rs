//! Container style functions.

use iced::widget::container;
use iced::{Background, Border};

use super::palette;
use super::radius;

/// Navigation rail.
pub fn nav_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        ..Default::default()
    }
}

/// Email list column.
pub fn list_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        ..Default::default()
    }
}

/// Thread detail column.
pub fn thread_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        ..Default::default()
    }
}

/// Attachment sidebar and preview panel.
pub fn sidebar_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        ..Default::default()
    }
}

/// Column header bar with a bottom border.
pub fn header_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Bordered card.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        ..Default::default()
    }
}

/// Message body bubble in a thread.
pub fn message_body_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        text_color: Some(p.text_secondary),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: iced::border::Radius {
                top_left: 0.0,
                top_right: radius::MEDIUM,
                bottom_right: radius::MEDIUM,
                bottom_left: radius::MEDIUM,
            },
        },
        ..Default::default()
    }
}

/// Draft area pinned under the thread.
pub fn draft_panel_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        ..Default::default()
    }
}

/// Sender avatar circle.
pub fn avatar_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.avatar)),
        text_color: Some(p.primary),
        border: Border {
            radius: radius::PILL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Count badge.
pub fn badge_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_sunken)),
        text_color: Some(p.text_muted),
        border: Border {
            radius: radius::PILL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Resize handle line; highlighted while its edge is dragged.
pub fn divider_style(active: bool) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        let color = if active {
            p.divider_active
        } else {
            p.border_subtle
        };
        container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        }
    }
}
