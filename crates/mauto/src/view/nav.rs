//! Navigation rail: categories and the sync trigger.

use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Alignment, Element, Font, Length};

use mauto_core::Category;

use crate::message::Message;
use crate::style::{
    category_button_selected_style, category_button_style, header_style, nav_style, palette,
    secondary_button_style,
};

/// Renders the navigation rail.
pub fn view_nav(active: Category, is_syncing: bool, width: f32) -> Element<'static, Message> {
    let brand = container(
        row![
            text("\u{26A1}").size(22),
            text("Mauto")
                .size(20)
                .font(Font {
                    weight: iced::font::Weight::Bold,
                    ..Default::default()
                })
                .style(|_theme| text::Style {
                    color: Some(palette::current().primary),
                }),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding([0, 24])
    .height(Length::Fixed(64.0))
    .width(Length::Fill)
    .align_y(Alignment::Center)
    .style(header_style);

    let categories = Column::with_children(
        Category::ALL
            .iter()
            .map(|&category| view_category_item(category, category == active)),
    )
    .spacing(4)
    .padding(16);

    // The trigger stays disabled through the settle delay.
    let sync_label = if is_syncing { "Syncing..." } else { "Sync Gmail" };
    let sync_btn = button(
        row![text("\u{21BB}").size(16), text(sync_label).size(14)]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([10, 16])
    .style(secondary_button_style)
    .on_press_maybe((!is_syncing).then_some(Message::Sync));

    let content = column![
        brand,
        categories,
        Space::new().height(Length::Fill),
        container(sync_btn).padding(16),
    ];

    container(content)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(nav_style)
        .into()
}

fn view_category_item(category: Category, is_active: bool) -> Element<'static, Message> {
    let icon = match category {
        Category::Jobs => "\u{1F4BC}",   // briefcase
        Category::Others => "\u{1F4E8}", // incoming envelope
    };

    let style = if is_active {
        category_button_selected_style
    } else {
        category_button_style
    };

    button(
        row![
            text(icon).size(16),
            text(category.display_name()).size(14).font(Font {
                weight: if is_active {
                    iced::font::Weight::Semibold
                } else {
                    iced::font::Weight::Normal
                },
                ..Default::default()
            }),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([10, 16])
    .style(style)
    .on_press(Message::SelectCategory(category))
    .into()
}
