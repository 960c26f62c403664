//! Email list column: search box, count badge and email cards.

use iced::widget::{Column, button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Font, Length};

use mauto_core::{CategoryListStore, Email, EmailId};

use crate::message::Message;
use crate::style::{
    badge_style, email_button_selected_style, email_button_style, ghost_button_style,
    header_style, list_style, palette, scrollable_style, search_input_style,
};

/// Renders the email list column.
pub fn view_email_list(list: &CategoryListStore, width: f32) -> Element<'static, Message> {
    let count_badge = container(text(list.emails().len().to_string()).size(12))
        .padding([4, 8])
        .style(badge_style);

    let header = container(
        row![
            text(list.category().display_name())
                .size(18)
                .font(Font {
                    weight: iced::font::Weight::Semibold,
                    ..Default::default()
                }),
            iced::widget::Space::new().width(Length::Fill),
            count_badge,
        ]
        .align_y(Alignment::Center),
    )
    .padding([0, 24])
    .height(Length::Fixed(64.0))
    .width(Length::Fill)
    .align_y(Alignment::Center)
    .style(header_style);

    let search = view_search(list);

    let body: Element<'static, Message> = if list.is_loading() {
        view_placeholder("Loading emails...")
    } else if list.emails().is_empty() {
        view_placeholder("No emails")
    } else {
        let cards = Column::with_children(
            list.emails()
                .iter()
                .map(|email| view_email_card(email, list.selected())),
        )
        .spacing(12)
        .padding(12);
        scrollable(cards)
            .height(Length::Fill)
            .style(scrollable_style)
            .into()
    };

    container(column![header, search, body])
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(list_style)
        .into()
}

fn view_search(list: &CategoryListStore) -> Element<'static, Message> {
    let placeholder = if list.is_filtering() {
        "Filtering..."
    } else {
        "Filter, e.g. \"more than 7 days ago\""
    };

    let input = text_input(placeholder, list.search_prompt())
        .on_input(Message::SearchChanged)
        .on_submit(Message::SearchCommit)
        .padding([8, 12])
        .size(13)
        .style(search_input_style);

    let mut bar = row![input].spacing(6).align_y(Alignment::Center);

    if list.applied_prompt().is_some() || !list.search_prompt().is_empty() {
        bar = bar.push(
            button(text("\u{2715}").size(12))
                .padding([6, 8])
                .style(ghost_button_style)
                .on_press(Message::SearchReset),
        );
    }

    let mut content = column![bar].spacing(6);
    if let Some(applied) = list.applied_prompt() {
        content = content.push(
            text(format!("Filtered by \u{201C}{applied}\u{201D}"))
                .size(11)
                .style(|_theme| text::Style {
                    color: Some(palette::current().text_muted),
                }),
        );
    }

    container(content).padding([12, 12]).into()
}

fn view_email_card(email: &Email, selected: Option<&EmailId>) -> Element<'static, Message> {
    let is_selected = selected == Some(&email.id);

    let top = row![
        text(email.recipients.summary())
            .size(12)
            .style(|_theme| text::Style {
                color: Some(palette::current().text_muted),
            })
            .width(Length::Fill),
        text(email.date.short_label())
            .size(11)
            .style(|_theme| text::Style {
                color: Some(palette::current().text_muted),
            }),
    ]
    .spacing(8);

    let subject = text(email.display_subject().to_string())
        .size(14)
        .font(Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        });

    let snippet = text(truncate(&email.snippet, 140))
        .size(12)
        .style(|_theme| text::Style {
            color: Some(palette::current().text_secondary),
        });

    let style = if is_selected {
        email_button_selected_style
    } else {
        email_button_style
    };

    button(column![top, subject, snippet].spacing(6))
        .width(Length::Fill)
        .padding(14)
        .style(style)
        .on_press(Message::SelectEmail(email.id.clone()))
        .into()
}

fn view_placeholder(label: &'static str) -> Element<'static, Message> {
    container(text(label).size(14).style(|_theme| text::Style {
        color: Some(palette::current().text_muted),
    }))
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// Truncates to `max` characters, appending an ellipsis when cut.
fn truncate(s: &str, max: usize) -> String {
    let mut chars = s.chars();
    let head: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{}\u{2026}", head.trim_end())
    } else {
        head
    }
}
