//! Thread detail column with the reply draft area.

use iced::widget::{Column, button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Font, Length};

use mauto_core::{EmailDetail, ThreadDetailStore, ThreadMessage};

use crate::message::Message;
use crate::style::{
    avatar_style, draft_panel_style, ghost_button_style, header_style, message_body_style,
    palette, primary_button_style, scrollable_style, search_input_style, thread_style,
};

/// Renders the thread column for the current selection.
pub fn view_thread(detail: &ThreadDetailStore) -> Element<'static, Message> {
    let content: Element<'static, Message> = if detail.email_id().is_none() {
        view_centered("\u{2709}", "Select an email to view details")
    } else if detail.is_loading() {
        view_centered("\u{23F3}", "Loading thread...")
    } else if let Some(loaded) = detail.detail() {
        view_loaded(loaded, detail)
    } else {
        view_load_error()
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(thread_style)
        .into()
}

fn view_centered(icon: &'static str, label: &'static str) -> Element<'static, Message> {
    container(
        column![
            text(icon).size(40),
            text(label).size(15).style(|_theme| text::Style {
                color: Some(palette::current().text_muted),
            }),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn view_load_error() -> Element<'static, Message> {
    container(
        column![
            text("\u{26A0}").size(40),
            text("Could not load this email")
                .size(15)
                .style(|_theme| text::Style {
                    color: Some(palette::current().accent_red),
                }),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn view_loaded(loaded: &EmailDetail, store: &ThreadDetailStore) -> Element<'static, Message> {
    let header = container(
        text(loaded.email.display_subject().to_string())
            .size(18)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            }),
    )
    .padding([0, 24])
    .height(Length::Fixed(64.0))
    .width(Length::Fill)
    .align_y(Alignment::Center)
    .style(header_style);

    let messages = Column::with_children(loaded.thread.iter().map(view_message))
        .spacing(32)
        .padding(24);

    column![
        header,
        scrollable(messages)
            .height(Length::Fill)
            .style(scrollable_style),
        container(view_draft_area(store)).padding(24),
    ]
    .into()
}

fn view_message(message: &ThreadMessage) -> Element<'static, Message> {
    let initial = message
        .sender_initial()
        .map_or_else(|| "?".to_string(), |c| c.to_string());

    let avatar = container(text(initial).size(12).font(Font {
        weight: iced::font::Weight::Bold,
        ..Default::default()
    }))
    .width(Length::Fixed(32.0))
    .height(Length::Fixed(32.0))
    .center_x(Length::Fixed(32.0))
    .center_y(Length::Fixed(32.0))
    .style(avatar_style);

    let mut meta = column![
        text(message.sender.clone()).size(14).font(Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        }),
        text(message.date.long_label())
            .size(12)
            .style(|_theme| text::Style {
                color: Some(palette::current().text_muted),
            }),
    ]
    .spacing(2);
    if let Some(cc) = message.recipients.cc_line() {
        meta = meta.push(text(cc).size(12).style(|_theme| text::Style {
            color: Some(palette::current().text_secondary),
        }));
    }

    let body = container(text(message.display_body()).size(14))
        .padding(20)
        .width(Length::Fill)
        .style(message_body_style);

    column![
        row![avatar, meta].spacing(12).align_y(Alignment::Center),
        row![iced::widget::Space::new().width(Length::Fixed(44.0)), body],
    ]
    .spacing(12)
    .into()
}

fn view_draft_area(store: &ThreadDetailStore) -> Element<'static, Message> {
    let generating = store.is_generating();

    let mut context_input = text_input("Context: Ask for a 15min call...", store.draft_context())
        .on_input(Message::DraftContextChanged)
        .padding([10, 14])
        .size(14)
        .style(search_input_style);
    if !generating {
        context_input = context_input.on_submit(Message::GenerateDraft);
    }

    let send_label = if generating { "\u{23F3}" } else { "\u{27A4}" };
    let send_btn = button(text(send_label).size(16))
        .padding([10, 14])
        .style(primary_button_style)
        .on_press_maybe((!generating).then_some(Message::GenerateDraft));

    let controls = row![
        text("\u{2728}").size(18).style(|_theme| text::Style {
            color: Some(palette::current().accent_purple),
        }),
        context_input,
        send_btn,
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let mut panel = column![].spacing(12);

    if let Some(draft) = store.draft() {
        let title = row![
            text("AI DRAFT")
                .size(11)
                .font(Font {
                    weight: iced::font::Weight::Bold,
                    ..Default::default()
                })
                .style(|_theme| text::Style {
                    color: Some(palette::current().accent_purple),
                })
                .width(Length::Fill),
            button(text("Copy").size(12))
                .padding([4, 8])
                .style(ghost_button_style)
                .on_press(Message::CopyDraft),
        ]
        .align_y(Alignment::Center);

        let draft_body = scrollable(text(draft.to_string()).size(14))
            .height(Length::Shrink)
            .style(scrollable_style);

        panel = panel.push(
            container(column![title, draft_body].spacing(8))
                .padding(16)
                .max_height(256.0),
        );
    }

    panel = panel.push(container(controls).padding(12));

    container(panel)
        .width(Length::Fill)
        .style(draft_panel_style)
        .into()
}
