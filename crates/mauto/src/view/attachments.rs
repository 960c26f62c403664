//! Attachment sidebar and preview panel.

use iced::widget::{Column, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Font, Length};

use mauto_core::{ActivePreview, Attachment, EmailDetail, EmailId, PreviewKind};

use crate::message::Message;
use crate::style::{
    card_style, ghost_button_style, header_style, palette, primary_button_style,
    scrollable_style, sidebar_style,
};

/// Renders the list of attachments across the loaded thread.
pub fn view_attachment_sidebar(detail: Option<&EmailDetail>, width: f32) -> Element<'static, Message> {
    let header = view_panel_header("Attachments".to_string(), None);

    let entries: Vec<Element<'static, Message>> = detail
        .map(|d| {
            d.thread
                .iter()
                .flat_map(|message| {
                    message
                        .attachments
                        .iter()
                        .map(move |attachment| view_attachment_row(&message.id, attachment))
                })
                .collect()
        })
        .unwrap_or_default();

    let body: Element<'static, Message> = if entries.is_empty() {
        container(text("No attachments").size(13).style(|_theme| text::Style {
            color: Some(palette::current().text_muted),
        }))
        .padding(24)
        .into()
    } else {
        scrollable(Column::with_children(entries).spacing(8).padding(16))
            .height(Length::Fill)
            .style(scrollable_style)
            .into()
    };

    container(column![header, body])
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(sidebar_style)
        .into()
}

fn view_attachment_row(message_id: &EmailId, attachment: &Attachment) -> Element<'static, Message> {
    let icon = match PreviewKind::from_mime(&attachment.mime_type) {
        PreviewKind::Image => "\u{1F5BC}",
        PreviewKind::Pdf => "\u{1F4C4}",
        PreviewKind::Download => "\u{1F4CE}",
    };

    button(
        row![
            text(icon).size(18),
            column![
                text(attachment.filename.clone()).size(13).font(Font {
                    weight: iced::font::Weight::Medium,
                    ..Default::default()
                }),
                text(attachment.size_label())
                    .size(11)
                    .style(|_theme| text::Style {
                        color: Some(palette::current().text_muted),
                    }),
            ]
            .spacing(2),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([8, 10])
    .style(ghost_button_style)
    .on_press(Message::OpenAttachment {
        message_id: message_id.clone(),
        attachment: attachment.clone(),
    })
    .into()
}

/// Renders the preview panel for the active attachment.
///
/// Content is never downloaded into the client; image and PDF previews hand
/// the content URL to the system viewer.
pub fn view_preview(active: &ActivePreview, width: f32) -> Element<'static, Message> {
    let header = view_panel_header(
        active.attachment.filename.clone(),
        Some(Message::ClosePreview),
    );

    let (icon, description, action) = match active.kind {
        PreviewKind::Image => ("\u{1F5BC}", "Image", "Open image"),
        PreviewKind::Pdf => ("\u{1F4C4}", "PDF document", "Open in viewer"),
        PreviewKind::Download => ("\u{1F4CE}", "No preview available", "Download"),
    };

    let card = container(
        column![
            text(icon).size(48),
            text(description).size(14),
            text(format!(
                "{} \u{00B7} {}",
                active.attachment.mime_type,
                active.attachment.size_label()
            ))
            .size(12)
            .style(|_theme| text::Style {
                color: Some(palette::current().text_muted),
            }),
            button(text(action).size(13))
                .padding([8, 16])
                .style(primary_button_style)
                .on_press(Message::OpenExternally(active.url.clone())),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(32)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .style(card_style);

    container(column![header, container(card).padding(24)])
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(sidebar_style)
        .into()
}

fn view_panel_header(title: String, close: Option<Message>) -> Element<'static, Message> {
    let mut bar = row![
        text(title)
            .size(15)
            .font(Font {
                weight: iced::font::Weight::Semibold,
                ..Default::default()
            })
            .width(Length::Fill),
    ]
    .align_y(Alignment::Center);

    if let Some(close) = close {
        bar = bar.push(
            button(text("\u{2715}").size(12))
                .padding([6, 8])
                .style(ghost_button_style)
                .on_press(close),
        );
    }

    container(bar)
        .padding([0, 16])
        .height(Length::Fixed(64.0))
        .width(Length::Fill)
        .align_y(Alignment::Center)
        .style(header_style)
        .into()
}
