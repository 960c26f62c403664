//! Draggable divider between resizable panels.

use iced::widget::{Space, container, mouse_area};
use iced::{Element, Length, mouse};

use crate::message::Message;
use crate::style::divider_style;

/// Renders a divider that emits `on_press` when grabbed.
///
/// Motion is tracked through the window-wide pointer subscription, so the
/// drag survives the pointer leaving the handle. The release handler here
/// covers a release that lands before that subscription is running.
pub fn view_pane_divider(on_press: Message, active: bool) -> Element<'static, Message> {
    let line = container(Space::new().height(Length::Fill))
        .width(Length::Fixed(if active { 2.0 } else { 1.0 }))
        .height(Length::Fill)
        .style(divider_style(active));

    // Wider invisible hit area for easier grabbing
    let hit_area = container(line)
        .width(Length::Fixed(8.0))
        .height(Length::Fill)
        .center_x(Length::Fixed(8.0));

    mouse_area(hit_area)
        .on_press(on_press)
        .on_release(Message::PointerReleased)
        .interaction(mouse::Interaction::ResizingHorizontally)
        .into()
}
