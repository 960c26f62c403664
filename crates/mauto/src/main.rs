//! `Mauto` - desktop triage client for a pre-classified inbox.
//!
//! Built with the iced GUI framework on top of `mauto-core`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod style;
mod view;

use anyhow::Context;
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{Space, mouse_area, row, stack};
use iced::{Element, Event, Length, Size, Subscription, Task, event, mouse, window};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mauto_core::layout::{CursorStyle, PanelEdge};
use mauto_core::{
    ActionOrchestrator, AttachmentPreviewController, ClientConfig, HttpMailApi,
    PanelLayoutController, Request,
};

use message::{KeyboardAction, Message};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mauto=debug,mauto_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mauto");

    let config_path = ClientConfig::default_path();
    let config = ClientConfig::load_from(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    let window_size = Size::new(config.layout.viewport_width, config.layout.viewport_height);

    iced::application(move || Mauto::new(&config), Mauto::update, Mauto::view)
        .title("Mauto")
        .window_size(window_size)
        .subscription(Mauto::subscription)
        .run()?;

    Ok(())
}

/// Main application state.
///
/// Everything the views read lives in the core components; this struct only
/// routes events to them.
struct Mauto {
    /// Remote operations and the list/detail stores.
    orchestrator: ActionOrchestrator<HttpMailApi>,
    /// Nav, list and attachment sidebar widths.
    layout: PanelLayoutController,
    /// Attachment preview panel.
    preview: AttachmentPreviewController,
}

impl Mauto {
    /// Create new application instance and load the default category.
    fn new(config: &ClientConfig) -> (Self, Task<Message>) {
        let api = HttpMailApi::new(config.api_base_url.clone());
        let preview = AttachmentPreviewController::new(
            api.base_url(),
            config.layout.preview_width,
            config.layout.viewport_width,
        );
        let mut orchestrator = ActionOrchestrator::new(api, config);
        let startup = orchestrator.select_category(config.default_category);

        let app = Self {
            orchestrator,
            layout: PanelLayoutController::new(&config.layout),
            preview,
        };
        (app, perform(startup))
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectCategory(category) => {
                self.preview.close();
                return perform(self.orchestrator.select_category(category));
            }
            Message::Sync => {
                return perform_maybe(self.orchestrator.trigger_sync());
            }
            Message::SelectEmail(id) => {
                if self.orchestrator.detail().email_id() != Some(&id) {
                    self.preview.close();
                }
                return perform_maybe(self.orchestrator.select_email(id));
            }
            Message::SearchChanged(prompt) => {
                self.orchestrator.set_search_prompt(prompt);
            }
            Message::SearchCommit => {
                return perform_maybe(self.orchestrator.commit_search());
            }
            Message::SearchReset => {
                self.orchestrator.reset_search();
            }
            Message::DraftContextChanged(context) => {
                self.orchestrator.set_draft_context(context);
            }
            Message::GenerateDraft => {
                return perform_maybe(self.orchestrator.generate_draft());
            }
            Message::CopyDraft => {
                if let Some(draft) = self.orchestrator.detail().draft() {
                    return iced::clipboard::write(draft.to_string());
                }
            }
            Message::Outcome(outcome) => {
                return perform_maybe(self.orchestrator.apply(outcome));
            }
            Message::StartPanelDrag(edge) => {
                if let Err(e) = self.layout.begin_drag(edge) {
                    tracing::debug!("Ignoring drag start: {}", e);
                }
            }
            Message::StartPreviewDrag => {
                if let Err(e) = self.preview.begin_drag() {
                    tracing::debug!("Ignoring drag start: {}", e);
                }
            }
            Message::PointerMoved(x) => {
                self.layout.pointer_moved(x);
                self.preview.pointer_moved(x);
            }
            Message::PointerReleased => {
                self.layout.pointer_released();
                self.preview.pointer_released();
            }
            Message::WindowResized(width) => {
                self.layout.set_viewport_width(width);
                self.preview.set_viewport_width(width);
            }
            Message::OpenAttachment {
                message_id,
                attachment,
            } => {
                self.preview.open(message_id, attachment);
            }
            Message::ClosePreview => {
                self.preview.close();
            }
            Message::OpenExternally(url) => {
                if let Err(e) = opener::open(&url) {
                    tracing::warn!("Failed to open {}: {}", url, e);
                }
            }
            Message::KeyPressed(action) => {
                return self.handle_keyboard_action(action);
            }
        }
        Task::none()
    }

    /// Handle keyboard shortcut actions.
    fn handle_keyboard_action(&mut self, action: KeyboardAction) -> Task<Message> {
        match action {
            KeyboardAction::Cancel => {
                if self.preview.is_open() {
                    self.preview.close();
                } else {
                    self.orchestrator.clear_selection();
                }
                Task::none()
            }
            KeyboardAction::Refresh => {
                let category = self.orchestrator.list().category();
                Task::done(Message::SelectCategory(category))
            }
            KeyboardAction::Sync => Task::done(Message::Sync),
        }
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let list = self.orchestrator.list();
        let detail = self.orchestrator.detail();
        let dragging = self.layout.active_drag();

        let mut content = row![
            view::view_nav(
                list.category(),
                self.orchestrator.is_syncing(),
                self.layout.nav_width()
            ),
            view::view_pane_divider(
                Message::StartPanelDrag(PanelEdge::Nav),
                dragging == Some(PanelEdge::Nav)
            ),
            view::view_email_list(list, self.layout.list_width()),
            view::view_pane_divider(
                Message::StartPanelDrag(PanelEdge::List),
                dragging == Some(PanelEdge::List)
            ),
            view::view_thread(detail),
        ];

        // Both right-anchored panels measure from the window's right edge,
        // so the preview takes the sidebar's place while open.
        if let Some(active) = self.preview.active() {
            content = content
                .push(view::view_pane_divider(
                    Message::StartPreviewDrag,
                    self.preview.is_dragging(),
                ))
                .push(view::view_preview(active, self.preview.width()));
        } else if detail.email_id().is_some() {
            content = content
                .push(view::view_pane_divider(
                    Message::StartPanelDrag(PanelEdge::Sidebar),
                    dragging == Some(PanelEdge::Sidebar),
                ))
                .push(view::view_attachment_sidebar(
                    detail.detail(),
                    self.layout.sidebar_width(),
                ));
        }

        let content = content.width(Length::Fill).height(Length::Fill);

        // A full-window layer owns the cursor while dragging, so widgets
        // underneath neither change it nor show hover styling.
        if self.is_resizing() {
            let overlay = mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
                .interaction(mouse::Interaction::ResizingHorizontally);
            stack![content, overlay].into()
        } else {
            content.into()
        }
    }

    fn is_resizing(&self) -> bool {
        self.layout.cursor() == CursorStyle::ColumnResize
            || self.preview.cursor() == CursorStyle::ColumnResize
    }

    /// Window and keyboard events always; pointer motion only while a
    /// divider is held.
    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![event::listen_with(handle_event)];
        if self.layout.is_dragging() || self.preview.is_dragging() {
            subscriptions.push(event::listen_with(handle_pointer_event));
        }
        Subscription::batch(subscriptions)
    }
}

/// Wraps an issued request as a task that reports its outcome.
fn perform(request: Request) -> Task<Message> {
    Task::perform(request, Message::Outcome)
}

fn perform_maybe(request: Option<Request>) -> Task<Message> {
    request.map_or_else(Task::none, perform)
}

fn handle_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::WindowResized(size.width))
        }
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            handle_key_press(&key, modifiers)
        }
        _ => None,
    }
}

fn handle_pointer_event(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position.x))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        _ => None,
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: &Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    match key {
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::Cancel))
        }
        Key::Named(keyboard::key::Named::F5) => Some(Message::KeyPressed(KeyboardAction::Refresh)),
        // Ctrl+Shift+S: Sync
        Key::Character(c) if ctrl && modifiers.shift() && c.eq_ignore_ascii_case("s") => {
            Some(Message::KeyPressed(KeyboardAction::Sync))
        }
        _ => None,
    }
}
