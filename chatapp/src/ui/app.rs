use chatapp_core::Session;
use chatapp_core::placement::Point;
use chatapp_core::replies::RandomReplies;
use chatapp_core::roster::default_contacts;
use chatapp_core::session::{ReplyTicket, ScreenMode};
use iced::keyboard::{self, key};
use iced::widget::{container, scrollable, text};
use iced::{Element, Event, Length, Size, Subscription, Task, Theme, event, mouse, window};

use crate::config::AppConfig;
use crate::ui::core::{Screen, ScreenCommand};
use crate::ui::effects;
use crate::ui::screens::{
    ConversationMessage, ConversationScreen, LandingMessage, LandingScreen,
};
use crate::ui::theme::{self, colors};

/// State shared by every screen.
pub struct AppContext {
    pub session: Session,
    /// Last known cursor position in window coordinates.
    pub cursor: Point,
    pub viewport: Size,
    /// Scrollable holding the message thread.
    pub thread_id: scrollable::Id,
}

impl AppContext {
    pub fn new(session: Session, viewport: Size) -> Self {
        Self {
            session,
            cursor: Point::default(),
            viewport,
            thread_id: scrollable::Id::unique(),
        }
    }
}

pub struct ChatApp {
    landing: LandingScreen,
    conversation: ConversationScreen,
    ctx: AppContext,
}

#[derive(Clone)]
pub enum AppMessage {
    // Wrapped screen messages
    Landing(LandingMessage),
    Conversation(ConversationMessage),
    // Timers
    RevealApp,
    ReplyDue(ReplyTicket),
    // Window events from subscription
    CursorMoved(Point),
    ViewportResized(Size),
    Escape,
}

impl std::fmt::Debug for AppMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppMessage::Landing(msg) => write!(f, "Landing({msg:?})"),
            AppMessage::Conversation(_) => write!(f, "Conversation(<msg>)"),
            AppMessage::RevealApp => write!(f, "RevealApp"),
            AppMessage::ReplyDue(ticket) => write!(f, "ReplyDue({ticket})"),
            AppMessage::CursorMoved(_) => write!(f, "CursorMoved"),
            AppMessage::ViewportResized(size) => {
                write!(f, "ViewportResized({}x{})", size.width, size.height)
            }
            AppMessage::Escape => write!(f, "Escape"),
        }
    }
}

impl ChatApp {
    pub fn new(config: AppConfig) -> (Self, Task<AppMessage>) {
        let session = Session::new(
            default_contacts(),
            config.session_options(),
            Box::new(RandomReplies::from_entropy()),
        );
        let viewport = Size::new(config.window_width, config.window_height);
        (Self::with_session(session, viewport), Task::none())
    }

    /// Wraps an existing session, e.g. one prepared by a test.
    pub fn with_session(session: Session, viewport: Size) -> Self {
        tracing::info!(theme = %session.state().theme.name(), "Starting session");
        Self {
            landing: LandingScreen::new(),
            conversation: ConversationScreen::new(),
            ctx: AppContext::new(session, viewport),
        }
    }

    pub fn session(&self) -> &Session {
        &self.ctx.session
    }

    /// Helper method to turn a ScreenCommand into a Task<AppMessage>
    fn handle_screen_command(&self, cmd: ScreenCommand) -> Task<AppMessage> {
        match cmd {
            ScreenCommand::None => Task::none(),
            ScreenCommand::Effects(list) => effects::run_effects(list, &self.ctx.thread_id),
        }
    }

    pub fn title(&self) -> String {
        "ChatApp".to_string()
    }

    pub fn theme(&self) -> Theme {
        theme::iced_theme(self.ctx.session.state().theme)
    }

    pub fn subscription(&self) -> Subscription<AppMessage> {
        event::listen_with(Self::on_window_event)
    }

    /// Maps raw window events to app messages. Captured events count too: a
    /// focused text input swallows Escape, which must still close the picker.
    pub fn on_window_event(
        event: Event,
        _status: event::Status,
        _window: window::Id,
    ) -> Option<AppMessage> {
        match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(AppMessage::CursorMoved(Point {
                    x: position.x,
                    y: position.y,
                }))
            }
            // Some platforms never follow the open event with a resize
            Event::Window(window::Event::Opened { size, .. })
            | Event::Window(window::Event::Resized(size)) => {
                Some(AppMessage::ViewportResized(size))
            }
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::Escape),
                ..
            }) => Some(AppMessage::Escape),
            _ => None,
        }
    }

    pub fn update(&mut self, message: AppMessage) -> Task<AppMessage> {
        let screen = self.ctx.session.state().screen;
        match (screen, message) {
            (ScreenMode::Landing, AppMessage::Landing(msg)) => {
                let cmd = self.landing.update(msg, &mut self.ctx);
                self.handle_screen_command(cmd)
            }
            (ScreenMode::App, AppMessage::Conversation(msg)) => {
                let cmd = self.conversation.update(msg, &mut self.ctx);
                self.handle_screen_command(cmd)
            }
            (_, AppMessage::RevealApp) => {
                let list = self.ctx.session.reveal_app();
                effects::run_effects(list, &self.ctx.thread_id)
            }
            // Replies land even when no conversation is on screen
            (_, AppMessage::ReplyDue(ticket)) => {
                let list = self.ctx.session.deliver_reply(ticket);
                effects::run_effects(list, &self.ctx.thread_id)
            }
            (_, AppMessage::CursorMoved(position)) => {
                self.ctx.cursor = position;
                Task::none()
            }
            (_, AppMessage::ViewportResized(size)) => {
                tracing::trace!(width = size.width, height = size.height, "Viewport resized");
                self.ctx.viewport = size;
                Task::none()
            }
            (_, AppMessage::Escape) => {
                self.ctx.session.dismiss_reaction_picker();
                Task::none()
            }
            // Ignore messages from a screen that is no longer shown
            (screen, message) => {
                tracing::trace!(?screen, ?message, "Dropping stale message");
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, AppMessage> {
        let theme = self.theme();
        match self.ctx.session.state().screen {
            ScreenMode::Landing => self.landing.view(&self.ctx, &theme).map(AppMessage::Landing),
            ScreenMode::Transitioning => Self::transition_view(&theme),
            ScreenMode::App => self
                .conversation
                .view(&self.ctx, &theme)
                .map(AppMessage::Conversation),
        }
    }

    fn transition_view(theme: &Theme) -> Element<'static, AppMessage> {
        container(
            text("Opening ChatApp…")
                .size(18)
                .color(colors::text_secondary(theme)),
        )
        .center(Length::Fill)
        .style(|t: &Theme| container::Style {
            background: Some(iced::Background::Color(colors::background_base(t))),
            ..Default::default()
        })
        .into()
    }
}
