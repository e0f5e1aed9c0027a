use chatapp::config::AppConfig;
use chatapp::ui::screens::{ConversationMessage, LandingMessage};
use chatapp::ui::{AppMessage, ChatApp};
use chatapp_core::models::{MessageId, Sender};
use chatapp_core::placement::{PICKER_WIDTH, Point};
use chatapp_core::replies::{FixedReply, default_replies};
use chatapp_core::roster::default_contacts;
use chatapp_core::session::{ReplyTicket, ScreenMode};
use chatapp_core::{Effect, Session, SessionOptions};
use iced::keyboard::{self, key};
use iced::{Event, Size, event, window};

fn test_session() -> Session {
    Session::new(
        default_contacts(),
        SessionOptions::default(),
        Box::new(FixedReply(0)),
    )
}

fn revealed_app() -> ChatApp {
    let mut app = ChatApp::with_session(test_session(), Size::new(1200.0, 800.0));
    let _ = app.update(AppMessage::Landing(LandingMessage::GetStarted));
    let _ = app.update(AppMessage::RevealApp);
    app
}

fn send(app: &mut ChatApp, text: &str) {
    let _ = app.update(AppMessage::Conversation(ConversationMessage::ComposeChanged(
        text.to_string(),
    )));
    let _ = app.update(AppMessage::Conversation(ConversationMessage::SendMessage));
}

fn window_event(event: Event) -> Option<AppMessage> {
    ChatApp::on_window_event(event, event::Status::Ignored, window::Id::unique())
}

fn escape_pressed() -> Event {
    Event::Keyboard(keyboard::Event::KeyPressed {
        key: keyboard::Key::Named(key::Named::Escape),
        modified_key: keyboard::Key::Named(key::Named::Escape),
        physical_key: key::Physical::Code(key::Code::Escape),
        location: keyboard::Location::Standard,
        modifiers: keyboard::Modifiers::default(),
        text: None,
    })
}

#[test]
fn test_new_app_starts_on_landing() {
    let (app, _) = ChatApp::new(AppConfig::default());
    assert_eq!(app.session().state().screen, ScreenMode::Landing);
    assert!(app.session().messages().is_empty());
}

#[test]
fn test_landing_to_app() {
    let mut app = ChatApp::with_session(test_session(), Size::new(1200.0, 800.0));
    let _ = app.update(AppMessage::Landing(LandingMessage::GetStarted));
    assert_eq!(app.session().state().screen, ScreenMode::Transitioning);

    let _ = app.update(AppMessage::RevealApp);
    assert_eq!(app.session().state().screen, ScreenMode::App);
}

#[test]
fn test_conversation_ignored_while_transitioning() {
    let mut app = ChatApp::with_session(test_session(), Size::new(1200.0, 800.0));
    let _ = app.update(AppMessage::Landing(LandingMessage::GetStarted));
    send(&mut app, "too early");
    let _ = app.update(AppMessage::Conversation(ConversationMessage::ToggleTheme));
    assert!(app.session().messages().is_empty());
    assert!(app.session().state().compose.is_empty());
    assert_eq!(app.session().state().theme, SessionOptions::default().theme);
}

#[test]
fn test_landing_ignored_in_app() {
    let mut app = revealed_app();
    let _ = app.update(AppMessage::Landing(LandingMessage::GetStarted));
    assert_eq!(app.session().state().screen, ScreenMode::App);
}

#[test]
fn test_reply_delivered_while_transitioning() {
    let mut session = test_session();
    let ticket = session
        .send_message("queued before start")
        .into_iter()
        .find_map(|effect| match effect {
            Effect::DeliverReply { ticket, .. } => Some(ticket),
            _ => None,
        })
        .unwrap();
    session.start();
    let mut app = ChatApp::with_session(session, Size::new(1200.0, 800.0));
    assert_eq!(app.session().state().screen, ScreenMode::Transitioning);

    let _ = app.update(AppMessage::ReplyDue(ticket));
    let messages = app.session().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].text, default_replies()[0]);
    assert!(matches!(messages[1].sender, Sender::Contact(_)));
    assert_eq!(app.session().pending_replies(), 0);
}

#[test]
fn test_send_and_reply_in_app() {
    let mut app = revealed_app();
    send(&mut app, "hello");
    assert_eq!(app.session().messages().len(), 1);
    assert!(app.session().is_contact_typing());

    let _ = app.update(AppMessage::ReplyDue(ReplyTicket(1)));
    assert_eq!(app.session().messages().len(), 2);
    assert!(!app.session().is_contact_typing());
}

#[test]
fn test_escape_dismisses_picker() {
    let mut app = revealed_app();
    send(&mut app, "react to me");
    let _ = app.update(AppMessage::Conversation(ConversationMessage::OpenReactionPicker {
        id: MessageId(1),
        sent_by_user: true,
    }));
    assert_eq!(app.session().state().selected_message(), Some(MessageId(1)));

    let _ = app.update(AppMessage::Escape);
    assert!(app.session().state().reaction_target.is_none());
}

#[test]
fn test_escape_mapped_even_when_captured() {
    // A focused compose box captures Escape before the app sees it
    let message =
        ChatApp::on_window_event(escape_pressed(), event::Status::Captured, window::Id::unique());
    assert!(matches!(message, Some(AppMessage::Escape)));
}

#[test]
fn test_window_events_mapped() {
    let opened = window_event(Event::Window(window::Event::Opened {
        position: None,
        size: Size::new(900.0, 700.0),
    }));
    assert!(matches!(opened, Some(AppMessage::ViewportResized(size)) if size.width == 900.0));

    let resized = window_event(Event::Window(window::Event::Resized(Size::new(640.0, 480.0))));
    assert!(matches!(resized, Some(AppMessage::ViewportResized(size)) if size.width == 640.0));

    let moved = window_event(Event::Mouse(iced::mouse::Event::CursorMoved {
        position: iced::Point::new(12.0, 34.0),
    }));
    assert!(matches!(
        moved,
        Some(AppMessage::CursorMoved(Point { x, y })) if x == 12.0 && y == 34.0
    ));
}

#[test]
fn test_picker_clamped_to_opened_window() {
    let mut app = revealed_app();
    send(&mut app, "near the edge");

    // Configured 1200 wide, but the window opened at 900
    let opened = window_event(Event::Window(window::Event::Opened {
        position: None,
        size: Size::new(900.0, 700.0),
    }))
    .unwrap();
    let _ = app.update(opened);
    let _ = app.update(AppMessage::CursorMoved(Point { x: 850.0, y: 300.0 }));
    let _ = app.update(AppMessage::Conversation(ConversationMessage::OpenReactionPicker {
        id: MessageId(1),
        sent_by_user: false,
    }));

    let anchor = app.session().state().popover_anchor().unwrap();
    assert_eq!(anchor, Point { x: 610.0, y: 284.0 });
    assert!(anchor.x + PICKER_WIDTH <= 900.0);
}

#[test]
fn test_react_through_app() {
    let mut app = revealed_app();
    send(&mut app, "nice");
    for _ in 0..2 {
        let _ = app.update(AppMessage::Conversation(ConversationMessage::OpenReactionPicker {
            id: MessageId(1),
            sent_by_user: true,
        }));
        let _ = app.update(AppMessage::Conversation(ConversationMessage::React(
            "🔥".to_string(),
        )));
    }
    let message = &app.session().messages()[0];
    assert_eq!(message.reactions.count("🔥"), 2);
    assert!(app.session().state().reaction_target.is_none());
}
