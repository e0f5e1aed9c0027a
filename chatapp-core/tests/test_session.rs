use std::time::Duration;

use chatapp_core::models::{ContactId, DateTime, MessageId, Sender};
use chatapp_core::placement::{Point, TriggerRect};
use chatapp_core::replies::{DEFAULT_REPLIES, FixedReply, RandomReplies, ReplyPicker};
use chatapp_core::roster::default_contacts;
use chatapp_core::session::{
    Action, Effect, ReplyTicket, ScreenMode, Session, SessionOptions, ThemePreference,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("chatapp_core=trace")
        .with_test_writer()
        .try_init();
}

fn session_with(picker: impl ReplyPicker + 'static) -> Session {
    init_tracing();
    Session::new(default_contacts(), SessionOptions::default(), Box::new(picker))
}

fn session() -> Session {
    session_with(FixedReply(0))
}

fn reply_ticket(effects: &[Effect]) -> ReplyTicket {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::DeliverReply { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .expect("no reply scheduled")
}

/// Cycles through candidates so delivered replies reveal the pick order.
struct Sequential(usize);

impl ReplyPicker for Sequential {
    fn pick(&mut self, candidates: usize) -> usize {
        let index = self.0 % candidates;
        self.0 += 1;
        index
    }
}

#[test]
fn test_landing_transition_is_one_way() {
    let mut s = session();
    assert_eq!(s.state().screen, ScreenMode::Landing);

    // Reveal before start does nothing
    assert!(s.reveal_app().is_empty());
    assert_eq!(s.state().screen, ScreenMode::Landing);

    let effects = s.start();
    assert_eq!(
        effects,
        vec![Effect::RevealApp {
            delay: Duration::from_millis(500)
        }]
    );
    assert_eq!(s.state().screen, ScreenMode::Transitioning);

    // Second start is ignored, no second timer
    assert!(s.start().is_empty());
    assert_eq!(s.state().screen, ScreenMode::Transitioning);

    s.reveal_app();
    assert_eq!(s.state().screen, ScreenMode::App);

    assert!(s.start().is_empty());
    s.reveal_app();
    assert_eq!(s.state().screen, ScreenMode::App);
}

#[test]
fn test_send_message_schedules_reply() {
    let mut s = session();
    s.set_compose_text("hello");
    let effects = s.send_message("hello");
    assert_eq!(s.messages().len(), 1);
    assert_eq!(s.state().compose, "");
    assert!(s.is_contact_typing());
    assert!(effects.contains(&Effect::ScrollToLatest));
    assert!(effects.iter().any(|e| matches!(
        e,
        Effect::DeliverReply { delay, .. } if *delay == Duration::from_secs(1)
    )));

    let sent = &s.messages()[0];
    assert_eq!(sent.text, "hello");
    assert_eq!(sent.sender, Sender::LocalUser);
    assert!(sent.reactions.is_empty());

    let ticket = reply_ticket(&effects);
    let effects = s.deliver_reply(ticket);
    assert_eq!(effects, vec![Effect::ScrollToLatest]);
    assert_eq!(s.messages().len(), 2);
    assert!(!s.is_contact_typing());

    let reply = &s.messages()[1];
    assert_eq!(reply.text, DEFAULT_REPLIES[0]);
    assert_eq!(reply.sender, Sender::Contact(ContactId::new("2")));
}

#[test]
fn test_send_blank_is_noop() {
    let mut s = session();
    for text in ["", "   ", "\t\n"] {
        assert!(s.send_message(text).is_empty());
    }
    assert!(s.messages().is_empty());
    assert_eq!(s.pending_replies(), 0);
}

/// A whitespace-only draft is not sent and stays in the compose box.
#[test]
fn test_send_draft() {
    let mut s = session();
    s.set_compose_text("   ");
    assert!(s.send_draft().is_empty());
    assert_eq!(s.state().compose, "   ");

    s.apply(Action::ComposeChanged("  ping  ".into()));
    let effects = s.send_draft();
    assert_eq!(effects.len(), 2);
    assert_eq!(s.state().compose, "");
    assert_eq!(s.messages()[0].text, "  ping  ");
}

#[test]
fn test_message_ids_are_creation_ordered() {
    let mut s = session();
    let first = reply_ticket(&s.send_message("one"));
    let second = reply_ticket(&s.send_message("two"));
    s.deliver_reply(first);
    s.deliver_reply(second);
    let ids: Vec<MessageId> = s.messages().iter().map(|m| m.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), 4);
}

/// Overlapping timers firing in reverse still deliver replies in send order.
#[test]
fn test_replies_follow_send_order() {
    let mut s = session_with(Sequential(0));
    let first = reply_ticket(&s.send_message("first"));
    let second = reply_ticket(&s.send_message("second"));
    assert_ne!(first, second);
    assert_eq!(s.pending_replies(), 2);

    s.deliver_reply(second);
    assert_eq!(s.pending_replies(), 1);
    assert!(s.is_contact_typing());
    s.deliver_reply(first);
    assert_eq!(s.pending_replies(), 0);

    let texts: Vec<&str> = s.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["first", "second", DEFAULT_REPLIES[0], DEFAULT_REPLIES[1]]
    );
}

#[test]
fn test_stray_reply_timer_is_ignored() {
    let mut s = session();
    assert!(s.deliver_reply(ReplyTicket(42)).is_empty());
    assert!(s.messages().is_empty());
}

#[test]
fn test_toggle_theme_is_involution() {
    let mut s = session();
    let before = s.state().clone();
    s.toggle_theme();
    assert_eq!(s.state().theme, ThemePreference::Dark);
    assert_eq!(s.state().sidebar_visible, before.sidebar_visible);
    assert_eq!(s.state().screen, before.screen);
    s.apply(Action::ToggleTheme);
    assert_eq!(s.state(), &before);
}

#[test]
fn test_toggle_sidebar_is_independent() {
    let mut s = session();
    s.toggle_theme();
    s.toggle_sidebar();
    assert!(s.state().sidebar_visible);
    assert_eq!(s.state().theme, ThemePreference::Dark);
    assert_eq!(s.state().screen, ScreenMode::Landing);
    s.apply(Action::ToggleSidebar);
    assert!(!s.state().sidebar_visible);
}

#[test]
fn test_select_message_stores_anchor() {
    let mut s = session();
    s.send_message("mine");
    let id = s.messages()[0].id;

    s.select_message_for_reaction(id, TriggerRect::new(5.0, 20.0), 1000.0, true);
    assert_eq!(s.state().selected_message(), Some(id));
    assert_eq!(s.state().popover_anchor(), Some(Point { x: 10.0, y: 20.0 }));

    s.apply(Action::SelectForReaction {
        message_id: id,
        trigger: TriggerRect::new(950.0, 50.0),
        viewport_width: 1000.0,
        sent_by_user: false,
    });
    assert_eq!(s.state().popover_anchor(), Some(Point { x: 710.0, y: 50.0 }));
}

#[test]
fn test_add_reaction_increments_and_clears_selection() {
    let mut s = session();
    s.send_message("react to me");
    s.send_message("other");
    let id = s.messages()[0].id;
    let trigger = TriggerRect::new(300.0, 100.0);

    s.select_message_for_reaction(id, trigger, 1000.0, false);
    s.add_reaction("🔥");
    assert_eq!(s.state().reaction_target, None);

    s.select_message_for_reaction(id, trigger, 1000.0, false);
    s.add_reaction("👍");
    s.select_message_for_reaction(id, trigger, 1000.0, false);
    s.apply(Action::AddReaction("👍".into()));

    let message = s.message(id).unwrap();
    assert_eq!(message.reactions.count("👍"), 2);
    assert_eq!(message.reactions.count("🔥"), 1);
    assert!(s.messages()[1].reactions.is_empty());
    assert_eq!(s.state().selected_message(), None);
    assert_eq!(s.state().popover_anchor(), None);
}

#[test]
fn test_add_reaction_without_selection_is_noop() {
    let mut s = session();
    s.send_message("untouched");
    let before = s.messages().to_vec();
    s.add_reaction("👍");
    assert_eq!(s.messages(), before.as_slice());
    assert_eq!(s.state().reaction_target, None);
}

/// Selection of an id that is not in the thread is stored, then cleared by a reaction.
#[test]
fn test_add_reaction_to_unknown_message() {
    let mut s = session();
    s.send_message("hi");
    let before = s.messages().to_vec();
    s.select_message_for_reaction(MessageId(999), TriggerRect::new(0.0, 0.0), 800.0, false);
    assert_eq!(s.state().selected_message(), Some(MessageId(999)));
    s.add_reaction("🎉");
    assert_eq!(s.messages(), before.as_slice());
    assert_eq!(s.state().reaction_target, None);
}

#[test]
fn test_dismiss_reaction_picker_is_idempotent() {
    let mut s = session();
    let before = s.state().clone();
    s.dismiss_reaction_picker();
    assert_eq!(s.state(), &before);

    s.send_message("x");
    let id = s.messages()[0].id;
    s.select_message_for_reaction(id, TriggerRect::new(50.0, 60.0), 1000.0, false);
    s.apply(Action::DismissReactionPicker);
    let dismissed = s.state().clone();
    assert_eq!(dismissed.reaction_target, None);
    s.dismiss_reaction_picker();
    assert_eq!(s.state(), &dismissed);
}

#[test]
fn test_custom_options() {
    init_tracing();
    let options = SessionOptions {
        theme: ThemePreference::Dark,
        reply_delay: Duration::from_millis(10),
        reveal_delay: Duration::from_millis(20),
        replies: vec!["only answer".to_string()],
        replier: ContactId::new("5"),
        picker_width: 200.0,
    };
    let mut s = Session::new(default_contacts(), options, Box::new(RandomReplies::seeded(7)));
    assert_eq!(s.state().theme, ThemePreference::Dark);
    assert_eq!(s.replier().map(|c| c.name.as_str()), Some("Alex Turner"));

    assert_eq!(
        s.start(),
        vec![Effect::RevealApp {
            delay: Duration::from_millis(20)
        }]
    );
    let effects = s.send_message("hey");
    let ticket = reply_ticket(&effects);
    assert!(effects.contains(&Effect::DeliverReply {
        ticket,
        delay: Duration::from_millis(10)
    }));
    s.deliver_reply(ticket);
    assert_eq!(s.messages()[1].text, "only answer");
    assert_eq!(s.messages()[1].sender, Sender::Contact(ContactId::new("5")));

    let id = s.messages()[1].id;
    s.select_message_for_reaction(id, TriggerRect::new(900.0, 0.0), 1000.0, false);
    assert_eq!(s.state().popover_anchor(), Some(Point { x: 790.0, y: 0.0 }));
}

#[test]
fn test_empty_reply_list_falls_back_to_stock() {
    init_tracing();
    let options = SessionOptions {
        replies: Vec::new(),
        ..Default::default()
    };
    let mut s = Session::new(default_contacts(), options, Box::new(FixedReply(3)));
    let ticket = reply_ticket(&s.send_message("anyone?"));
    s.deliver_reply(ticket);
    assert_eq!(s.messages()[1].text, DEFAULT_REPLIES[3]);
}

#[test]
fn test_random_replies_stay_in_range() {
    let mut picker = RandomReplies::seeded(42);
    for _ in 0..200 {
        assert!(picker.pick(DEFAULT_REPLIES.len()) < DEFAULT_REPLIES.len());
    }
    assert_eq!(FixedReply(99).pick(4), 3);
}

#[test]
fn test_clock_is_injectable() {
    fn epoch() -> DateTime {
        DateTime(chrono::DateTime::<chrono::Utc>::UNIX_EPOCH)
    }
    let mut s = session().with_clock(epoch);
    s.send_message("then");
    assert_eq!(s.messages()[0].create_time, epoch());
}
