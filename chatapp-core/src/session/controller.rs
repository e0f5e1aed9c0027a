use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use tracing::{debug, trace, warn};

use super::{Effect, ReactionTarget, ReplyTicket, ScreenMode, ThemePreference, ViewState};
use crate::models::{Contact, ContactId, DateTime, Message, MessageId, Sender};
use crate::placement::{PICKER_WIDTH, TriggerRect, place_popover};
use crate::replies::{RandomReplies, ReplyPicker, default_replies};
use crate::roster::{default_contacts, replying_contact_id};

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Tunables fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    pub theme: ThemePreference,
    pub reply_delay: Duration,
    pub reveal_delay: Duration,
    pub replies: Vec<String>,
    pub replier: ContactId,
    pub picker_width: f32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            reply_delay: DEFAULT_REPLY_DELAY,
            reveal_delay: DEFAULT_REVEAL_DELAY,
            replies: default_replies(),
            replier: replying_contact_id(),
            picker_width: PICKER_WIDTH,
        }
    }
}

/// User and timer inputs understood by [`Session::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Start,
    RevealApp,
    ComposeChanged(String),
    SendMessage(String),
    DeliverReply(ReplyTicket),
    ToggleTheme,
    ToggleSidebar,
    SelectForReaction {
        message_id: MessageId,
        trigger: TriggerRect,
        viewport_width: f32,
        sent_by_user: bool,
    },
    AddReaction(String),
    DismissReactionPicker,
}

/// Owner of the view state and the message thread.
///
/// Every transition runs to completion and reports the follow-up work it
/// needs as [`Effect`]s; nothing here sleeps or spawns.
///
/// Replies are queued: each send enqueues one pending reply and every reply
/// timer that fires delivers the oldest one, so replies always appear in send
/// order even when their timers overlap.
pub struct Session {
    state: ViewState,
    messages: Vec<Message>,
    contacts: Vec<Contact>,
    options: SessionOptions,
    pending_replies: VecDeque<ReplyTicket>,
    next_message_id: u64,
    next_ticket: u64,
    picker: Box<dyn ReplyPicker>,
    clock: fn() -> DateTime,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("messages", &self.messages.len())
            .field("contacts", &self.contacts.len())
            .field("pending_replies", &self.pending_replies)
            .field("picker", &"Box<dyn ReplyPicker>")
            .finish()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            default_contacts(),
            SessionOptions::default(),
            Box::new(RandomReplies::from_entropy()),
        )
    }
}

impl Session {
    pub fn new(
        contacts: Vec<Contact>,
        mut options: SessionOptions,
        picker: Box<dyn ReplyPicker>,
    ) -> Self {
        if options.replies.is_empty() {
            warn!("Empty reply list, using the stock replies");
            options.replies = default_replies();
        }
        Self {
            state: ViewState::new(options.theme),
            messages: Vec::new(),
            contacts,
            options,
            pending_replies: VecDeque::new(),
            next_message_id: 1,
            next_ticket: 1,
            picker,
            clock: DateTime::now,
        }
    }

    /// Replaces the timestamp source, mostly for tests.
    pub fn with_clock(mut self, clock: fn() -> DateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contact(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// The contact that answers messages, if it is part of the roster.
    pub fn replier(&self) -> Option<&Contact> {
        self.contact(&self.options.replier)
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies.len()
    }

    /// The replying contact "types" while any reply is still pending.
    pub fn is_contact_typing(&self) -> bool {
        !self.pending_replies.is_empty()
    }

    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        trace!(?action, "Applying action");
        match action {
            Action::Start => self.start(),
            Action::RevealApp => self.reveal_app(),
            Action::ComposeChanged(text) => {
                self.set_compose_text(text);
                Vec::new()
            }
            Action::SendMessage(text) => self.send_message(&text),
            Action::DeliverReply(ticket) => self.deliver_reply(ticket),
            Action::ToggleTheme => {
                self.toggle_theme();
                Vec::new()
            }
            Action::ToggleSidebar => {
                self.toggle_sidebar();
                Vec::new()
            }
            Action::SelectForReaction {
                message_id,
                trigger,
                viewport_width,
                sent_by_user,
            } => {
                self.select_message_for_reaction(message_id, trigger, viewport_width, sent_by_user);
                Vec::new()
            }
            Action::AddReaction(emoji) => {
                self.add_reaction(&emoji);
                Vec::new()
            }
            Action::DismissReactionPicker => {
                self.dismiss_reaction_picker();
                Vec::new()
            }
        }
    }

    /// Leaves the landing page. Only the first call has an effect.
    pub fn start(&mut self) -> Vec<Effect> {
        if self.state.screen != ScreenMode::Landing {
            debug!(screen = ?self.state.screen, "Ignoring start outside the landing page");
            return Vec::new();
        }
        self.state.screen = ScreenMode::Transitioning;
        debug!(delay = ?self.options.reveal_delay, "Leaving landing page");
        vec![Effect::RevealApp {
            delay: self.options.reveal_delay,
        }]
    }

    pub fn reveal_app(&mut self) -> Vec<Effect> {
        if self.state.screen == ScreenMode::Transitioning {
            self.state.screen = ScreenMode::App;
            debug!("App revealed");
        }
        Vec::new()
    }

    pub fn set_compose_text(&mut self, text: impl Into<String>) {
        self.state.compose = text.into();
    }

    /// Sends whatever is currently in the compose box.
    pub fn send_draft(&mut self) -> Vec<Effect> {
        let text = std::mem::take(&mut self.state.compose);
        let effects = self.send_message(&text);
        if effects.is_empty() {
            // Whitespace-only drafts stay in the box.
            self.state.compose = text;
        }
        effects
    }

    pub fn send_message(&mut self, text: &str) -> Vec<Effect> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        let id = self.push_message(text.to_string(), Sender::LocalUser);
        self.state.compose.clear();
        let ticket = ReplyTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending_replies.push_back(ticket);
        debug!(%id, %ticket, "Message sent, reply scheduled");
        vec![
            Effect::ScrollToLatest,
            Effect::DeliverReply {
                ticket,
                delay: self.options.reply_delay,
            },
        ]
    }

    /// Appends the oldest pending reply.
    pub fn deliver_reply(&mut self, ticket: ReplyTicket) -> Vec<Effect> {
        let Some(queued) = self.pending_replies.pop_front() else {
            warn!(%ticket, "Reply timer fired with nothing pending");
            return Vec::new();
        };
        if queued != ticket {
            trace!(%ticket, %queued, "Timer fired out of order, delivering oldest reply");
        }
        let index = self.picker.pick(self.options.replies.len());
        let body = self.options.replies[index.min(self.options.replies.len() - 1)].clone();
        let sender = Sender::Contact(self.options.replier.clone());
        let id = self.push_message(body, sender);
        debug!(%id, ticket = %queued, "Reply delivered");
        vec![Effect::ScrollToLatest]
    }

    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggle();
        debug!(theme = self.state.theme.name(), "Theme changed");
    }

    pub fn toggle_sidebar(&mut self) {
        self.state.sidebar_visible = !self.state.sidebar_visible;
        debug!(visible = self.state.sidebar_visible, "Sidebar toggled");
    }

    pub fn select_message_for_reaction(
        &mut self,
        message_id: MessageId,
        trigger: TriggerRect,
        viewport_width: f32,
        sent_by_user: bool,
    ) {
        let anchor = place_popover(
            trigger,
            viewport_width,
            self.options.picker_width,
            sent_by_user,
        );
        debug!(%message_id, ?anchor, "Reaction picker opened");
        self.state.reaction_target = Some(ReactionTarget { message_id, anchor });
    }

    /// Adds `emoji` to the selected message and closes the picker.
    pub fn add_reaction(&mut self, emoji: &str) {
        let Some(target) = self.state.reaction_target.take() else {
            return;
        };
        match self.messages.iter_mut().find(|m| m.id == target.message_id) {
            Some(message) => {
                let count = message.reactions.add(emoji);
                debug!(id = %message.id, emoji, count, "Reaction added");
            }
            None => debug!(id = %target.message_id, "Selected message no longer exists"),
        }
    }

    pub fn dismiss_reaction_picker(&mut self) {
        if self.state.reaction_target.take().is_some() {
            debug!("Reaction picker dismissed");
        }
    }

    fn push_message(&mut self, text: String, sender: Sender) -> MessageId {
        let id = MessageId(self.next_message_id);
        self.next_message_id += 1;
        self.messages
            .push(Message::new(id, text, sender, (self.clock)()));
        id
    }
}
