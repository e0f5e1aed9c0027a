use std::fmt;
use std::time::Duration;

/// Handle of one scheduled contact reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplyTicket(pub u64);

impl fmt::Display for ReplyTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reply-{}", self.0)
    }
}

/// Work requested by a transition that the host runtime has to carry out.
///
/// Timers are fire-and-forget: the host waits `delay` and feeds the matching
/// action back into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Call [`Session::reveal_app`](super::Session::reveal_app) after `delay`.
    RevealApp { delay: Duration },
    /// Call [`Session::deliver_reply`](super::Session::deliver_reply) after `delay`.
    DeliverReply { ticket: ReplyTicket, delay: Duration },
    /// The thread grew; keep its newest message in view.
    ScrollToLatest,
}
