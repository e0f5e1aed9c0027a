use std::time::Duration;

use chatapp_core::Effect;
use iced::Task;
use iced::widget::scrollable;

use crate::ui::AppMessage;

/// Resolves after `delay` with `message`.
pub async fn fire_after<M>(delay: Duration, message: M) -> M {
    tokio::time::sleep(delay).await;
    message
}

/// Turns session effects into runtime tasks. Timers are detached: nothing
/// keeps a handle to them and they cannot be cancelled.
pub fn run_effects(effects: Vec<Effect>, thread_id: &scrollable::Id) -> Task<AppMessage> {
    Task::batch(effects.into_iter().map(|effect| run_effect(effect, thread_id)))
}

fn run_effect(effect: Effect, thread_id: &scrollable::Id) -> Task<AppMessage> {
    match effect {
        Effect::RevealApp { delay } => {
            tracing::trace!(?delay, "Scheduling app reveal");
            Task::perform(fire_after(delay, AppMessage::RevealApp), |m| m)
        }
        Effect::DeliverReply { ticket, delay } => {
            tracing::trace!(%ticket, ?delay, "Scheduling reply");
            Task::perform(fire_after(delay, AppMessage::ReplyDue(ticket)), |m| m)
        }
        Effect::ScrollToLatest => {
            scrollable::snap_to(thread_id.clone(), scrollable::RelativeOffset::END)
        }
    }
}
