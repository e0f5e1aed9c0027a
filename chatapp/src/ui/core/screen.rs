use std::fmt::Debug;

use chatapp_core::Effect;
use iced::{Element, Theme};

use crate::ui::AppContext;

/// Command returned from screen update methods
pub enum ScreenCommand {
    /// No action needed
    None,
    /// Session effects for the app to schedule
    Effects(Vec<Effect>),
}

/// Base trait for all application screens
pub trait Screen {
    /// Message type for this screen
    type Message: Debug + Clone + Send + 'static;

    /// Process a screen message and return a command
    fn update(
        &mut self,
        message: Self::Message,
        ctx: &mut AppContext,
    ) -> ScreenCommand;

    /// Create the view for this screen
    fn view<'a>(&'a self, ctx: &'a AppContext, theme: &Theme) -> Element<'a, Self::Message>;
}

impl ScreenCommand {
    /// Wraps session effects, collapsing an empty list to `None`.
    pub fn from_effects(effects: Vec<Effect>) -> Self {
        if effects.is_empty() {
            Self::None
        } else {
            Self::Effects(effects)
        }
    }
}
