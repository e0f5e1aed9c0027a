use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::MessageId;
use crate::placement::Point;

/// Which top-level screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenMode {
    #[default]
    Landing,
    /// "Get Started" was pressed; the app appears once the reveal delay passes.
    Transitioning,
    App,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}', expected 'light' or 'dark'")),
        }
    }
}

/// The message whose reaction picker is open and where the picker is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionTarget {
    pub message_id: MessageId,
    pub anchor: Point,
}

/// Transient UI state. Read-only outside the session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub screen: ScreenMode,
    pub theme: ThemePreference,
    pub sidebar_visible: bool,
    pub compose: String,
    pub reaction_target: Option<ReactionTarget>,
}

impl ViewState {
    pub fn new(theme: ThemePreference) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    pub fn selected_message(&self) -> Option<MessageId> {
        self.reaction_target.map(|t| t.message_id)
    }

    pub fn popover_anchor(&self) -> Option<Point> {
        self.reaction_target.map(|t| t.anchor)
    }
}
