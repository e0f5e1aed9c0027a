use std::fmt;

use serde::{Deserialize, Serialize};

use super::ContactId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Away,
    Offline,
}

impl Presence {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Away => "away",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub presence: Presence,
    // Opaque reference resolved by the avatar collaborator.
    pub avatar: String,
    // Free-text status that overrides the presence label in the sidebar.
    pub status: Option<String>,
}

impl Contact {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        presence: Presence,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id: ContactId::new(id),
            name: name.into(),
            presence,
            avatar: avatar.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Secondary sidebar line: custom status, else "Away", else the presence name.
    pub fn status_line(&self) -> String {
        match (&self.status, self.presence) {
            (Some(status), _) if !status.is_empty() => status.clone(),
            (_, Presence::Away) => "Away".to_string(),
            (_, presence) => presence.name().to_string(),
        }
    }

    /// Up to two uppercase initials used as an avatar placeholder.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
