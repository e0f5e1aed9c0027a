use serde::{Deserialize, Serialize};

use super::{DateTime, MessageId, Sender};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    pub create_time: DateTime,
    pub reactions: Reactions,
}

impl Message {
    pub fn new(id: MessageId, text: impl Into<String>, sender: Sender, create_time: DateTime) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            create_time,
            reactions: Reactions::default(),
        }
    }

    pub fn is_mine(&self) -> bool {
        self.sender.is_local()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub emoji: String,
    pub count: u32,
}

impl Reaction {
    /// Chip text: the bare emoji for a single reaction, `emoji count` otherwise.
    pub fn label(&self) -> String {
        if self.count > 1 {
            format!("{} {}", self.emoji, self.count)
        } else {
            self.emoji.clone()
        }
    }
}

/// Emoji counters attached to a message, one entry per distinct emoji.
///
/// Entries keep the order in which each emoji was first used so chips do not
/// jump around between renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    entries: Vec<Reaction>,
}

impl Reactions {
    /// Increments the counter for `emoji`, creating it at 1. Returns the new count.
    pub fn add(&mut self, emoji: &str) -> u32 {
        match self.entries.iter_mut().find(|r| r.emoji == emoji) {
            Some(reaction) => {
                reaction.count += 1;
                reaction.count
            }
            None => {
                self.entries.push(Reaction {
                    emoji: emoji.to_string(),
                    count: 1,
                });
                1
            }
        }
    }

    pub fn count(&self, emoji: &str) -> u32 {
        self.entries
            .iter()
            .find(|r| r.emoji == emoji)
            .map(|r| r.count)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reaction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
