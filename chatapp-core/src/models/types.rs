use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTime(pub chrono::DateTime<chrono::Utc>);

impl DateTime {
    pub fn now() -> Self {
        Self(chrono::Utc::now())
    }

    /// Wall-clock time of day in local time, e.g. `14:05`.
    pub fn clock_label(&self) -> String {
        self.0
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string()
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let micros = self.0.timestamp_micros();
        serializer.serialize_i64(micros)
    }
}

impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let micros = i64::deserialize(deserializer)?;
        Ok(Self(
            chrono::DateTime::<chrono::Utc>::from_timestamp_micros(micros)
                .ok_or(Error::custom("cannot deserialize DateTime from micros"))?,
        ))
    }
}

/// Session-local message identifier. Issued in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactId(pub String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who wrote a message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sender {
    LocalUser,
    Contact(ContactId),
}

impl Sender {
    pub fn is_local(&self) -> bool {
        matches!(self, Self::LocalUser)
    }

    pub fn contact_id(&self) -> Option<&ContactId> {
        match self {
            Self::LocalUser => None,
            Self::Contact(id) => Some(id),
        }
    }
}
