//! Event payload model for the syslog emitter.
//!
//! An [`EventPayload`] captures one state-change event together with the
//! domain objects it concerns. Domain refs are carried as loosely-typed JSON
//! objects because the event dispatcher may hand over richer objects than
//! the emitter declares; the formatter's allow-list projection decides what
//! actually reaches the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::formatter::FormatError;

/// Event timestamp as supplied by the caller.
///
/// Accepts either an epoch value in milliseconds or an RFC 3339 string;
/// resolution to UTC happens at format time so an unparseable value
/// surfaces as a [`FormatError`] instead of a silently wrong line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// RFC 3339 formatted date-time text.
    Text(String),
}

impl Timestamp {
    /// Resolve the timestamp to UTC.
    pub fn resolve(&self) -> Result<DateTime<Utc>, FormatError> {
        match self {
            Timestamp::Millis(ms) => DateTime::from_timestamp_millis(*ms)
                .ok_or_else(|| FormatError::Timestamp(format!("epoch out of range: {ms}"))),
            Timestamp::Text(text) => DateTime::parse_from_rfc3339(text)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|err| FormatError::Timestamp(format!("{text:?}: {err}"))),
        }
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Timestamp::Millis(ms)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::Millis(dt.timestamp_millis())
    }
}

/// One state-change event as delivered by the event dispatcher.
///
/// Immutable for the duration of a single emit call. Any domain ref left as
/// `None` is omitted from the structured data entirely.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    /// Event name, e.g. `"opened"`.
    pub event: String,
    /// Dispatcher-assigned event identifier.
    pub event_id: String,
    /// Optional free-text message appended to the syslog line.
    #[serde(default)]
    pub event_message: Option<String>,
    /// When the event occurred.
    pub timestamp: Timestamp,
    /// Lock the event concerns, if any.
    #[serde(default)]
    pub tanlock: Option<Value>,
    /// Cabinet the event concerns, if any.
    #[serde(default)]
    pub cabinet: Option<Value>,
    /// Row the event concerns, if any.
    #[serde(default)]
    pub row: Option<Value>,
    /// Cage the event concerns, if any.
    #[serde(default)]
    pub cage: Option<Value>,
}

impl EventPayload {
    /// Construct a payload with no attached domain refs and no message.
    pub fn new(
        event: impl Into<String>,
        event_id: impl Into<String>,
        timestamp: impl Into<Timestamp>,
    ) -> Self {
        Self {
            event: event.into(),
            event_id: event_id.into(),
            event_message: None,
            timestamp: timestamp.into(),
            tanlock: None,
            cabinet: None,
            row: None,
            cage: None,
        }
    }

    /// Attach a free-text message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.event_message = Some(message.into());
        self
    }

    /// Attach the lock the event concerns.
    pub fn with_lock(mut self, lock: Value) -> Self {
        self.tanlock = Some(lock);
        self
    }

    /// Attach the cabinet the event concerns.
    pub fn with_cabinet(mut self, cabinet: Value) -> Self {
        self.cabinet = Some(cabinet);
        self
    }

    /// Attach the row the event concerns.
    pub fn with_row(mut self, row: Value) -> Self {
        self.row = Some(row);
        self
    }

    /// Attach the cage the event concerns.
    pub fn with_cage(mut self, cage: Value) -> Self {
        self.cage = Some(cage);
        self
    }
}
