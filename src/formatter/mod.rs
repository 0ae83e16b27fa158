//! RFC 5424 message construction.
//!
//! Builds the full syslog line (header, structured data, and optional
//! BOM-prefixed free-text message) from an
//! [`EventPayload`](crate::payload::EventPayload). Formatting is a pure
//! transform: identical input yields byte-identical output, and the only
//! failure mode is an unparseable timestamp.

use chrono::SecondsFormat;
use log::warn;
use thiserror::Error;

use crate::payload::EventPayload;

mod sanitise;
mod structured;

pub use structured::encode_structured_data;

/// Facility: user-level messages (1); severity: notice (5).
pub const SYSLOG_PRI: u8 = 1 * 8 + 5;
/// Protocol version, fixed by RFC 5424.
pub const SYSLOG_VERSION: u8 = 1;
/// APP-NAME field, constant for this emitter.
pub const APP_NAME: &str = "TANlockManager";
/// IANA Private Enterprise Number scoping every SD-ELEMENT.
pub const ENTERPRISE_NUMBER: &str = "61208";
/// RFC 5424 placeholder for an absent field.
pub const NIL_VALUE: &str = "-";
/// UTF-8 byte-order-mark preceding the free-text MSG part.
pub const BOM: char = '\u{feff}';

/// RFC 5424 caps MSGID at 32 octets; longer values are passed through but
/// flagged, since a strict collector may reject the line.
const MSGID_MAX_LEN: usize = 32;

/// Errors raised while formatting a message.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The payload timestamp could not be parsed. Surfaced rather than
    /// substituting the nil value: a wrong timestamp corrupts log ordering
    /// at the collector.
    #[error("unparseable event timestamp: {0}")]
    Timestamp(String),
}

/// Formatter holding the static identity fields of the emitting process.
#[derive(Clone, Debug)]
pub struct SyslogFormatter {
    hostname: String,
    proc_id: String,
    escape_sd_params: bool,
}

impl SyslogFormatter {
    /// Create a formatter for the given HOSTNAME field. The PROCID is
    /// captured once and stays stable for the process lifetime.
    pub fn new(hostname: impl Into<String>, escape_sd_params: bool) -> Self {
        let hostname = hostname.into();
        Self {
            hostname: if hostname.is_empty() {
                NIL_VALUE.to_owned()
            } else {
                hostname
            },
            proc_id: format!("PID{}", std::process::id()),
            escape_sd_params,
        }
    }

    /// Build the complete RFC 5424 line for one event.
    pub fn format(&self, kind: &str, body: &EventPayload) -> Result<String, FormatError> {
        let timestamp = body
            .timestamp
            .resolve()?
            .to_rfc3339_opts(SecondsFormat::Millis, true);
        let msg_id = kind.to_uppercase();
        if msg_id.len() > MSGID_MAX_LEN {
            warn!(
                "MSGID {msg_id:?} exceeds {MSGID_MAX_LEN} octets; strict collectors may reject it"
            );
        }

        let mut line = format!(
            "<{SYSLOG_PRI}>{SYSLOG_VERSION} {timestamp} {} {APP_NAME} {} {msg_id}",
            self.hostname, self.proc_id,
        );

        // RFC 5424 forbids an empty structured-data field.
        let structured = encode_structured_data(body, self.escape_sd_params);
        line.push(' ');
        if structured.is_empty() {
            line.push_str(NIL_VALUE);
        } else {
            line.push_str(&structured);
        }

        // MSG is appended only when present; no trailing space otherwise.
        if let Some(message) = body.event_message.as_deref()
            && !message.is_empty()
        {
            line.push(' ');
            line.push(BOM);
            line.push_str(message);
        }

        Ok(line)
    }
}
