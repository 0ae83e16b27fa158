//! RFC 5424 syslog producer for lock, cabinet, row and cage events.
//!
//! Converts structured application events into syslog lines and delivers
//! them over one of three transports with the matching framing rule:
//!
//! - UDP datagrams, unframed;
//! - plain TCP with octet-counting or non-transparent framing (RFC 6587);
//! - TLS-wrapped TCP, always octet-counted (RFC 5425).
//!
//! Delivery is best-effort telemetry. Transport failures at initialisation
//! or send time are logged through the `log` facade and never reach the
//! caller; the only error [`SyslogEmitter::on_event`] surfaces is an
//! unparseable event timestamp.
//!
//! ```no_run
//! use serde_json::json;
//! use syslog_emitter::{ConfigStore, EventPayload, SyslogEmitter};
//!
//! let store = ConfigStore::new("syslogConfig.json");
//! let mut emitter = SyslogEmitter::new(store.load());
//! emitter.init();
//!
//! let body = EventPayload::new("opened", "42", 1_700_000_000_000_i64)
//!     .with_message("front door opened")
//!     .with_cabinet(json!({ "id": 1, "name": "C1", "frontLock": 5, "backLock": 6 }));
//! emitter.on_event("door", &body)?;
//! # Ok::<(), syslog_emitter::FormatError>(())
//! ```

mod config;
mod emitter;
mod formatter;
mod framing;
mod payload;
mod transport;

pub use config::{ConfigStore, DEFAULT_HOST, DEFAULT_PORT, SyslogConfig, help};
pub use emitter::{EMITTER_NAME, SyslogEmitter};
pub use formatter::{
    APP_NAME, BOM, ENTERPRISE_NUMBER, FormatError, NIL_VALUE, SYSLOG_PRI, SYSLOG_VERSION,
    SyslogFormatter, encode_structured_data,
};
pub use framing::frame;
pub use payload::{EventPayload, Timestamp};
pub use transport::{ActiveTransport, TransportError, TransportKind};
