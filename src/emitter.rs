//! Top-level event-to-syslog orchestration.
//!
//! The emitter owns the active transport and drives each incoming event
//! through formatting, framing, and delivery. Delivery is best-effort telemetry: transport
//! failures are logged and swallowed so they can never break the primary
//! control flow. The one error that does surface is a formatting failure:
//! emitting a line with a wrong timestamp would silently corrupt ordering at
//! the collector, so the caller gets to hear about it instead.

use log::warn;

use crate::config::SyslogConfig;
use crate::formatter::{FormatError, SyslogFormatter};
use crate::framing::frame;
use crate::payload::EventPayload;
use crate::transport::{ActiveTransport, TransportError};

/// Identity this emitter registers under with the event dispatcher.
pub const EMITTER_NAME: &str = "SysLog";

/// Converts application events into RFC 5424 lines and delivers them over
/// the transport its configuration selects.
#[derive(Debug)]
pub struct SyslogEmitter {
    config: SyslogConfig,
    formatter: SyslogFormatter,
    transport: Option<ActiveTransport>,
}

impl SyslogEmitter {
    /// Create an emitter without opening a socket. Until [`init`](Self::init)
    /// or [`connect`](Self::connect) succeeds, events are formatted but not
    /// transmitted.
    pub fn new(config: SyslogConfig) -> Self {
        let formatter = SyslogFormatter::new(config.syslog_hostname.clone(), config.sd_param_escape);
        Self {
            config,
            formatter,
            transport: None,
        }
    }

    /// Create an emitter with an open transport, surfacing initialisation
    /// failure to the caller.
    pub fn connect(config: SyslogConfig) -> Result<Self, TransportError> {
        let mut emitter = Self::new(config);
        emitter.transport = Some(ActiveTransport::connect(&emitter.config)?);
        Ok(emitter)
    }

    /// Open the transport the configuration selects, fail-soft: a
    /// connection, resolution, or handshake failure is logged and leaves the
    /// emitter in a non-transmitting state rather than crashing the caller.
    pub fn init(&mut self) {
        match ActiveTransport::connect(&self.config) {
            Ok(transport) => self.transport = Some(transport),
            Err(err) => warn!("syslog transport unavailable: {err}"),
        }
    }

    /// Whether a transport is open.
    pub fn is_initialised(&self) -> bool {
        self.transport.is_some()
    }

    /// The active configuration.
    pub fn config(&self) -> &SyslogConfig {
        &self.config
    }

    /// Handle one event: format it, frame it for the active transport, and
    /// send it. Without an open transport the message is still formatted
    /// (so formatting errors surface) but nothing is transmitted. Send
    /// failures are logged, never returned, and nothing is retried.
    pub fn on_event(&mut self, kind: &str, body: &EventPayload) -> Result<(), FormatError> {
        let message = self.formatter.format(kind, body)?;
        let Some(transport) = self.transport.as_mut() else {
            return Ok(());
        };
        let framed = frame(&message, &self.config);
        if let Err(err) = transport.send(&framed) {
            warn!("dropped syslog message: {err}");
        }
        Ok(())
    }
}
