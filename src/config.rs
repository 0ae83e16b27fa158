//! Emitter configuration and its JSON persistence.
//!
//! Field names in the persisted file keep their historical spelling
//! (`useTCP`, `tcpOC`, ...) so existing deployments keep loading. Every
//! field carries a default, so a partial file still produces a usable
//! configuration, and an unreadable or corrupt file falls back to
//! [`SyslogConfig::default`] without surfacing an error.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::transport::TransportKind;

/// Syslog port assigned by IANA.
pub const DEFAULT_PORT: u16 = 514;
/// Limited-broadcast address; reaches collectors on the local segment
/// without any configuration.
pub const DEFAULT_HOST: &str = "255.255.255.255";
/// Trailer appended under non-transparent framing.
pub const DEFAULT_FRAMING_CHAR: &str = "\n";

/// Transport and identity settings, loaded once at initialisation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyslogConfig {
    /// Use a persistent TCP connection instead of UDP datagrams.
    #[serde(rename = "useTCP", default)]
    pub use_tcp: bool,
    /// Wrap the TCP connection in TLS (RFC 5425). Implies TCP-style
    /// framing even when `useTCP` is unset, and always octet counting.
    #[serde(rename = "tcpTLS", default)]
    pub tcp_tls: bool,
    /// Octet-counting framing on plain TCP (RFC 6587).
    #[serde(rename = "tcpOC", default = "default_true")]
    pub tcp_oc: bool,
    /// Trailer used when octet counting is off.
    #[serde(
        rename = "tcpNonTransparentFramingChar",
        default = "default_framing_char"
    )]
    pub tcp_non_transparent_framing_char: String,
    /// Collector port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Collector host or broadcast address.
    #[serde(default = "default_host")]
    pub host: String,
    /// HOSTNAME field of every emitted line; nil value when unset.
    #[serde(rename = "syslogHostname", default = "default_hostname")]
    pub syslog_hostname: String,
    /// Escape `"`, `\` and `]` in SD-PARAM values per RFC 5424. Off by
    /// default: the historical wire output never escaped, and collectors
    /// deployed against it may depend on that.
    #[serde(rename = "sdParamEscape", default)]
    pub sd_param_escape: bool,
}

fn default_true() -> bool {
    true
}

fn default_framing_char() -> String {
    DEFAULT_FRAMING_CHAR.to_owned()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_host() -> String {
    DEFAULT_HOST.to_owned()
}

fn default_hostname() -> String {
    crate::formatter::NIL_VALUE.to_owned()
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self {
            use_tcp: false,
            tcp_tls: false,
            tcp_oc: true,
            tcp_non_transparent_framing_char: default_framing_char(),
            port: DEFAULT_PORT,
            host: default_host(),
            syslog_hostname: default_hostname(),
            sd_param_escape: false,
        }
    }
}

impl SyslogConfig {
    /// Which transport this configuration selects. TLS wins over plain TCP
    /// when both flags are set; UDP only when neither is.
    pub fn transport_kind(&self) -> TransportKind {
        if self.tcp_tls {
            TransportKind::Tls
        } else if self.use_tcp {
            TransportKind::Tcp
        } else {
            TransportKind::Udp
        }
    }
}

/// The default configuration rendered as JSON, for documentation and UI
/// surfaces. Rendered from [`SyslogConfig::default`] so it cannot drift.
pub fn help() -> String {
    serde_json::to_string_pretty(&SyslogConfig::default())
        .unwrap_or_else(|_| String::from("{}"))
}

/// Persisted configuration file.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store backed by the given file path. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted configuration, substituting the default when the
    /// file is missing or malformed. Load failure is recovered locally and
    /// never surfaced.
    pub fn load(&self) -> SyslogConfig {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!(
                    "no readable syslog config at {}: {err}; using defaults",
                    self.path.display()
                );
                return SyslogConfig::default();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(config) => config,
            Err(err) => {
                warn!(
                    "malformed syslog config at {}: {err}; using defaults",
                    self.path.display()
                );
                SyslogConfig::default()
            }
        }
    }

    /// Persist `config`, fire-and-forget: a write failure is logged, not
    /// surfaced.
    pub fn store(&self, config: &SyslogConfig) {
        let rendered = match serde_json::to_vec_pretty(config) {
            Ok(rendered) => rendered,
            Err(err) => {
                warn!("failed to serialise syslog config: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, rendered) {
            warn!(
                "failed to store syslog config at {}: {err}",
                self.path.display()
            );
        }
    }
}
