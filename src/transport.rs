//! Socket ownership and delivery.
//!
//! Exactly one socket is live at a time, selected once from configuration.
//! Stream writes are ordered best-effort with no delivery confirmation; UDP
//! sends are fire-and-forget and may be silently lost. There is no reconnect
//! policy: a dropped stream keeps failing until the owner re-initialises.

use std::fmt;
use std::io::{self, Write};
use std::net::{TcpStream, UdpSocket};

use native_tls::{TlsConnector, TlsStream};
use thiserror::Error;

use crate::config::SyslogConfig;

/// Which transport the configuration selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportKind {
    Udp,
    Tcp,
    Tls,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransportKind::Udp => "UDP",
            TransportKind::Tcp => "TCP",
            TransportKind::Tls => "TLS",
        })
    }
}

/// Errors raised by transport initialisation and delivery.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, resolution, or handshake failure at startup.
    #[error("failed to open {kind} transport to {host}:{port}: {source}")]
    Init {
        kind: TransportKind,
        host: String,
        port: u16,
        source: io::Error,
    },
    /// Write failure on an established socket.
    #[error("send over {kind} failed: {source}")]
    Send {
        kind: TransportKind,
        source: io::Error,
    },
}

/// The single live socket, chosen at initialisation.
pub enum ActiveTransport {
    /// Broadcast-capable datagram socket; the destination travels with it
    /// because UDP has no connection to remember it.
    Udp {
        socket: UdpSocket,
        host: String,
        port: u16,
    },
    /// Persistent plain TCP connection.
    Tcp(TcpStream),
    /// Persistent TLS connection with default certificate validation.
    Tls(Box<TlsStream<TcpStream>>),
}

impl ActiveTransport {
    /// Open the transport `config` selects.
    pub fn connect(config: &SyslogConfig) -> Result<Self, TransportError> {
        let kind = config.transport_kind();
        let init_err = |source: io::Error| TransportError::Init {
            kind,
            host: config.host.clone(),
            port: config.port,
            source,
        };
        match kind {
            TransportKind::Udp => {
                let socket = UdpSocket::bind(("0.0.0.0", 0)).map_err(init_err)?;
                socket.set_broadcast(true).map_err(init_err)?;
                Ok(ActiveTransport::Udp {
                    socket,
                    host: config.host.clone(),
                    port: config.port,
                })
            }
            TransportKind::Tcp => {
                let stream =
                    TcpStream::connect((config.host.as_str(), config.port)).map_err(init_err)?;
                Ok(ActiveTransport::Tcp(stream))
            }
            TransportKind::Tls => {
                let connector = TlsConnector::new()
                    .map_err(io::Error::other)
                    .map_err(init_err)?;
                let stream =
                    TcpStream::connect((config.host.as_str(), config.port)).map_err(init_err)?;
                let stream = connector
                    .connect(&config.host, stream)
                    .map_err(io::Error::other)
                    .map_err(init_err)?;
                Ok(ActiveTransport::Tls(Box::new(stream)))
            }
        }
    }

    /// The kind of socket this handle owns.
    pub fn kind(&self) -> TransportKind {
        match self {
            ActiveTransport::Udp { .. } => TransportKind::Udp,
            ActiveTransport::Tcp(_) => TransportKind::Tcp,
            ActiveTransport::Tls(_) => TransportKind::Tls,
        }
    }

    /// Deliver one framed message.
    pub fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        let kind = self.kind();
        let result = match self {
            ActiveTransport::Udp { socket, host, port } => socket
                .send_to(bytes, (host.as_str(), *port))
                .map(|_| ()),
            ActiveTransport::Tcp(stream) => stream.write_all(bytes),
            ActiveTransport::Tls(stream) => stream.write_all(bytes),
        };
        result.map_err(|source| TransportError::Send { kind, source })
    }
}

impl fmt::Debug for ActiveTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveTransport")
            .field("kind", &self.kind())
            .finish()
    }
}
