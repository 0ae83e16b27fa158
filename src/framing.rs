//! Transport-dependent message framing.
//!
//! UDP datagrams need none; stream transports use either RFC 6587 octet
//! counting or non-transparent framing. The RFC 5425 TLS mapping always
//! octet-counts, regardless of the `tcpOC` flag.

use crate::config::SyslogConfig;
use crate::transport::TransportKind;

/// Frame a formatted message for the transport selected by `config`.
pub fn frame(message: &str, config: &SyslogConfig) -> Vec<u8> {
    match config.transport_kind() {
        TransportKind::Udp => message.as_bytes().to_vec(),
        TransportKind::Tls => octet_count(message),
        TransportKind::Tcp if config.tcp_oc => octet_count(message),
        TransportKind::Tcp => non_transparent(message, &config.tcp_non_transparent_framing_char),
    }
}

/// Prefix the message with its UTF-8 byte length and a space.
fn octet_count(message: &str) -> Vec<u8> {
    format!("{} {message}", message.len()).into_bytes()
}

/// Append the configured trailer character(s).
fn non_transparent(message: &str, trailer: &str) -> Vec<u8> {
    let mut framed = Vec::with_capacity(message.len() + trailer.len());
    framed.extend_from_slice(message.as_bytes());
    framed.extend_from_slice(trailer.as_bytes());
    framed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SyslogConfig;

    fn udp() -> SyslogConfig {
        SyslogConfig::default()
    }

    fn tcp(oc: bool) -> SyslogConfig {
        SyslogConfig {
            use_tcp: true,
            tcp_oc: oc,
            ..SyslogConfig::default()
        }
    }

    fn tls() -> SyslogConfig {
        SyslogConfig {
            tcp_tls: true,
            tcp_oc: false,
            ..SyslogConfig::default()
        }
    }

    #[test]
    fn udp_sends_verbatim() {
        assert_eq!(frame("hello", &udp()), b"hello");
    }

    #[test]
    fn tcp_octet_counting_prefixes_byte_length() {
        assert_eq!(frame("hello", &tcp(true)), b"5 hello");
    }

    #[test]
    fn octet_count_uses_utf8_bytes_not_chars() {
        // "héllo" is five characters but six bytes.
        assert_eq!(frame("h\u{e9}llo", &tcp(true)), "6 h\u{e9}llo".as_bytes());
    }

    #[test]
    fn tcp_non_transparent_appends_trailer_only() {
        let framed = frame("hello", &tcp(false));
        assert_eq!(framed, b"hello\n");
    }

    #[test]
    fn custom_trailer_is_respected() {
        let config = SyslogConfig {
            use_tcp: true,
            tcp_oc: false,
            tcp_non_transparent_framing_char: "\0".into(),
            ..SyslogConfig::default()
        };
        assert_eq!(frame("hello", &config), b"hello\0");
    }

    #[test]
    fn tls_always_octet_counts() {
        // tcp_oc is false here; the TLS mapping ignores it.
        assert_eq!(frame("hello", &tls()), b"5 hello");
    }
}
