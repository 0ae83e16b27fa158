//! RFC 5424 structured-data rendering.

use crate::payload::EventPayload;

use super::ENTERPRISE_NUMBER;
use super::sanitise::{SlimFields, slim_cabinet, slim_cage, slim_lock, slim_row};

/// Render the structured-data portion of a syslog line.
///
/// Produces one SD-ELEMENT per non-absent source, in fixed order: `event`
/// (always), then `tanlock`, `cabinet`, `row`, `cage`. The caller substitutes
/// the nil value should the result somehow be empty.
pub fn encode_structured_data(body: &EventPayload, escape: bool) -> String {
    let mut elements = vec![event_element(body, escape)];
    for (name, fields) in [
        ("tanlock", slim_lock(body.tanlock.as_ref())),
        ("cabinet", slim_cabinet(body.cabinet.as_ref())),
        ("row", slim_row(body.row.as_ref())),
        ("cage", slim_cage(body.cage.as_ref())),
    ] {
        if let Some(fields) = fields {
            elements.push(object_element(name, &fields, escape));
        }
    }
    elements.join(" ")
}

/// The `event` element carries the event name and id unconditionally, even
/// when either value is empty.
fn event_element(body: &EventPayload, escape: bool) -> String {
    format!(
        "[event@{ENTERPRISE_NUMBER} event=\"{}\" eventId=\"{}\"]",
        param_value(&body.event, escape),
        param_value(&body.event_id, escape),
    )
}

fn object_element(name: &str, fields: &SlimFields, escape: bool) -> String {
    let params = fields
        .iter()
        .map(|(key, value)| format!("{key}=\"{}\"", param_value(value, escape)))
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{name}@{ENTERPRISE_NUMBER} {params}]")
}

/// SD-PARAM values are emitted verbatim by default for wire compatibility
/// with collectors deployed against the historical output. With `escape` set,
/// `"`, `\` and `]` are backslash-escaped as RFC 5424 section 6.3.3 requires.
fn param_value(raw: &str, escape: bool) -> String {
    if !escape {
        return raw.to_owned();
    }
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '"' | '\\' | ']') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
