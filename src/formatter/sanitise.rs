//! Allow-list projections for domain objects.
//!
//! The event dispatcher hands over full domain objects; only an allow-listed
//! subset of their fields may reach the wire. Each projection returns `None`
//! for an absent input so the corresponding SD-ELEMENT is omitted entirely.

use serde_json::Value;

/// Fields permitted on a lock ref.
const LOCK_FIELDS: &[&str] = &["id", "ip", "name", "state", "door_1", "door_2"];
/// Fields permitted on a cabinet ref.
const CABINET_FIELDS: &[&str] = &["id", "name", "frontLock", "backLock"];
/// Fields permitted on a row ref.
const ROW_FIELDS: &[&str] = &["id", "name"];
/// Fields permitted on a cage ref.
const CAGE_FIELDS: &[&str] = &["id", "name", "color"];

/// Ordered key/value pairs that survived sanitisation.
pub type SlimFields = Vec<(&'static str, String)>;

/// Project a lock ref down to its allow-listed fields.
pub fn slim_lock(lock: Option<&Value>) -> Option<SlimFields> {
    slim(lock, LOCK_FIELDS)
}

/// Project a cabinet ref down to its allow-listed fields.
pub fn slim_cabinet(cabinet: Option<&Value>) -> Option<SlimFields> {
    slim(cabinet, CABINET_FIELDS)
}

/// Project a row ref down to its allow-listed fields.
pub fn slim_row(row: Option<&Value>) -> Option<SlimFields> {
    slim(row, ROW_FIELDS)
}

/// Project a cage ref down to its allow-listed fields.
pub fn slim_cage(cage: Option<&Value>) -> Option<SlimFields> {
    slim(cage, CAGE_FIELDS)
}

/// Keep only `allowed` keys, in allow-list order. Keys absent from the input
/// are skipped rather than padded with a placeholder value.
fn slim(obj: Option<&Value>, allowed: &[&'static str]) -> Option<SlimFields> {
    let map = obj?.as_object()?;
    Some(
        allowed
            .iter()
            .filter_map(|&key| map.get(key).map(|value| (key, render_value(value))))
            .collect(),
    )
}

/// Render a JSON value the way it appears inside an SD-PARAM: strings
/// verbatim, everything else in its JSON notation.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
