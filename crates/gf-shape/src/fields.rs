//! Candidate field lookup and liberal type coercion.
//!
//! The same logical field arrives under different names depending on the
//! endpoint (`player_key` vs `player_id` vs `id`). Each entity declares an
//! ordered list of candidate accessors per field; the first one that yields a
//! usable value wins.

use crate::extract::{extract_items, flatten, unwrap_record, Record};
use crate::navigate::resolve_in_record;
use serde_json::Value;

/// One way of reaching a field inside a flattened record.
#[derive(Debug, Clone, Copy)]
pub enum Accessor {
    /// A top-level key
    Key(&'static str),
    /// A nested path, walked with the navigator's tolerance for lists
    Path(&'static [&'static str]),
}

/// Ordered candidates for one logical field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub candidates: &'static [Accessor],
}

impl FieldSpec {
    pub const fn new(name: &'static str, candidates: &'static [Accessor]) -> Self {
        Self { name, candidates }
    }

    /// Return the first candidate value that is present and not blank.
    pub fn resolve(&self, record: &Record) -> Option<Value> {
        self.candidates.iter().find_map(|accessor| {
            let found = match accessor {
                Accessor::Key(key) => record.get(*key).cloned(),
                Accessor::Path(path) => resolve_in_record(record, path).map(|v| v.into_owned()),
            };
            found.filter(is_present)
        })
    }

    /// First candidate that coerces successfully with `coerce`.
    ///
    /// Unlike `resolve(..).and_then(coerce)`, a candidate holding junk does
    /// not shadow a later candidate holding a usable value.
    pub fn resolve_with<T>(&self, record: &Record, coerce: impl Fn(&Value) -> Option<T>) -> Option<T> {
        self.candidates.iter().find_map(|accessor| match accessor {
            Accessor::Key(key) => record.get(*key).and_then(&coerce),
            Accessor::Path(path) => resolve_in_record(record, path).and_then(|v| coerce(&*v)),
        })
    }

    pub fn text(&self, record: &Record) -> Option<String> {
        self.resolve_with(record, as_text)
    }

    pub fn int(&self, record: &Record) -> Option<i64> {
        self.resolve_with(record, as_int)
    }

    pub fn float(&self, record: &Record) -> Option<f64> {
        self.resolve_with(record, as_float)
    }

    pub fn flag(&self, record: &Record) -> Option<bool> {
        self.resolve_with(record, as_flag)
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// Coerce a string or number into trimmed text.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerce numbers and numeric strings into an integer.
///
/// Floats qualify only when they have no fractional part (`"7.0"` -> 7).
pub fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

fn integral(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15).then_some(f as i64)
}

/// Coerce numbers and numeric strings into a float.
pub fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Coerce the platform's boolean spellings (`"1"`, `1`, `true`, `"yes"`).
pub fn as_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Some(true),
            "0" | "false" | "no" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Coerce a display name: a bare string, or an object (possibly a wrapped
/// list) carrying `full`, `display`, or `first` + `last`.
pub fn as_name(value: &Value) -> Option<String> {
    if let Some(text) = as_text(value) {
        return Some(text);
    }
    let record = flatten(value)?;
    for key in ["full", "display", "display_name", "name"] {
        if let Some(text) = record.get(key).and_then(as_text) {
            return Some(text);
        }
    }
    let first = record.get("first").and_then(as_text);
    let last = record.get("last").and_then(as_text);
    match (first, last) {
        (Some(first), Some(last)) => Some(format!("{first} {last}")),
        (Some(one), None) | (None, Some(one)) => Some(one),
        (None, None) => None,
    }
}

/// Coerce a manager field: a bare string, one manager object, or a
/// collection of `{"manager": {...}}` items, taking the first nickname.
pub fn as_manager(value: &Value) -> Option<String> {
    if let Some(text) = as_text(value) {
        return Some(text);
    }
    let first = extract_items(value).into_iter().next()?;
    let record = unwrap_record(first, "manager")?;
    ["nickname", "name", "manager_name"]
        .iter()
        .find_map(|key| record.get(*key).and_then(as_text))
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
