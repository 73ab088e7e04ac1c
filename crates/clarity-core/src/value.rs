//! ---
//! clarity_section: "02-print-pipeline"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Reported values and errors, and their readout lines."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::{self, Display};
use std::hash::Hash;

/// A value handed to a value-report print point.
///
/// Hosts convert into this before calling.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(String),
    /// Ordered collection, rendered in iteration order.
    Sequence(Vec<Value>),
    /// Unordered collection. Element order is whatever the source produced.
    Set(Vec<Value>),
    /// Key/value pairs. Order follows the source map and is only stable when
    /// the source map is.
    Keyed(Vec<(String, Value)>),
    /// An error, carrying its human-readable description.
    Failure(String),
}

impl Value {
    pub fn scalar(value: impl Display) -> Self {
        Value::Scalar(value.to_string())
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Value::Failure(description.into())
    }

    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        Value::Failure(error.to_string())
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Value::Failure(_))
    }

    /// One line per reported item, each prefixed with `readout_spacer`.
    pub fn render(&self, readout_spacer: &str) -> Vec<String> {
        match self {
            Value::Scalar(_) | Value::Failure(_) => vec![format!("{readout_spacer}{self}")],
            Value::Sequence(items) | Value::Set(items) => items
                .iter()
                .map(|item| format!("{readout_spacer}{item}"))
                .collect(),
            Value::Keyed(entries) => entries
                .iter()
                .map(|(key, value)| format!("{readout_spacer}{key}: {value}"))
                .collect(),
        }
    }
}

/// Inline form, used for nested collections.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(text) | Value::Failure(text) => f.write_str(text),
            Value::Sequence(items) => write_joined(f, "[", items.iter(), "]"),
            Value::Set(items) => write_joined(f, "{", items.iter(), "}"),
            Value::Keyed(entries) => {
                f.write_str("{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    items: impl Iterator<Item = &'a Value>,
    close: &str,
) -> fmt::Result {
    f.write_str(open)?;
    for (index, item) in items.enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str(close)
}

macro_rules! scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);
scalar_from!(&str, String);

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Eq + Hash> From<HashSet<T>> for Value {
    fn from(items: HashSet<T>) -> Self {
        Value::Set(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Display, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Value::Keyed(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.into()))
                .collect(),
        )
    }
}

impl<K: Display + Eq + Hash, V: Into<Value>> From<HashMap<K, V>> for Value {
    fn from(entries: HashMap<K, V>) -> Self {
        Value::Keyed(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Keyed(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
            serde_json::Value::String(text) => Value::Scalar(text),
            other => Value::Scalar(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn scalar_is_one_line() {
        assert_eq!(Value::from(42).render("  "), ["  42"]);
        assert_eq!(Value::from("text").render(""), ["text"]);
    }

    #[test]
    fn sequence_is_one_line_per_element() {
        assert_eq!(Value::from(vec![1, 2]).render("> "), ["> 1", "> 2"]);
        assert!(Value::from(Vec::<i32>::new()).render("> ").is_empty());
    }

    #[test]
    fn keyed_entries_carry_their_key() {
        let value = Value::from(BTreeMap::from([("b", 2), ("a", 1)]));
        assert_eq!(value.render(" "), [" a: 1", " b: 2"]);
    }

    #[test]
    fn set_renders_every_element() {
        let mut lines = Value::from(HashSet::from([3, 1, 2])).render("");
        lines.sort();
        assert_eq!(lines, ["1", "2", "3"]);
    }

    #[test]
    fn nested_collections_render_inline() {
        let value = Value::from(vec![vec![1, 2], vec![3]]);
        assert_eq!(value.render(""), ["[1, 2]", "[3]"]);
    }

    #[test]
    fn errors_use_their_description() {
        let error = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let value = Value::from_error(&error);
        assert!(value.is_failure());
        assert_eq!(value.render("  "), ["  disk on fire"]);
    }

    #[test]
    fn json_values_convert() {
        let value = Value::from(json!({"ids": [1, 2], "name": "pump", "ok": true}));
        assert_eq!(
            value.render(""),
            ["ids: [1, 2]", "name: pump", "ok: true"]
        );
        assert_eq!(Value::from(json!(null)).render(""), ["null"]);
    }
}
