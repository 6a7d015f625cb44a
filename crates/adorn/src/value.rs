//! The value union rendered into decoration parameter lists.
//!
//! [`Value`] is a closed sum type with one variant per kind the renderer
//! understands. Mappings are stored as vectors of pairs, so entry order is
//! insertion order by construction — the renderer never sorts or reorders.
//!
//! # Building values
//!
//! Scalars convert with `From`/`Into`; containers have the [`Value::seq`] and
//! [`Value::map`] helpers:
//!
//! ```rust
//! use adorn::Value;
//!
//! let columns = Value::seq(["email", "status"]);
//! let table = Value::map([
//!     ("name", Value::from("users")),
//!     ("indexes", columns),
//! ]);
//! ```
//!
//! Producer types that already implement `serde::Serialize` can be converted
//! wholesale with [`to_value`].

use serde::Serialize;

use crate::decoration::Decoration;
use crate::error::RenderError;

/// A value that can appear in a decoration's parameter list.
///
/// The union is recursive: sequences and mappings hold further values, and
/// the [`Decoration`](Value::Decoration) variant embeds another fully
/// specified decoration request, rendered in place by the same renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The null literal.
    Null,
    /// A boolean literal.
    Bool(bool),
    /// An integer, rendered in decimal.
    Int(i64),
    /// A float, rendered as the shortest decimal that round-trips.
    Float(f64),
    /// A string, escaped and quoted per the target syntax.
    Str(String),
    /// A positional sequence, rendered without key prefixes.
    Seq(Vec<Value>),
    /// An ordered mapping. Rendered with `key: value` pairs unless the keys
    /// form the dense integer range `0..n-1`, in which case it behaves as a
    /// plain sequence.
    Map(Vec<(String, Value)>),
    /// A nested decoration request, rendered recursively and substituted
    /// verbatim.
    Decoration(Box<Decoration>),
}

impl Value {
    /// Builds a positional sequence from anything convertible to values.
    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Builds an ordered mapping from key/value pairs. Entry order is
    /// preserved exactly as supplied.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Short kind name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Seq(_) => "sequence",
            Value::Map(_) => "mapping",
            Value::Decoration(_) => "decoration",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Decoration> for Value {
    fn from(decoration: Decoration) -> Self {
        Value::Decoration(Box::new(decoration))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Seq(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Map(iter.into_iter().collect())
    }
}

/// Converts any serializable type into a [`Value`] tree.
///
/// This is the boundary for external value producers: a schema exporter can
/// derive `Serialize` on its own types and hand them over without building
/// the tree by hand. Mapping entry order follows the serialized field order.
///
/// Returns [`RenderError::UnsupportedValue`] for shapes the union cannot
/// represent, such as maps with non-string keys.
///
/// # Example
///
/// ```rust
/// use adorn::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Index {
///     name: String,
///     columns: Vec<String>,
/// }
///
/// let value = to_value(&Index {
///     name: "email_idx".into(),
///     columns: vec!["email".into()],
/// }).unwrap();
///
/// assert_eq!(
///     value,
///     Value::map([
///         ("name", Value::from("email_idx")),
///         ("columns", Value::seq(["email"])),
///     ])
/// );
/// ```
pub fn to_value<T: Serialize + ?Sized>(data: &T) -> Result<Value, RenderError> {
    let json = serde_json::to_value(data)
        .map_err(|err| RenderError::UnsupportedValue(err.to_string()))?;
    from_json(json)
}

fn from_json(json: serde_json::Value) -> Result<Value, RenderError> {
    Ok(match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                return Err(RenderError::UnsupportedValue(format!(
                    "number {} does not fit a decoration literal",
                    n
                )));
            }
        }
        serde_json::Value::String(s) => Value::Str(s),
        serde_json::Value::Array(items) => Value::Seq(
            items
                .into_iter()
                .map(from_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        serde_json::Value::Object(entries) => Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| Ok((k, from_json(v)?)))
                .collect::<Result<Vec<_>, RenderError>>()?,
        ),
    })
}

/// Returns true when the mapping's keys are exactly the integers `0..n-1`
/// in order, i.e. the container behaves as a plain positional list.
///
/// Keys with leading zeros, signs, or any non-digit character are not
/// positional; neither is a dense range starting anywhere but zero.
pub fn is_dense_integer_keyed(entries: &[(String, Value)]) -> bool {
    entries.iter().enumerate().all(|(position, (key, _))| {
        if key.is_empty() || (key != "0" && key.starts_with('0')) {
            return false;
        }
        key.bytes().all(|b| b.is_ascii_digit())
            && key.parse::<usize>().map_or(false, |n| n == position)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(255), Value::Int(255));
        assert_eq!(Value::from(2.5), Value::Float(2.5));
        assert_eq!(Value::from("users"), Value::Str("users".to_string()));
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some(10)), Value::Int(10));
    }

    #[test]
    fn test_map_preserves_insertion_order() {
        let value = Value::map([("b", 1), ("a", 2)]);
        match value {
            Value::Map(entries) => {
                assert_eq!(entries[0].0, "b");
                assert_eq!(entries[1].0, "a");
            }
            _ => panic!("Expected Map"),
        }
    }

    #[test]
    fn test_dense_integer_keys() {
        let entries = vec![
            ("0".to_string(), Value::Int(1)),
            ("1".to_string(), Value::Int(2)),
            ("2".to_string(), Value::Int(3)),
        ];
        assert!(is_dense_integer_keyed(&entries));
    }

    #[test]
    fn test_offset_range_is_not_dense() {
        let entries = vec![
            ("1".to_string(), Value::Int(1)),
            ("2".to_string(), Value::Int(2)),
        ];
        assert!(!is_dense_integer_keyed(&entries));
    }

    #[test]
    fn test_sparse_and_padded_keys_are_not_dense() {
        let sparse = vec![
            ("0".to_string(), Value::Int(1)),
            ("2".to_string(), Value::Int(2)),
        ];
        assert!(!is_dense_integer_keyed(&sparse));

        let padded = vec![("00".to_string(), Value::Int(1))];
        assert!(!is_dense_integer_keyed(&padded));
    }

    #[test]
    fn test_to_value_struct() {
        #[derive(Serialize)]
        struct Column {
            length: u32,
            nullable: bool,
        }

        let value = to_value(&Column {
            length: 255,
            nullable: false,
        })
        .unwrap();
        assert_eq!(
            value,
            Value::map([
                ("length", Value::Int(255)),
                ("nullable", Value::Bool(false)),
            ])
        );
    }

    #[test]
    fn test_to_value_keeps_field_order() {
        #[derive(Serialize)]
        struct Ordered {
            zebra: i32,
            apple: i32,
        }

        let value = to_value(&Ordered { zebra: 1, apple: 2 }).unwrap();
        match value {
            Value::Map(entries) => {
                assert_eq!(entries[0].0, "zebra");
                assert_eq!(entries[1].0, "apple");
            }
            _ => panic!("Expected Map"),
        }
    }
}
