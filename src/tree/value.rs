//! Tree values and typed leaf extraction
//!
//! Nodes are plain `serde_json` values. Statically typed reads go through
//! [`Leaf`], which downcasts a dynamic value without panicking.

use serde_json::{Map, Value};

/// A whole in-memory database: the root is always a map.
pub type Tree = Map<String, Value>;

/// Dynamic type name of a value, as reported in type errors.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A statically typed view of a tree node.
///
/// Implemented for the payload kinds a JSON value can carry, plus homogeneous
/// arrays (`Vec<T>`), so that `get::<Vec<String>>` succeeds only when every
/// element is a string.
pub trait Leaf: Sized {
    /// Name of the expected type, as reported in type errors.
    fn type_name() -> String;

    /// Convert a dynamic value, or `None` if its type does not match.
    fn from_value(value: &Value) -> Option<Self>;
}

impl Leaf for Value {
    fn type_name() -> String {
        "any".to_string()
    }

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl Leaf for String {
    fn type_name() -> String {
        "string".to_string()
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl Leaf for bool {
    fn type_name() -> String {
        "bool".to_string()
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl Leaf for i64 {
    fn type_name() -> String {
        "i64".to_string()
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl Leaf for u64 {
    fn type_name() -> String {
        "u64".to_string()
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_u64()
    }
}

impl Leaf for f64 {
    fn type_name() -> String {
        "f64".to_string()
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl Leaf for Map<String, Value> {
    fn type_name() -> String {
        "object".to_string()
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_object().cloned()
    }
}

impl<T: Leaf> Leaf for Vec<T> {
    fn type_name() -> String {
        format!("array<{}>", T::type_name())
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::from_value).collect()
    }
}

/// True when `value` is an array whose every element converts to `T`.
pub(crate) fn is_array_of<T: Leaf>(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.iter().all(|item| T::from_value(item).is_some()),
        _ => false,
    }
}
