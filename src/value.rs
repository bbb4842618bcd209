use std::any::{Any, type_name};
use std::fmt;

use crate::error::{Error, Result};

/// A scalar stored in a list node
///
/// The set of kinds is closed: integers, floats and strings.
/// Equality follows the stored kind, so `Int(1)` and `Float(1.0)` are different values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Converts a dynamically typed value into a `Value`
    ///
    /// Accepts every primitive integer type, `f32`, `f64`, `String` and `&str`.
    /// Integers outside the `i64` range fail with `IntegerOutOfRange`, anything
    /// else with `InvalidValueKind`.
    pub fn from_dynamic(value: &dyn Any) -> Result<Value> {
        macro_rules! int {
            ($($t:ty),*) => {
                $(
                    if let Some(v) = value.downcast_ref::<$t>() {
                        return i64::try_from(*v)
                            .map(Value::Int)
                            .map_err(|_| Error::IntegerOutOfRange {
                                kind: type_name::<$t>(),
                            });
                    }
                )*
            };
        }
        int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

        if let Some(v) = value.downcast_ref::<f64>() {
            return Ok(Value::Float(*v));
        }
        if let Some(v) = value.downcast_ref::<f32>() {
            return Ok(Value::Float(f64::from(*v)));
        }
        if let Some(v) = value.downcast_ref::<String>() {
            return Ok(Value::Text(v.clone()));
        }
        if let Some(v) = value.downcast_ref::<&str>() {
            return Ok(Value::Text((*v).to_string()));
        }

        Err(Error::InvalidValueKind {
            kind: kind_name(value),
        })
    }

    /// Returns the kind of this value as it is named in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "str",
        }
    }

    /// Returns the integer, if this is an `Int`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float, if this is a `Float`
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string, if this is a `Text`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

// `type_id` does not carry a readable name, so probe the common rejected kinds
fn kind_name(value: &dyn Any) -> &'static str {
    macro_rules! probe {
        ($($t:ty),*) => {
            $(
                if value.is::<$t>() {
                    return type_name::<$t>();
                }
            )*
        };
    }
    probe!(bool, char, (), Vec<Value>);
    "unknown"
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_float() == Some(*other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
