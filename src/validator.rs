use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::MAX_FLAGS;

/// Loosely typed input, for flag lists that arrive from outside the type system.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(Vec<(String, Value)>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(String::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Checks that `input` is a non-empty list of at most [`MAX_FLAGS`] strings and returns
/// the unique names in first-seen order.
///
/// Checks run in a fixed order: list type, emptiness, raw length, then each element.
/// The length bound applies before duplicates are dropped.
pub fn validate_flags_list(input: &Value) -> Result<Arc<[String]>> {
    let items = match input {
        Value::List(items) => items,
        other => {
            return Err(Error::TypeMismatch {
                found: other.type_name(),
            })
        }
    };

    if items.is_empty() {
        return Err(Error::EmptyInput);
    }
    if items.len() > MAX_FLAGS {
        return Err(Error::TooManyFlags { count: items.len() });
    }

    let mut seen = HashSet::with_capacity(items.len());
    let mut names = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let name = match item {
            Value::Str(name) => name,
            other => {
                return Err(Error::InvalidElementType {
                    index,
                    found: other.type_name(),
                })
            }
        };
        if seen.insert(name.as_str()) {
            names.push(name.clone());
        }
    }

    Ok(names.into())
}

/// Typed entry point; goes through the same checks as [`validate_flags_list`].
pub fn validate_names<I, S>(names: I) -> Result<Arc<[String]>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let list = names
        .into_iter()
        .map(|name| Value::from(name.as_ref()))
        .collect();
    validate_flags_list(&Value::List(list))
}
