// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

//! Typed access to required keys of a JSON object

use serde_json::{Map, Value};
use snafu::OptionExt;

use crate::error::{JsonKind, MissingKeySnafu, Result, WrongKeyTypeSnafu};

fn required<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
  obj.get(key).context(MissingKeySnafu { key })
}

fn wrong_type<T>(key: &str, expected: JsonKind, found: &Value) -> Result<T> {
  WrongKeyTypeSnafu { key, expected, found: JsonKind::of(found) }.fail()
}

/// Returns the string value of `key`, failing if it is absent or not a string
pub fn string<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
  match required(obj, key)? {
    Value::String(s) => Ok(s.as_str()),
    other => wrong_type(key, JsonKind::String, other)
  }
}

/// Returns the object value of `key`, failing if it is absent or not an object
pub fn object<'a>(
  obj: &'a Map<String, Value>, key: &str
) -> Result<&'a Map<String, Value>> {
  match required(obj, key)? {
    Value::Object(o) => Ok(o),
    other => wrong_type(key, JsonKind::Object, other)
  }
}

/// Returns the array value of `key`, failing if it is absent or not an array
pub fn array<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a Vec<Value>> {
  match required(obj, key)? {
    Value::Array(a) => Ok(a),
    other => wrong_type(key, JsonKind::Array, other)
  }
}

/// Returns the string value of `key` if present and a string
pub fn optional_string<'a>(
  obj: &'a Map<String, Value>, key: &str
) -> Option<&'a str> {
  obj.get(key).and_then(Value::as_str)
}
