// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use std::fmt;

use serde_json::Value;
use snafu::Snafu;

use crate::util::resource_id::SEGMENTS;
use crate::wire::{app_name, hostname, msg_id};

/// Broad category of a normalization failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// the event as a whole could not be handled
  Structural,

  /// a required key was missing or had the wrong JSON type
  Field,

  /// a value existed but is not usable on the wire
  Sanitization,

  /// the deployment is missing some required setting
  Configuration
}

/// The JSON type of a value, used when reporting mistyped keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
  Null,
  Bool,
  Number,
  String,
  Array,
  Object
}

impl JsonKind {
  pub fn of(value: &Value) -> JsonKind {
    match value {
      Value::Null => JsonKind::Null,
      Value::Bool(_) => JsonKind::Bool,
      Value::Number(_) => JsonKind::Number,
      Value::String(_) => JsonKind::String,
      Value::Array(_) => JsonKind::Array,
      Value::Object(_) => JsonKind::Object
    }
  }
}

impl fmt::Display for JsonKind {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let s = match self {
      JsonKind::Null => "NULL",
      JsonKind::Bool => "BOOLEAN",
      JsonKind::Number => "NUMBER",
      JsonKind::String => "STRING",
      JsonKind::Array => "ARRAY",
      JsonKind::Object => "OBJECT"
    };

    f.write_str(s)
  }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
  #[snafu(display("not a JSON structure"))]
  NotJson,

  #[snafu(display("not a JSON object"))]
  NotJsonObject,

  #[snafu(display("no applicable schema found"))]
  NoApplicableSchema,

  #[snafu(display("key {} does not exist", key))]
  MissingKey {
    key: String
  },

  #[snafu(display(
    "key {} is not of type {} (found {})",
    key, expected, found
  ))]
  WrongKeyType {
    key: String,
    expected: JsonKind,
    found: JsonKind
  },

  #[snafu(display(
    "resource id {:?} has {} segments, expected {}",
    resource_id, segments, SEGMENTS
  ))]
  MalformedResourceId {
    resource_id: String,
    segments: usize
  },

  #[snafu(display("hostname cannot be empty"))]
  HostnameEmpty,

  #[snafu(display(
    "hostname is too long: {}; exceeds maximum of {} characters",
    length, hostname::MAX_LENGTH
  ))]
  HostnameTooLong {
    length: usize
  },

  #[snafu(display("hostname cannot start with character {:?}", character))]
  HostnameBadStart {
    character: char
  },

  #[snafu(display("hostname cannot end with character {:?}", character))]
  HostnameBadEnd {
    character: char
  },

  #[snafu(display("hostname cannot contain character {:?}", character))]
  HostnameBadChar {
    character: char
  },

  #[snafu(display("app name cannot be empty"))]
  AppNameEmpty,

  #[snafu(display(
    "app name is too long: {}; exceeds maximum of {} characters",
    length, app_name::MAX_LENGTH
  ))]
  AppNameTooLong {
    length: usize
  },

  #[snafu(display("app name cannot contain character {:?}", character))]
  AppNameBadChar {
    character: char
  },

  #[snafu(display(
    "message id is too long: {}; exceeds maximum of {} characters",
    length, msg_id::MAX_LENGTH
  ))]
  MsgIdTooLong {
    length: usize
  },

  #[snafu(display("message id cannot contain character {:?}", character))]
  MsgIdBadChar {
    character: char
  },

  #[snafu(display("invalid timestamp {:?}: {}", value, source))]
  InvalidTimestamp {
    value: String,
    source: chrono::ParseError
  },

  #[snafu(display("unknown log source: {}", log_source))]
  UnknownLogSource {
    log_source: String
  },

  #[snafu(display(
    "expected process name <[{}]> but found <[{}]>",
    expected, found
  ))]
  ProcessNameMismatch {
    expected: String,
    found: String
  },

  #[snafu(display("could not parse {} from key {}", what, key))]
  PatternNotMatched {
    what: String,
    key: String
  },

  #[snafu(display("configuration key {} is not set", key))]
  MissingConfig {
    key: String
  },

  #[snafu(display("unable to expand config path {}: {}", path, source))]
  ConfigExpand {
    path: String,
    source: shellexpand::LookupError<std::env::VarError>
  },

  #[snafu(display("unable to read config at {}: {}", path, source))]
  ConfigRead {
    path: String,
    source: std::io::Error
  },

  #[snafu(display("unable to deserialize config at {}: {}", path, source))]
  ConfigDeserialize {
    path: String,
    source: serde_yaml::Error
  },

  #[snafu(display("record {} of batch failed: {}", index, source))]
  Record {
    index: usize,

    #[snafu(source(from(Error, Box::new)))]
    source: Box<Error>
  }
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::MissingKey { .. } | Error::WrongKeyType { .. } => ErrorKind::Field,

      Error::HostnameEmpty
        | Error::HostnameTooLong { .. }
        | Error::HostnameBadStart { .. }
        | Error::HostnameBadEnd { .. }
        | Error::HostnameBadChar { .. }
        | Error::AppNameEmpty
        | Error::AppNameTooLong { .. }
        | Error::AppNameBadChar { .. }
        | Error::MsgIdTooLong { .. }
        | Error::MsgIdBadChar { .. } => ErrorKind::Sanitization,

      Error::MissingConfig { .. }
        | Error::ConfigExpand { .. }
        | Error::ConfigRead { .. }
        | Error::ConfigDeserialize { .. } => ErrorKind::Configuration,

      _ => ErrorKind::Structural
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  use serde_json::json;
  use spectral::prelude::*;

  #[test]
  fn test_json_kind() {
    assert_that!(JsonKind::of(&json!("a"))).is_equal_to(JsonKind::String);
    assert_that!(JsonKind::of(&json!({}))).is_equal_to(JsonKind::Object);
    assert_that!(JsonKind::of(&json!(null))).is_equal_to(JsonKind::Null);
    assert_that!(JsonKind::Object.to_string())
      .is_equal_to("OBJECT".to_string());
  }

  #[test]
  fn test_kind() {
    let missing = Error::MissingKey { key: "a".to_string() };
    assert_that!(missing.kind()).is_equal_to(ErrorKind::Field);

    assert_that!(Error::HostnameEmpty.kind())
      .is_equal_to(ErrorKind::Sanitization);
    assert_that!(Error::NotJson.kind()).is_equal_to(ErrorKind::Structural);
    assert_that!(Error::MissingConfig { key: "a".to_string() }.kind())
      .is_equal_to(ErrorKind::Configuration);

    // batch failures are structural regardless of what the record hit
    let record = Error::Record { index: 1, source: Box::new(missing) };
    assert_that!(record.kind()).is_equal_to(ErrorKind::Structural);
    assert_that!(record.to_string())
      .is_equal_to("record 1 of batch failed: key a does not exist".to_string());
  }
}
