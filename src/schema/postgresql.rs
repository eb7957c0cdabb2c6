// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use regex::Regex;
use snafu::OptionExt;

use crate::error::{PatternNotMatchedSnafu, Result};
use crate::event::ParsedEvent;
use crate::util::keys;
use crate::wire::{app_name, timestamp};
use super::common;
use super::types::SchemaAdapter;

/// Database server diagnostics (`category: PostgreSQLLogs`), which carry no
/// `Type` and use lower camel case keys
pub struct PostgreSql<'e> {
  event: &'e dyn ParsedEvent
}

impl<'e> PostgreSql<'e> {
  pub fn new(event: &'e dyn ParsedEvent) -> PostgreSql<'e> {
    PostgreSql { event }
  }
}

impl<'e> SchemaAdapter for PostgreSql<'e> {
  fn event_type(&self) -> &'static str {
    "PostgreSQLType"
  }

  fn event(&self) -> &dyn ParsedEvent {
    self.event
  }

  fn hostname(&self) -> Result<String> {
    let obj = common::root(self.event)?;
    common::resource_hostname(keys::string(obj, "resourceId")?)
  }

  /// The database named in the server's log line prefix (`db=<name>,`)
  fn app_name(&self) -> Result<String> {
    lazy_static! {
      static ref RE: Regex = Regex::new(r"db=(?P<db>[^,\s]+)").unwrap();
    }

    let obj = common::root(self.event)?;
    let properties = keys::object(obj, "properties")?;
    let message = keys::string(properties, "message")?;

    let db = RE.captures(message)
      .and_then(|caps| caps.name("db"))
      .context(PatternNotMatchedSnafu {
        what: "database name",
        key: "properties.message"
      })?;

    app_name::validate(db.as_str())
  }

  fn timestamp(&self) -> Result<i64> {
    let obj = common::root(self.event)?;
    timestamp::epoch_millis(keys::string(obj, "time")?)
  }
}
