// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use regex::Regex;
use serde_json::{Map, Value};
use snafu::{ensure, OptionExt};

use crate::error::{PatternNotMatchedSnafu, ProcessNameMismatchSnafu, Result};
use crate::event::ParsedEvent;
use crate::record::{Facility, SdElement, Severity};
use crate::util::keys;
use crate::wire::app_name;
use super::common;
use super::types::SchemaAdapter;

/// Syslog events forwarded by one expected process
///
/// Every accessor first checks that `ProcessName` matches the configured
/// value, even for fields that do not otherwise depend on it.
pub struct Syslog<'e> {
  event: &'e dyn ParsedEvent,
  expected_process_name: String
}

impl<'e> Syslog<'e> {
  pub fn new<S: Into<String>>(
    event: &'e dyn ParsedEvent, expected_process_name: S
  ) -> Syslog<'e> {
    Syslog {
      event,
      expected_process_name: expected_process_name.into()
    }
  }

  fn checked_root(&self) -> Result<&'e Map<String, Value>> {
    let obj = common::root(self.event)?;
    let found = keys::string(obj, "ProcessName")?;

    ensure!(found == self.expected_process_name, ProcessNameMismatchSnafu {
      expected: self.expected_process_name.as_str(),
      found
    });

    Ok(obj)
  }
}

impl<'e> SchemaAdapter for Syslog<'e> {
  fn event_type(&self) -> &'static str {
    "SyslogType"
  }

  fn event(&self) -> &dyn ParsedEvent {
    self.event
  }

  fn severity(&self) -> Result<Severity> {
    self.checked_root()?;
    Ok(Severity::Notice)
  }

  fn facility(&self) -> Result<Facility> {
    self.checked_root()?;
    Ok(Facility::Audit)
  }

  fn hostname(&self) -> Result<String> {
    let obj = self.checked_root()?;
    common::resource_hostname(keys::string(obj, "_Internal_WorkspaceResourceId")?)
  }

  /// The first UUID found in the syslog message
  fn app_name(&self) -> Result<String> {
    lazy_static! {
      static ref RE: Regex = Regex::new(
        r"^.*?(?P<uuid>[a-z0-9]{8}-[a-z0-9]{4}-[a-z0-9]{4}-[a-z0-9]{4}-[a-z0-9]{12})"
      ).unwrap();
    }

    let obj = self.checked_root()?;
    let message = keys::string(obj, "SyslogMessage")?;

    let uuid = RE.captures(message)
      .and_then(|caps| caps.name("uuid"))
      .context(PatternNotMatchedSnafu { what: "app name", key: "SyslogMessage" })?;

    app_name::validate(uuid.as_str())
  }

  fn timestamp(&self) -> Result<i64> {
    common::time_generated(self.checked_root()?)
  }

  fn msg_id(&self) -> Result<String> {
    self.checked_root()?;
    Ok(common::msg_id(self.event))
  }

  fn msg(&self) -> Result<String> {
    self.checked_root()?;
    Ok(self.event.raw().to_string())
  }

  fn sd_elements(&self) -> Result<Vec<SdElement>> {
    self.checked_root()?;
    Ok(common::sd_elements(self.event, None, self.event_type()))
  }
}
