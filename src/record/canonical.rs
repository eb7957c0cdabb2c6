// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::wire::{app_name, hostname, msg_id, timestamp};
use super::types::{priority, Facility, SdElement, Severity};

/// The unified output record produced for each classified event
///
/// Hostname, app name and message id are checked against the wire charset as
/// they are set, so any record that exists can be rendered as RFC 5424 as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalLogRecord {
  facility: Facility,
  severity: Severity,

  /// milliseconds since the unix epoch
  timestamp: i64,

  hostname: String,
  app_name: String,
  msg_id: String,
  msg: String,
  sd_elements: Vec<SdElement>
}

impl CanonicalLogRecord {
  pub fn new(
    facility: Facility,
    severity: Severity,
    timestamp: i64,
    hostname: &str,
    app_name: &str
  ) -> Result<CanonicalLogRecord> {
    let hostname = hostname::validate_printable(hostname)?;
    let app_name = app_name::check(app_name)?;

    Ok(CanonicalLogRecord {
      facility,
      severity,
      timestamp,
      hostname: hostname.to_string(),
      app_name: app_name.to_string(),
      msg_id: String::new(),
      msg: String::new(),
      sd_elements: Vec::new()
    })
  }

  pub fn with_msg_id(mut self, msg_id: &str) -> Result<CanonicalLogRecord> {
    self.msg_id = msg_id::check(msg_id)?.to_string();
    Ok(self)
  }

  pub fn with_msg<S: Into<String>>(mut self, msg: S) -> CanonicalLogRecord {
    self.msg = msg.into();
    self
  }

  pub fn with_sd_element(mut self, element: SdElement) -> CanonicalLogRecord {
    self.sd_elements.push(element);
    self
  }

  pub fn facility(&self) -> Facility {
    self.facility
  }

  pub fn severity(&self) -> Severity {
    self.severity
  }

  pub fn timestamp(&self) -> i64 {
    self.timestamp
  }

  pub fn hostname(&self) -> &str {
    &self.hostname
  }

  pub fn app_name(&self) -> &str {
    &self.app_name
  }

  pub fn msg_id(&self) -> &str {
    &self.msg_id
  }

  pub fn msg(&self) -> &str {
    &self.msg
  }

  pub fn sd_elements(&self) -> &[SdElement] {
    &self.sd_elements
  }

  /// Finds a structured-data element by id
  pub fn sd_element(&self, id: &str) -> Option<&SdElement> {
    self.sd_elements.iter().find(|e| e.id == id)
  }
}

/// Renders the record as an RFC 5424 line
impl fmt::Display for CanonicalLogRecord {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f, "<{}>1 {} {} {} - {} ",
      priority(self.facility, self.severity),
      timestamp::format_millis(self.timestamp),
      self.hostname,
      self.app_name,
      if self.msg_id.is_empty() { "-" } else { self.msg_id.as_str() }
    )?;

    if self.sd_elements.is_empty() {
      f.write_str("-")?;
    } else {
      for element in &self.sd_elements {
        write!(f, "{}", element)?;
      }
    }

    if !self.msg.is_empty() {
      write!(f, " {}", self.msg)?;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use spectral::prelude::*;

  use crate::error::ErrorKind;

  #[test]
  fn test_construction() {
    let record = CanonicalLogRecord::new(
      Facility::Audit, Severity::Notice, 1577840554567, "HOST-NAME", "APP-NAME:o"
    );

    assert_that!(record).is_ok();
  }

  #[test]
  fn test_invalid_hostname() {
    let err = CanonicalLogRecord::new(
      Facility::Audit, Severity::Notice, 0, "", "app"
    ).unwrap_err();
    assert_that!(err.kind()).is_equal_to(ErrorKind::Sanitization);

    let long = "h".repeat(256);
    assert_that!(CanonicalLogRecord::new(
      Facility::Audit, Severity::Notice, 0, &long, "app"
    )).is_err();
  }

  #[test]
  fn test_invalid_app_name() {
    assert_that!(CanonicalLogRecord::new(
      Facility::Audit, Severity::Notice, 0, "host", "app name"
    )).is_err();

    let long = "a".repeat(49);
    assert_that!(CanonicalLogRecord::new(
      Facility::Audit, Severity::Notice, 0, "host", &long
    )).is_err();
  }

  #[test]
  fn test_display() {
    let record = CanonicalLogRecord::new(
      Facility::Audit, Severity::Notice, 1577840554567, "host", "app"
    ).unwrap()
      .with_msg_id("42").unwrap()
      .with_msg("{\"a\":1}")
      .with_sd_element(SdElement::new("nlf_01@48577").param("eventType", "CLType"))
      .with_sd_element(SdElement::new("origin@48577").param("_ResourceId", "/x"));

    assert_that!(record.to_string()).is_equal_to(concat!(
      "<109>1 2020-01-01T01:02:34.567Z host app - 42 ",
      "[nlf_01@48577 eventType=\"CLType\"][origin@48577 _ResourceId=\"/x\"] ",
      "{\"a\":1}"
    ).to_string());
  }

  #[test]
  fn test_invalid_msg_id() {
    let record = CanonicalLogRecord::new(
      Facility::Audit, Severity::Notice, 0, "host", "app"
    ).unwrap();

    let err = record.clone().with_msg_id("sequence 42").unwrap_err();
    assert_that!(err.kind()).is_equal_to(ErrorKind::Sanitization);
    assert_that!(record.with_msg_id(&"4".repeat(33))).is_err();
  }

  #[test]
  fn test_display_nil_values() {
    let record = CanonicalLogRecord::new(
      Facility::Audit, Severity::Notice, 0, "host", "app"
    ).unwrap();

    assert_that!(record.to_string()).is_equal_to(
      "<109>1 1970-01-01T00:00:00.000Z host app - - -".to_string()
    );
  }

  #[test]
  fn test_lookup() {
    let record = CanonicalLogRecord::new(
      Facility::Audit, Severity::Notice, 0, "host", "app"
    ).unwrap()
      .with_sd_element(SdElement::new("a@1").param("k", "v"));

    assert_that!(record.sd_element("a@1").and_then(|e| e.get("k")))
      .is_equal_to(Some("v"));
    assert_that!(record.sd_element("b@1")).is_none();
  }
}
