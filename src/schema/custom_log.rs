// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use std::ffi::OsStr;
use std::path::Path;

use regex::Regex;
use snafu::OptionExt;

use crate::error::{PatternNotMatchedSnafu, Result};
use crate::event::ParsedEvent;
use crate::record::SdElement;
use crate::util::{keys, md5_hex};
use crate::wire::app_name;
use super::common::{self, ORIGIN_ELEMENT};
use super::types::SchemaAdapter;

const DIGEST_PREFIX_LENGTH: usize = 8;
const FILE_NAME_LENGTH: usize = 39;

/// Custom text logs collected from files (`Type: *_CL`)
pub struct CustomLog<'e> {
  event: &'e dyn ParsedEvent
}

impl<'e> CustomLog<'e> {
  pub fn new(event: &'e dyn ParsedEvent) -> CustomLog<'e> {
    CustomLog { event }
  }
}

impl<'e> SchemaAdapter for CustomLog<'e> {
  fn event_type(&self) -> &'static str {
    "CLType"
  }

  fn event(&self) -> &dyn ParsedEvent {
    self.event
  }

  fn hostname(&self) -> Result<String> {
    let obj = common::root(self.event)?;
    common::resource_hostname(keys::string(obj, "_Internal_WorkspaceResourceId")?)
  }

  /// `<first 8 hex digits of md5(FilePath)>-<file name, at most 39 chars>`
  fn app_name(&self) -> Result<String> {
    let obj = common::root(self.event)?;
    let file_path = keys::string(obj, "FilePath")?;

    let file_name = Path::new(file_path)
      .file_name()
      .and_then(OsStr::to_str)
      .context(PatternNotMatchedSnafu { what: "file name", key: "FilePath" })?;

    let digest = md5_hex(file_path);
    let truncated: String = file_name.chars().take(FILE_NAME_LENGTH).collect();

    app_name::validate(&format!(
      "{}-{}", &digest[..DIGEST_PREFIX_LENGTH], truncated
    ))
  }

  fn timestamp(&self) -> Result<i64> {
    common::time_generated(common::root(self.event)?)
  }

  fn origin(&self) -> Result<Option<SdElement>> {
    let obj = common::root(self.event)?;
    let resource_id = keys::string(obj, "_ResourceId")?;

    Ok(Some(SdElement::new(ORIGIN_ELEMENT).param("_ResourceId", resource_id)))
  }
}

/// Platform audit logs shipped as a custom table (`Type: *_AUDIT_CL`)
///
/// The app name is the environment named in `data.resourceName`, found
/// between its second `=` and the following `/`.
pub struct AuditCustomLog<'e> {
  event: &'e dyn ParsedEvent
}

impl<'e> AuditCustomLog<'e> {
  pub fn new(event: &'e dyn ParsedEvent) -> AuditCustomLog<'e> {
    AuditCustomLog { event }
  }
}

impl<'e> SchemaAdapter for AuditCustomLog<'e> {
  fn event_type(&self) -> &'static str {
    "CCType"
  }

  fn event(&self) -> &dyn ParsedEvent {
    self.event
  }

  fn hostname(&self) -> Result<String> {
    let obj = common::root(self.event)?;
    common::resource_hostname(keys::string(obj, "_Internal_WorkspaceResourceId")?)
  }

  fn app_name(&self) -> Result<String> {
    lazy_static! {
      static ref RE: Regex = Regex::new(r"=.*?=(?P<value>.*?)/").unwrap();
    }

    let obj = common::root(self.event)?;
    let data = keys::object(obj, "data")?;
    let resource_name = keys::string(data, "resourceName")?;

    let value = RE.captures(resource_name)
      .and_then(|caps| caps.name("value"))
      .context(PatternNotMatchedSnafu {
        what: "environment",
        key: "data.resourceName"
      })?;

    app_name::legalize(value.as_str())
  }

  fn timestamp(&self) -> Result<i64> {
    common::time_generated(common::root(self.event)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use serde_json::json;
  use spectral::prelude::*;

  use crate::error::ErrorKind;
  use crate::testing::{self, PLACEHOLDER_RESOURCE_ID, WORKSPACE_HOSTNAME};

  fn custom_log_app_name(file_path: &str) -> Result<String> {
    let mut payload = testing::custom_log();
    payload["FilePath"] = json!(file_path);
    let event = testing::event(payload);

    CustomLog::new(&event).app_name()
  }

  #[test]
  fn test_custom_log() {
    let event = testing::event(testing::custom_log());
    let adapter = CustomLog::new(&event);

    assert_that!(adapter.hostname()).is_ok_containing(WORKSPACE_HOSTNAME.to_string());
    assert_that!(adapter.app_name()).is_ok_containing("97bd8f02-xxxxx.log".to_string());
    assert_that!(adapter.timestamp()).is_ok_containing(1577840554567i64);

    let elements = adapter.sd_elements().unwrap();
    assert_that!(elements).has_length(5);
    assert_that!(elements[3].get("_ResourceId")).is_equal_to(Some(PLACEHOLDER_RESOURCE_ID));
    assert_that!(elements[4].get("eventType")).is_equal_to(Some("CLType"));
  }

  #[test]
  fn test_long_file_name() {
    let path = format!("/var/log/app/{}.log", "x".repeat(50));
    let expected = format!("0098f710-{}", "x".repeat(39));

    assert_that!(custom_log_app_name(&path)).is_ok_containing(expected);
  }

  #[test]
  fn test_no_file_name() {
    assert_that!(custom_log_app_name("/").unwrap_err().to_string())
      .is_equal_to("could not parse file name from key FilePath".to_string());
  }

  #[test]
  fn test_missing_origin() {
    let mut payload = testing::custom_log();
    payload.as_object_mut().unwrap().remove("_ResourceId");
    let event = testing::event(payload);
    let adapter = CustomLog::new(&event);

    assert_that!(adapter.sd_elements().unwrap_err().kind()).is_equal_to(ErrorKind::Field);
    assert_that!(adapter.app_name()).is_ok();
  }

  #[test]
  fn test_audit_custom_log() {
    let event = testing::event(testing::audit_custom_log());
    let adapter = AuditCustomLog::new(&event);

    assert_that!(adapter.hostname()).is_ok_containing(WORKSPACE_HOSTNAME.to_string());
    assert_that!(adapter.app_name()).is_ok_containing("production-env".to_string());
    assert_that!(adapter.timestamp()).is_ok_containing(1577840554567i64);

    let elements = adapter.sd_elements().unwrap();
    assert_that!(elements).has_length(4);
    assert_that!(elements[3].get("eventType")).is_equal_to(Some("CCType"));
  }

  #[test]
  fn test_audit_non_ascii_environment() {
    let mut payload = testing::audit_custom_log();
    payload["data"]["resourceName"] = json!("env=prod=prød env/resource");
    let event = testing::event(payload);

    assert_that!(AuditCustomLog::new(&event).app_name())
      .is_ok_containing("prdenv".to_string());
  }

  #[test]
  fn test_audit_no_environment() {
    let mut payload = testing::audit_custom_log();
    payload["data"]["resourceName"] = json!("env=prod");
    let event = testing::event(payload);

    assert_that!(AuditCustomLog::new(&event).app_name().unwrap_err().kind())
      .is_equal_to(ErrorKind::Structural);
  }
}
