// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use crate::error::Result;
use crate::event::ParsedEvent;
use crate::util::keys;
use crate::wire::app_name;
use super::common;
use super::types::SchemaAdapter;

/// Application trace events (`Type: AppTraces`)
pub struct AppInsight<'e> {
  event: &'e dyn ParsedEvent
}

impl<'e> AppInsight<'e> {
  pub fn new(event: &'e dyn ParsedEvent) -> AppInsight<'e> {
    AppInsight { event }
  }
}

impl<'e> SchemaAdapter for AppInsight<'e> {
  fn event_type(&self) -> &'static str {
    "AppInsightType"
  }

  fn event(&self) -> &dyn ParsedEvent {
    self.event
  }

  fn hostname(&self) -> Result<String> {
    let obj = common::root(self.event)?;
    common::resource_hostname(keys::string(obj, "_ResourceId")?)
  }

  fn app_name(&self) -> Result<String> {
    let obj = common::root(self.event)?;
    app_name::validate(keys::string(obj, "AppRoleName")?)
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
  use crate::event::Event;
  use crate::record::{Facility, Severity};
  use crate::testing::{self, PLACEHOLDER_HOSTNAME};

  #[test]
  fn test_ideal() {
    let payload = testing::app_insight();
    let event = testing::event(payload.clone());
    let adapter = AppInsight::new(&event);

    assert_that!(adapter.severity()).is_ok_containing(Severity::Notice);
    assert_that!(adapter.facility()).is_ok_containing(Facility::Audit);
    assert_that!(adapter.hostname()).is_ok_containing(PLACEHOLDER_HOSTNAME.to_string());
    assert_that!(adapter.app_name()).is_ok_containing("app-role-name".to_string());
    assert_that!(adapter.timestamp()).is_ok_containing(1577840554567i64);
    assert_that!(adapter.msg_id()).is_ok_containing("12345678900".to_string());
    assert_that!(adapter.msg()).is_ok_containing(payload.to_string());

    let elements = adapter.sd_elements().unwrap();
    assert_that!(elements).has_length(4);
    assert_that!(elements[3].get("eventType")).is_equal_to(Some("AppInsightType"));
  }

  #[test]
  fn test_partial_failure() {
    let event = testing::event(json!({
      "Type": "AppTraces",
      "_ResourceId": "/not/a/resource/id",
      "AppRoleName": 42
    }));
    let adapter = AppInsight::new(&event);

    // the constant fields are unaffected by broken ones
    assert_that!(adapter.facility()).is_ok();
    assert_that!(adapter.severity()).is_ok();
    assert_that!(adapter.msg_id()).is_ok();
    assert_that!(adapter.sd_elements()).is_ok();

    assert_that!(adapter.hostname().unwrap_err().kind())
      .is_equal_to(ErrorKind::Structural);
    assert_that!(adapter.app_name().unwrap_err().kind())
      .is_equal_to(ErrorKind::Field);
    assert_that!(adapter.timestamp().unwrap_err().to_string())
      .is_equal_to("key TimeGenerated does not exist".to_string());
  }

  #[test]
  fn test_long_role_name() {
    let mut payload = testing::app_insight();
    payload["AppRoleName"] = json!("a".repeat(49));
    let event = Event::bare(payload.to_string());

    assert_that!(AppInsight::new(&event).app_name())
      .is_ok_containing("md5-08ff5f7301d30200ab89169f6afdb7af".to_string());
  }
}
