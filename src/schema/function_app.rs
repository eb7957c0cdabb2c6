// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use crate::error::Result;
use crate::event::ParsedEvent;
use crate::util::keys;
use crate::wire::app_name;
use super::common;
use super::types::SchemaAdapter;

/// Function host and invocation logs (`Type: FunctionAppLogs`)
pub struct FunctionApp<'e> {
  event: &'e dyn ParsedEvent
}

impl<'e> FunctionApp<'e> {
  pub fn new(event: &'e dyn ParsedEvent) -> FunctionApp<'e> {
    FunctionApp { event }
  }
}

impl<'e> SchemaAdapter for FunctionApp<'e> {
  fn event_type(&self) -> &'static str {
    "FunctionAppLogsType"
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
    app_name::validate(keys::string(obj, "AppName")?)
  }

  fn timestamp(&self) -> Result<i64> {
    common::time_generated(common::root(self.event)?)
  }
}
