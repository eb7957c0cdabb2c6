// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use crate::error::Result;
use crate::event::ParsedEvent;
use crate::util::keys;
use crate::wire::app_name;
use super::common;
use super::types::SchemaAdapter;

/// Which data factory run table an event came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
  Pipeline,
  Activity
}

/// Data factory pipeline and activity runs (`Type: ADFPipelineRun` and
/// `Type: ADFActivityRun`); both are keyed by the owning pipeline's name.
pub struct DataFactory<'e> {
  event: &'e dyn ParsedEvent,
  kind: RunKind
}

impl<'e> DataFactory<'e> {
  pub fn new(event: &'e dyn ParsedEvent, kind: RunKind) -> DataFactory<'e> {
    DataFactory { event, kind }
  }
}

impl<'e> SchemaAdapter for DataFactory<'e> {
  fn event_type(&self) -> &'static str {
    match self.kind {
      RunKind::Pipeline => "ADFPipelineRunType",
      RunKind::Activity => "ADFActivityRunType"
    }
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
    app_name::validate(keys::string(obj, "PipelineName")?)
  }

  fn timestamp(&self) -> Result<i64> {
    common::time_generated(common::root(self.event)?)
  }
}
