// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

mod app_insight;
mod common;
mod container;
mod custom_log;
mod data_factory;
mod function_app;
mod postgresql;
mod records;
mod syslog;
mod types;

use serde_json::{Map, Value};

pub use app_insight::AppInsight;
pub use common::{
  EVENT_ELEMENT, MARKER_ELEMENT, ORIGIN_ELEMENT, PARTITION_ELEMENT,
  TIMESTAMP_SOURCE_ELEMENT
};
pub use container::{Container, IstioIngress};
pub use custom_log::{AuditCustomLog, CustomLog};
pub use data_factory::{DataFactory, RunKind};
pub use function_app::FunctionApp;
pub use postgresql::PostgreSql;
pub use records::Records;
pub use syslog::Syslog;
pub use types::*;

use crate::config::{
  ConfigSource, CONTAINER_APPNAME_ANNOTATION, CONTAINER_APPNAME_SEPARATOR,
  CONTAINER_HOSTNAME_ANNOTATION, DEFAULT_APPNAME_SEPARATOR, SYSLOG_PROCESS_NAME
};
use crate::error::{NoApplicableSchemaSnafu, Result};
use crate::event::ParsedEvent;
use crate::util::keys;

static ISTIO_INGRESS_NAMESPACE_PREFIX: &str = "aks-istio-ingress";

fn type_is(obj: &Map<String, Value>, expected: &str) -> bool {
  keys::optional_string(obj, "Type") == Some(expected)
}

fn type_ends_with(obj: &Map<String, Value>, suffix: &str) -> bool {
  keys::optional_string(obj, "Type")
    .map(|t| t.ends_with(suffix))
    .unwrap_or(false)
}

fn is_records(obj: &Map<String, Value>, _: &dyn ConfigSource) -> Result<bool> {
  Ok(obj.get("records").map(Value::is_array).unwrap_or(false))
}

fn is_app_insight(obj: &Map<String, Value>, _: &dyn ConfigSource) -> Result<bool> {
  Ok(type_is(obj, "AppTraces"))
}

/// Syslog is only claimed for the configured process; the setting is read
/// only once the event is known to be syslog
fn is_syslog(obj: &Map<String, Value>, config: &dyn ConfigSource) -> Result<bool> {
  if !type_is(obj, "Syslog") {
    return Ok(false);
  }

  let expected = config.source(SYSLOG_PROCESS_NAME)?;
  Ok(keys::optional_string(obj, "ProcessName") == Some(expected.as_str()))
}

fn is_istio_ingress(obj: &Map<String, Value>, _: &dyn ConfigSource) -> Result<bool> {
  Ok(type_is(obj, "ContainerLogV2") && keys::optional_string(obj, "PodNamespace")
    .map(|ns| ns.starts_with(ISTIO_INGRESS_NAMESPACE_PREFIX))
    .unwrap_or(false))
}

fn is_container(obj: &Map<String, Value>, _: &dyn ConfigSource) -> Result<bool> {
  Ok(type_is(obj, "ContainerLogV2"))
}

fn is_function_app(obj: &Map<String, Value>, _: &dyn ConfigSource) -> Result<bool> {
  Ok(type_is(obj, "FunctionAppLogs"))
}

fn is_pipeline_run(obj: &Map<String, Value>, _: &dyn ConfigSource) -> Result<bool> {
  Ok(type_is(obj, "ADFPipelineRun"))
}

fn is_activity_run(obj: &Map<String, Value>, _: &dyn ConfigSource) -> Result<bool> {
  Ok(type_is(obj, "ADFActivityRun"))
}

fn is_audit_custom_log(obj: &Map<String, Value>, _: &dyn ConfigSource) -> Result<bool> {
  Ok(type_ends_with(obj, "_AUDIT_CL"))
}

fn is_custom_log(obj: &Map<String, Value>, _: &dyn ConfigSource) -> Result<bool> {
  Ok(type_ends_with(obj, "_CL"))
}

fn is_postgresql(obj: &Map<String, Value>, _: &dyn ConfigSource) -> Result<bool> {
  Ok(!obj.contains_key("Type")
    && keys::optional_string(obj, "category") == Some("PostgreSQLLogs"))
}

fn build_records<'e>(event: &'e dyn ParsedEvent, _: &dyn ConfigSource) -> Result<Schema<'e>> {
  Ok(Schema::Records(Records::new(event)))
}

fn build_app_insight<'e>(event: &'e dyn ParsedEvent, _: &dyn ConfigSource) -> Result<Schema<'e>> {
  Ok(Schema::AppInsight(AppInsight::new(event)))
}

fn build_syslog<'e>(event: &'e dyn ParsedEvent, config: &dyn ConfigSource) -> Result<Schema<'e>> {
  let process_name = config.source(SYSLOG_PROCESS_NAME)?;
  Ok(Schema::Syslog(Syslog::new(event, process_name)))
}

fn build_istio_ingress<'e>(event: &'e dyn ParsedEvent, _: &dyn ConfigSource) -> Result<Schema<'e>> {
  Ok(Schema::IstioIngress(IstioIngress::new(event)))
}

fn build_container<'e>(event: &'e dyn ParsedEvent, config: &dyn ConfigSource) -> Result<Schema<'e>> {
  Ok(Schema::Container(Container::new(
    event,
    config.source(CONTAINER_HOSTNAME_ANNOTATION)?,
    config.source(CONTAINER_APPNAME_ANNOTATION)?,
    config.source_or(CONTAINER_APPNAME_SEPARATOR, DEFAULT_APPNAME_SEPARATOR)?
  )))
}

fn build_function_app<'e>(event: &'e dyn ParsedEvent, _: &dyn ConfigSource) -> Result<Schema<'e>> {
  Ok(Schema::FunctionApp(FunctionApp::new(event)))
}

fn build_pipeline_run<'e>(event: &'e dyn ParsedEvent, _: &dyn ConfigSource) -> Result<Schema<'e>> {
  Ok(Schema::DataFactory(DataFactory::new(event, RunKind::Pipeline)))
}

fn build_activity_run<'e>(event: &'e dyn ParsedEvent, _: &dyn ConfigSource) -> Result<Schema<'e>> {
  Ok(Schema::DataFactory(DataFactory::new(event, RunKind::Activity)))
}

fn build_audit_custom_log<'e>(event: &'e dyn ParsedEvent, _: &dyn ConfigSource) -> Result<Schema<'e>> {
  Ok(Schema::AuditCustomLog(AuditCustomLog::new(event)))
}

fn build_custom_log<'e>(event: &'e dyn ParsedEvent, _: &dyn ConfigSource) -> Result<Schema<'e>> {
  Ok(Schema::CustomLog(CustomLog::new(event)))
}

fn build_postgresql<'e>(event: &'e dyn ParsedEvent, _: &dyn ConfigSource) -> Result<Schema<'e>> {
  Ok(Schema::PostgreSql(PostgreSql::new(event)))
}

/// Classification rules in priority order; the first whose predicate holds
/// decides the schema.
pub static RULES: &[Rule] = &[
  Rule { name: "Records", predicate: is_records, factory: build_records },
  Rule { name: "AppInsight", predicate: is_app_insight, factory: build_app_insight },
  Rule { name: "Syslog", predicate: is_syslog, factory: build_syslog },
  Rule { name: "IstioIngress", predicate: is_istio_ingress, factory: build_istio_ingress },
  Rule { name: "Container", predicate: is_container, factory: build_container },
  Rule { name: "FunctionApp", predicate: is_function_app, factory: build_function_app },
  Rule { name: "PipelineRun", predicate: is_pipeline_run, factory: build_pipeline_run },
  Rule { name: "ActivityRun", predicate: is_activity_run, factory: build_activity_run },
  Rule { name: "AuditCustomLog", predicate: is_audit_custom_log, factory: build_audit_custom_log },
  Rule { name: "CustomLog", predicate: is_custom_log, factory: build_custom_log },
  Rule { name: "PostgreSql", predicate: is_postgresql, factory: build_postgresql }
];

/// Finds the first rule matching the event's root object
pub fn select(
  obj: &Map<String, Value>, config: &dyn ConfigSource
) -> Result<Option<&'static Rule>> {
  for rule in RULES {
    if (rule.predicate)(obj, config)? {
      return Ok(Some(rule));
    }
  }

  Ok(None)
}

/// Determines which schema an event belongs to
///
/// Fails if the event is not a JSON object, if no rule matches, or if a rule
/// needs configuration that is missing.
pub fn classify<'e>(
  event: &'e dyn ParsedEvent, config: &dyn ConfigSource
) -> Result<Schema<'e>> {
  let obj = common::root(event)?;

  match select(obj, config)? {
    Some(rule) => (rule.factory)(event, config),
    None => NoApplicableSchemaSnafu.fail()
  }
}
