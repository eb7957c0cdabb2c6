// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use serde_json::{Map, Value};

use crate::config::ConfigSource;
use crate::error::Result;
use crate::event::ParsedEvent;
use crate::record::{Facility, SdElement, Severity};
use super::common;
use super::app_insight::AppInsight;
use super::container::{Container, IstioIngress};
use super::custom_log::{AuditCustomLog, CustomLog};
use super::data_factory::DataFactory;
use super::function_app::FunctionApp;
use super::postgresql::PostgreSql;
use super::records::Records;
use super::syslog::Syslog;

/// Field extraction for one producer schema
///
/// Every accessor validates only what it needs, so e.g. `facility()` can
/// succeed on an event whose `hostname()` fails.
pub trait SchemaAdapter {
  /// The adapter name recorded in the `nlf_01@48577` element
  fn event_type(&self) -> &'static str;

  fn event(&self) -> &dyn ParsedEvent;

  fn severity(&self) -> Result<Severity> {
    Ok(Severity::Notice)
  }

  fn facility(&self) -> Result<Facility> {
    Ok(Facility::Audit)
  }

  fn hostname(&self) -> Result<String>;

  fn app_name(&self) -> Result<String>;

  /// Event time in epoch milliseconds
  fn timestamp(&self) -> Result<i64>;

  fn msg_id(&self) -> Result<String> {
    Ok(common::msg_id(self.event()))
  }

  fn msg(&self) -> Result<String> {
    Ok(self.event().raw().to_string())
  }

  /// A schema-specific `origin@48577` element, if the schema has one
  fn origin(&self) -> Result<Option<SdElement>> {
    Ok(None)
  }

  fn sd_elements(&self) -> Result<Vec<SdElement>> {
    Ok(common::sd_elements(self.event(), self.origin()?, self.event_type()))
  }
}

/// The closed set of schemas an event can be classified as
pub enum Schema<'e> {
  /// a batch wrapper whose `records` are each classified on their own
  Records(Records<'e>),

  AppInsight(AppInsight<'e>),
  Syslog(Syslog<'e>),
  IstioIngress(IstioIngress<'e>),
  Container(Container<'e>),
  FunctionApp(FunctionApp<'e>),
  DataFactory(DataFactory<'e>),
  AuditCustomLog(AuditCustomLog<'e>),
  CustomLog(CustomLog<'e>),
  PostgreSql(PostgreSql<'e>)
}

impl<'e> Schema<'e> {
  /// The field adapter for this schema, `None` for batches
  pub fn adapter(&self) -> Option<&dyn SchemaAdapter> {
    match self {
      Schema::Records(_) => None,
      Schema::AppInsight(a) => Some(a),
      Schema::Syslog(a) => Some(a),
      Schema::IstioIngress(a) => Some(a),
      Schema::Container(a) => Some(a),
      Schema::FunctionApp(a) => Some(a),
      Schema::DataFactory(a) => Some(a),
      Schema::AuditCustomLog(a) => Some(a),
      Schema::CustomLog(a) => Some(a),
      Schema::PostgreSql(a) => Some(a)
    }
  }

  pub fn name(&self) -> &'static str {
    match self.adapter() {
      Some(adapter) => adapter.event_type(),
      None => "Records"
    }
  }
}

pub type Predicate = fn(
  obj: &Map<String, Value>, config: &dyn ConfigSource
) -> Result<bool>;

pub type Factory = for<'e> fn(
  event: &'e dyn ParsedEvent, config: &dyn ConfigSource
) -> Result<Schema<'e>>;

/// Selects a schema when its predicate holds for the event's root object
pub struct Rule {
  pub name: &'static str,
  pub predicate: Predicate,
  pub factory: Factory
}
