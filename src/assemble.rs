// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

//! Turns a classified event into a canonical record

use chrono::prelude::*;
use chrono::SecondsFormat;
use uuid::Uuid;

use crate::error::Result;
use crate::record::{CanonicalLogRecord, SdElement};
use crate::schema::SchemaAdapter;

pub static EVENT_ID_ELEMENT: &str = "event_id@48577";

/// Source of the values that identify one normalization run: wall clock,
/// unique ids and the name of the host doing the work
pub trait Provenance: Send + Sync {
  fn now(&self) -> DateTime<Utc>;

  fn unique_id(&self) -> String;

  fn hostname(&self) -> &str;
}

/// Provenance from the system clock and random v4 UUIDs
#[derive(Debug, Clone)]
pub struct SystemProvenance {
  hostname: String
}

impl SystemProvenance {
  pub fn new<S: Into<String>>(hostname: S) -> SystemProvenance {
    SystemProvenance { hostname: hostname.into() }
  }
}

impl Provenance for SystemProvenance {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }

  fn unique_id(&self) -> String {
    Uuid::new_v4().to_string()
  }

  fn hostname(&self) -> &str {
    &self.hostname
  }
}

/// Provenance that always reports the same values, for reproducible output
#[derive(Debug, Clone, PartialEq)]
pub struct FixedProvenance {
  pub now: DateTime<Utc>,
  pub unique_id: String,
  pub hostname: String
}

impl Provenance for FixedProvenance {
  fn now(&self) -> DateTime<Utc> {
    self.now
  }

  fn unique_id(&self) -> String {
    self.unique_id.clone()
  }

  fn hostname(&self) -> &str {
    &self.hostname
  }
}

pub fn event_id_element(provenance: &dyn Provenance) -> SdElement {
  SdElement::new(EVENT_ID_ELEMENT)
    .param("uuid", provenance.unique_id())
    .param("hostname", provenance.hostname())
    .param("unixtime", provenance.now().to_rfc3339_opts(SecondsFormat::AutoSi, true))
    .param("id_source", "aer_02")
}

/// Builds the record for one adapter; the first failing accessor fails the
/// whole record.
pub fn assemble(
  adapter: &dyn SchemaAdapter, provenance: &dyn Provenance
) -> Result<CanonicalLogRecord> {
  let mut record = CanonicalLogRecord::new(
    adapter.facility()?,
    adapter.severity()?,
    adapter.timestamp()?,
    &adapter.hostname()?,
    &adapter.app_name()?
  )?
    .with_msg_id(&adapter.msg_id()?)?
    .with_msg(adapter.msg()?)
    .with_sd_element(event_id_element(provenance));

  for element in adapter.sd_elements()? {
    record = record.with_sd_element(element);
  }

  Ok(record)
}
