// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use std::fmt;

use chrono::prelude::*;
use serde::Deserialize;
use serde::de::{self, Deserializer, Visitor};
use serde_json::{Map, Value};

use super::ParsedEvent;
use super::time::parse_enqueued_time;

fn as_structure(value: Value) -> Option<Value> {
  match value {
    Value::Object(_) | Value::Array(_) => Some(value),
    _ => None
  }
}

struct EnqueuedTimeFromStr;

impl<'de> Visitor<'de> for EnqueuedTimeFromStr {
  type Value = Option<DateTime<Utc>>;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a string containing an enqueue time")
  }

  fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
  where
    E: de::Error
  {
    match parse_enqueued_time(s) {
      Some(t) => Ok(Some(t)),
      None => Err(de::Error::custom(format!(
        "could not parse enqueue time: {:?}", s
      )))
    }
  }

  fn visit_none<E>(self) -> Result<Self::Value, E>
  where
    E: de::Error
  {
    Ok(None)
  }

  fn visit_unit<E>(self) -> Result<Self::Value, E>
  where
    E: de::Error
  {
    Ok(None)
  }

  fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
  where
    D: Deserializer<'de>
  {
    deserializer.deserialize_str(EnqueuedTimeFromStr)
  }
}

fn de_enqueued_time<'de, D>(
  deserializer: D
) -> Result<Option<DateTime<Utc>>, D::Error>
where
  D: Deserializer<'de>
{
  deserializer.deserialize_option(EnqueuedTimeFromStr)
}

/// Transport metadata that accompanies an event payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMetadata {
  #[serde(default)]
  pub partition_context: Option<Map<String, Value>>,

  #[serde(default)]
  pub system_properties: Option<Map<String, Value>>,

  /// free-form properties, values may be null
  #[serde(default)]
  pub properties: Option<Map<String, Value>>,

  #[serde(default, deserialize_with = "de_enqueued_time")]
  pub enqueued_time: Option<DateTime<Utc>>,

  #[serde(default)]
  pub offset: Option<String>
}

/// An owned event: the raw payload plus whatever metadata came with it
#[derive(Debug, Clone)]
pub struct Event {
  raw: String,
  structure: Option<Value>,
  metadata: EventMetadata
}

impl Event {
  pub fn new<S: Into<String>>(raw: S, metadata: EventMetadata) -> Event {
    let raw = raw.into();
    let structure = serde_json::from_str(&raw).ok().and_then(as_structure);

    Event { raw, structure, metadata }
  }

  /// An event with every metadata accessor stubbed out
  pub fn bare<S: Into<String>>(raw: S) -> Event {
    Event::new(raw, EventMetadata::default())
  }

  pub fn metadata(&self) -> &EventMetadata {
    &self.metadata
  }
}

impl ParsedEvent for Event {
  fn raw(&self) -> &str {
    &self.raw
  }

  fn json(&self) -> Option<&Value> {
    self.structure.as_ref()
  }

  fn partition_context(&self) -> Option<&Map<String, Value>> {
    self.metadata.partition_context.as_ref()
  }

  fn system_properties(&self) -> Option<&Map<String, Value>> {
    self.metadata.system_properties.as_ref()
  }

  fn properties(&self) -> Option<&Map<String, Value>> {
    self.metadata.properties.as_ref()
  }

  fn enqueued_time(&self) -> Option<DateTime<Utc>> {
    self.metadata.enqueued_time
  }

  fn offset(&self) -> Option<&str> {
    self.metadata.offset.as_ref().map(String::as_str)
  }
}

/// A single line of envelope-mode input: the payload as a string plus its
/// transport metadata
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
  pub payload: String,

  #[serde(flatten)]
  pub metadata: EventMetadata
}

impl Envelope {
  pub fn into_event(self) -> Event {
    Event::new(self.payload, self.metadata)
  }
}

/// One element of a batch event, sharing the transport metadata of the event
/// it was embedded in
pub struct NestedEvent<'p> {
  parent: &'p dyn ParsedEvent,
  raw: String,
  structure: Option<Value>
}

impl<'p> NestedEvent<'p> {
  /// The raw form is the element re-serialized, keeping its key order
  pub fn new(parent: &'p dyn ParsedEvent, element: &Value) -> NestedEvent<'p> {
    NestedEvent {
      parent,
      raw: element.to_string(),
      structure: as_structure(element.clone())
    }
  }
}

impl<'p> fmt::Debug for NestedEvent<'p> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("NestedEvent")
      .field("raw", &self.raw)
      .field("structure", &self.structure)
      .finish()
  }
}

impl<'p> ParsedEvent for NestedEvent<'p> {
  fn raw(&self) -> &str {
    &self.raw
  }

  fn json(&self) -> Option<&Value> {
    self.structure.as_ref()
  }

  fn partition_context(&self) -> Option<&Map<String, Value>> {
    self.parent.partition_context()
  }

  fn system_properties(&self) -> Option<&Map<String, Value>> {
    self.parent.system_properties()
  }

  fn properties(&self) -> Option<&Map<String, Value>> {
    self.parent.properties()
  }

  fn enqueued_time(&self) -> Option<DateTime<Utc>> {
    self.parent.enqueued_time()
  }

  fn offset(&self) -> Option<&str> {
    self.parent.offset()
  }
}
