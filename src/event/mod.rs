// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

mod time;
mod types;

use chrono::prelude::*;
use serde_json::{Map, Value};

pub use time::parse_enqueued_time;
pub use types::{Envelope, Event, EventMetadata, NestedEvent};

/// A single inbound event as delivered by the transport layer
///
/// Metadata accessors return `None` when the transport supplied nothing at
/// all, which is distinct from an empty map.
pub trait ParsedEvent {
  /// The event exactly as received
  fn raw(&self) -> &str;

  /// The parsed JSON tree if the event is a JSON structure (object or array)
  fn json(&self) -> Option<&Value>;

  fn is_json_structure(&self) -> bool {
    self.json().is_some()
  }

  fn partition_context(&self) -> Option<&Map<String, Value>>;

  fn system_properties(&self) -> Option<&Map<String, Value>>;

  fn properties(&self) -> Option<&Map<String, Value>>;

  fn enqueued_time(&self) -> Option<DateTime<Utc>>;

  fn offset(&self) -> Option<&str>;
}
