// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

//! Pieces shared by every schema adapter

use chrono::SecondsFormat;
use serde_json::{Map, Value};

use crate::error::{NotJsonObjectSnafu, NotJsonSnafu, Result};
use crate::event::ParsedEvent;
use crate::record::SdElement;
use crate::util::{ascii_only, keys, md5_hex, ResourceId};
use crate::wire::{hostname, timestamp};

pub static PARTITION_ELEMENT: &str = "aer_02_partition@48577";
pub static EVENT_ELEMENT: &str = "aer_02_event@48577";
pub static TIMESTAMP_SOURCE_ELEMENT: &str = "aer_02@48577";
pub static MARKER_ELEMENT: &str = "nlf_01@48577";
pub static ORIGIN_ELEMENT: &str = "origin@48577";

/// The event's root JSON object
pub fn root(event: &dyn ParsedEvent) -> Result<&Map<String, Value>> {
  match event.json() {
    Some(Value::Object(obj)) => Ok(obj),
    Some(_) => NotJsonObjectSnafu.fail(),
    None => NotJsonSnafu.fail()
  }
}

/// Reads a metadata value as a string, empty if the map or key is absent
fn metadata_string(map: Option<&Map<String, Value>>, key: &str) -> String {
  match map.and_then(|m| m.get(key)) {
    Some(Value::String(s)) => s.clone(),
    Some(other) => other.to_string(),
    None => String::new()
  }
}

pub fn msg_id(event: &dyn ParsedEvent) -> String {
  metadata_string(event.system_properties(), "SequenceNumber")
}

/// Parses the `TimeGenerated` field common to most schemas
pub fn time_generated(obj: &Map<String, Value>) -> Result<i64> {
  timestamp::epoch_millis(keys::string(obj, "TimeGenerated")?)
}

/// `md5-<digest of resource id>-<resource name>`, repaired to a valid hostname
pub fn resource_hostname(resource_id: &str) -> Result<String> {
  let name = ResourceId::new(resource_id).resource_name()?;

  Ok(hostname::repair(&format!(
    "md5-{}-{}", md5_hex(resource_id), ascii_only(name)
  )))
}

fn enqueued_time(event: &dyn ParsedEvent) -> String {
  event.enqueued_time()
    .map(|t| t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    .unwrap_or_default()
}

fn properties_json(event: &dyn ParsedEvent) -> String {
  match event.properties() {
    Some(props) => Value::Object(props.clone()).to_string(),
    None => "{}".to_string()
  }
}

/// Transport provenance: partition context, enqueue details and the source of
/// the record timestamp
pub fn provenance_elements(event: &dyn ParsedEvent) -> Vec<SdElement> {
  let partition = event.partition_context();
  let system = event.system_properties();
  let time = enqueued_time(event);

  let timestamp_source = if time.is_empty() {
    "generated"
  } else {
    "timeEnqueued"
  };

  vec![
    SdElement::new(PARTITION_ELEMENT)
      .param("fully_qualified_namespace", metadata_string(partition, "FullyQualifiedNamespace"))
      .param("eventhub_name", metadata_string(partition, "EventHubName"))
      .param("partition_id", metadata_string(partition, "PartitionId"))
      .param("consumer_group", metadata_string(partition, "ConsumerGroup")),

    SdElement::new(EVENT_ELEMENT)
      .param("offset", event.offset().unwrap_or(""))
      .param("enqueued_time", time)
      .param("partition_key", metadata_string(system, "PartitionKey"))
      .param("properties", properties_json(event)),

    SdElement::new(TIMESTAMP_SOURCE_ELEMENT)
      .param("timestamp_source", timestamp_source)
  ]
}

pub fn marker(event_type: &str) -> SdElement {
  SdElement::new(MARKER_ELEMENT).param("eventType", event_type)
}

pub fn sd_elements(
  event: &dyn ParsedEvent, origin: Option<SdElement>, event_type: &str
) -> Vec<SdElement> {
  let mut elements = provenance_elements(event);
  elements.extend(origin);
  elements.push(marker(event_type));

  elements
}

#[cfg(test)]
mod tests {
  use super::*;

  use spectral::prelude::*;

  use crate::event::Event;
  use crate::testing::full_metadata;

  fn element<'a>(elements: &'a [SdElement], id: &str) -> &'a SdElement {
    elements.iter().find(|e| e.id == id).unwrap()
  }

  #[test]
  fn test_root() {
    assert_that!(root(&Event::bare("{}"))).is_ok();
    assert_that!(root(&Event::bare("[]")).unwrap_err().to_string())
      .is_equal_to("not a JSON object".to_string());
    assert_that!(root(&Event::bare("nope")).unwrap_err().to_string())
      .is_equal_to("not a JSON structure".to_string());
  }

  #[test]
  fn test_resource_hostname() {
    assert_that!(resource_hostname(
      "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/{resourceProviderNamespace}/{resourceType}/{resourceName}"
    )).is_ok_containing(
      "md5-0ded52ef915af563e25778bf26b0f129-resourceName".to_string()
    );

    assert_that!(resource_hostname("/too/short")).is_err();
  }

  #[test]
  fn test_provenance_with_metadata() {
    let event = Event::new("{}", full_metadata());
    let elements = provenance_elements(&event);

    let partition = element(&elements, PARTITION_ELEMENT);
    assert_that!(partition.get("fully_qualified_namespace"))
      .is_equal_to(Some("fully-qualified-namespace"));
    assert_that!(partition.get("eventhub_name")).is_equal_to(Some("event-hub-name"));
    assert_that!(partition.get("partition_id")).is_equal_to(Some("123"));
    assert_that!(partition.get("consumer_group")).is_equal_to(Some("consumer-group"));

    let details = element(&elements, EVENT_ELEMENT);
    assert_that!(details.get("offset")).is_equal_to(Some("0"));
    assert_that!(details.get("enqueued_time")).is_equal_to(Some("2010-01-01T00:00:00Z"));
    assert_that!(details.get("partition_key")).is_equal_to(Some("456"));
    assert_that!(details.get("properties")).is_equal_to(Some(
      "{\"null\":\"important-null-value\",\"prop-key\":\"prop-value\",\"important-key\":null}"
    ));

    assert_that!(element(&elements, TIMESTAMP_SOURCE_ELEMENT).get("timestamp_source"))
      .is_equal_to(Some("timeEnqueued"));
    assert_that!(msg_id(&event)).is_equal_to("12345678900".to_string());
  }

  #[test]
  fn test_provenance_with_stubs() {
    let event = Event::bare("{}");
    let elements = provenance_elements(&event);

    let partition = element(&elements, PARTITION_ELEMENT);
    assert_that!(partition.get("fully_qualified_namespace")).is_equal_to(Some(""));
    assert_that!(partition.get("consumer_group")).is_equal_to(Some(""));

    let details = element(&elements, EVENT_ELEMENT);
    assert_that!(details.get("offset")).is_equal_to(Some(""));
    assert_that!(details.get("enqueued_time")).is_equal_to(Some(""));
    assert_that!(details.get("properties")).is_equal_to(Some("{}"));

    assert_that!(element(&elements, TIMESTAMP_SOURCE_ELEMENT).get("timestamp_source"))
      .is_equal_to(Some("generated"));
    assert_that!(msg_id(&event)).is_equal_to(String::new());
  }

  #[test]
  fn test_sd_elements_order() {
    let event = Event::bare("{}");
    let origin = SdElement::new(ORIGIN_ELEMENT).param("_ResourceId", "/x");
    let elements = sd_elements(&event, Some(origin), "CLType");

    let ids: Vec<&str> = elements.iter().map(|e| e.id.as_str()).collect();
    assert_that!(ids).is_equal_to(vec![
      PARTITION_ELEMENT, EVENT_ELEMENT, TIMESTAMP_SOURCE_ELEMENT,
      ORIGIN_ELEMENT, MARKER_ELEMENT
    ]);
    assert_that!(elements[4].get("eventType")).is_equal_to(Some("CLType"));
  }
}
