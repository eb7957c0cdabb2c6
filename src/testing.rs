// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

//! Shared fixtures for unit tests

use chrono::prelude::*;
use serde_json::{json, Map, Value};

use crate::assemble::FixedProvenance;
use crate::config::{
  MapSource, CONTAINER_APPNAME_ANNOTATION, CONTAINER_HOSTNAME_ANNOTATION,
  SYSLOG_PROCESS_NAME
};
use crate::event::{Event, EventMetadata};

pub static PLACEHOLDER_RESOURCE_ID: &str = "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/{resourceProviderNamespace}/{resourceType}/{resourceName}";

pub static PLACEHOLDER_HOSTNAME: &str = "md5-0ded52ef915af563e25778bf26b0f129-resourceName";

pub static WORKSPACE_RESOURCE_ID: &str = "/subscriptions/ce5ef585-60c3-4e37-a326-7bb6df0e5750/resourcegroups/res-g1/providers/pro-v1/workspaces/n-n-law";

pub static WORKSPACE_HOSTNAME: &str = "md5-35166b001e9028e0085c05498ffd1235-n-n-law";

fn object(value: Value) -> Map<String, Value> {
  match value {
    Value::Object(o) => o,
    _ => panic!("fixture is not an object")
  }
}

/// Metadata as a fully populated transport would deliver it
pub fn full_metadata() -> EventMetadata {
  EventMetadata {
    partition_context: Some(object(json!({
      "FullyQualifiedNamespace": "fully-qualified-namespace",
      "EventHubName": "event-hub-name",
      "PartitionId": "123",
      "ConsumerGroup": "consumer-group"
    }))),
    system_properties: Some(object(json!({
      "SequenceNumber": "12345678900",
      "PartitionKey": "456"
    }))),
    properties: Some(object(json!({
      "null": "important-null-value",
      "prop-key": "prop-value",
      "important-key": null
    }))),
    enqueued_time: Some(Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap()),
    offset: Some("0".to_string())
  }
}

pub fn event(payload: Value) -> Event {
  Event::new(payload.to_string(), full_metadata())
}

pub fn config() -> MapSource {
  MapSource::from(hashmap!{
    CONTAINER_HOSTNAME_ANNOTATION.to_string() => "example.com/hostname".to_string(),
    CONTAINER_APPNAME_ANNOTATION.to_string() => "example.com/appname".to_string(),
    SYSLOG_PROCESS_NAME.to_string() => "audit-forwarder".to_string()
  })
}

pub fn provenance() -> FixedProvenance {
  FixedProvenance {
    now: Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap(),
    unique_id: "00000000-0000-4000-8000-000000000000".to_string(),
    hostname: "collector-01".to_string()
  }
}

pub fn app_insight() -> Value {
  json!({
    "Type": "AppTraces",
    "_ResourceId": PLACEHOLDER_RESOURCE_ID,
    "AppRoleName": "app-role-name",
    "TimeGenerated": "2020-01-01T01:02:34.567891Z",
    "Message": "request handled",
    "SeverityLevel": 1
  })
}

pub fn container() -> Value {
  json!({
    "Type": "ContainerLogV2",
    "_ResourceId": PLACEHOLDER_RESOURCE_ID,
    "TimeGenerated": "2020-01-01T01:23:34.567Z",
    "Computer": "aks-nodepool-01",
    "ContainerId": "container-id",
    "ContainerName": "container-name",
    "PodName": "pod-name",
    "PodNamespace": "pod-namespace",
    "LogSource": "stdout",
    "LogMessage": "hello from the container",
    "KubernetesMetadata": {
      "podAnnotations": {
        "example.com/hostname": "HOST-NAME",
        "example.com/appname": "APP-NAME"
      }
    }
  })
}

pub fn istio_ingress() -> Value {
  let mut value = container();
  value["PodNamespace"] = json!("aks-istio-ingress-pod-namespace");
  value
}

pub fn syslog() -> Value {
  json!({
    "Type": "Syslog",
    "_Internal_WorkspaceResourceId": WORKSPACE_RESOURCE_ID,
    "ProcessName": "audit-forwarder",
    "Facility": "local0",
    "SyslogMessage": "session 12345678-aaaa-bbbb-cccc-1234567890ab opened for user",
    "TimeGenerated": "2025-02-18T13:47:27.064Z"
  })
}

pub fn function_app() -> Value {
  json!({
    "Type": "FunctionAppLogs",
    "_ResourceId": PLACEHOLDER_RESOURCE_ID,
    "AppName": "app-name",
    "Category": "Function.Host",
    "TimeGenerated": "2020-01-01T01:02:34.567Z"
  })
}

pub fn pipeline_run() -> Value {
  json!({
    "Type": "ADFPipelineRun",
    "_ResourceId": PLACEHOLDER_RESOURCE_ID,
    "PipelineName": "MainPipeline",
    "Status": "Succeeded",
    "TimeGenerated": "2020-01-01T01:02:34.567Z"
  })
}

pub fn activity_run() -> Value {
  json!({
    "Type": "ADFActivityRun",
    "_ResourceId": PLACEHOLDER_RESOURCE_ID,
    "PipelineName": "Pipeline-1",
    "ActivityName": "Copy",
    "TimeGenerated": "2020-01-01T01:02:34.567Z"
  })
}

pub fn custom_log() -> Value {
  json!({
    "Type": "Application_CL",
    "_Internal_WorkspaceResourceId": WORKSPACE_RESOURCE_ID,
    "_ResourceId": PLACEHOLDER_RESOURCE_ID,
    "FilePath": "/xxxxx.log",
    "RawData": "line of text",
    "TimeGenerated": "2020-01-01T01:02:34.567Z"
  })
}

pub fn audit_custom_log() -> Value {
  json!({
    "Type": "Platform_AUDIT_CL",
    "_Internal_WorkspaceResourceId": WORKSPACE_RESOURCE_ID,
    "data": {
      "resourceName": "env=prod=production-env/resource"
    },
    "TimeGenerated": "2020-01-01T01:02:34.567Z"
  })
}

pub fn postgresql() -> Value {
  json!({
    "AppType": "PostgreSQL",
    "category": "PostgreSQLLogs",
    "operationName": "LogEvent",
    "properties": {
      "timestamp": "2020-10-01 11:59:26.256 UTC",
      "errorLevel": "LOG",
      "message": "2020-10-01 11:59:26 UTC-12abcd3e.4f5678-user=user012,db=dbase_maintenance,app=[unknown],client=127.0.0.1LOG:  AUDIT: SESSION,4,1,WRITE,INSERT"
    },
    "resourceId": "/SUBSCRIPTIONS/uuid/RESOURCEGROUPS/ab-cd-efgh-ijklmn-xx-DEV-01/PROVIDERS/postgres-db/FLEXIBLESERVERS/efgh-ijklmn-xx-DEV-01",
    "time": "2020-10-01T11:59:26.256Z",
    "LogicalServerName": "efgh-ijklmn-xx-DEV-01"
  })
}
