// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use serde_json::{Map, Value};

use crate::error::{Result, UnknownLogSourceSnafu};
use crate::event::ParsedEvent;
use crate::record::SdElement;
use crate::util::{keys, ResourceId};
use crate::wire::{app_name, hostname};
use super::common::{self, ORIGIN_ELEMENT};
use super::types::SchemaAdapter;

/// The `origin@48577` element shared by all container log schemas
fn container_origin(obj: &Map<String, Value>) -> Result<SdElement> {
  let resource_id = ResourceId::new(keys::string(obj, "_ResourceId")?);

  Ok(SdElement::new(ORIGIN_ELEMENT)
    .param("subscription", resource_id.subscription_id()?)
    .param("clusterName", resource_id.resource_name()?)
    .param("namespace", keys::string(obj, "PodNamespace")?)
    .param("pod", keys::string(obj, "PodName")?)
    .param("containerId", keys::string(obj, "ContainerId")?))
}

fn log_source_suffix(log_source: &str) -> Result<char> {
  match log_source {
    "stdout" => Ok('o'),
    "stderr" => Ok('e'),
    other => UnknownLogSourceSnafu { log_source: other }.fail()
  }
}

/// Kubernetes container output (`Type: ContainerLogV2`)
///
/// Hostname and app name are taken from pod annotations chosen by
/// configuration. The annotations are operator supplied, so the hostname is
/// validated strictly rather than repaired.
pub struct Container<'e> {
  event: &'e dyn ParsedEvent,
  hostname_key: String,
  app_name_key: String,
  separator: String
}

impl<'e> Container<'e> {
  pub fn new<S: Into<String>>(
    event: &'e dyn ParsedEvent,
    hostname_key: S,
    app_name_key: S,
    separator: S
  ) -> Container<'e> {
    Container {
      event,
      hostname_key: hostname_key.into(),
      app_name_key: app_name_key.into(),
      separator: separator.into()
    }
  }

  fn annotation(&self, key: &str) -> Result<&'e str> {
    let obj = common::root(self.event)?;
    let metadata = keys::object(obj, "KubernetesMetadata")?;
    let annotations = keys::object(metadata, "podAnnotations")?;

    keys::string(annotations, key)
  }
}

impl<'e> SchemaAdapter for Container<'e> {
  fn event_type(&self) -> &'static str {
    "ContainerType"
  }

  fn event(&self) -> &dyn ParsedEvent {
    self.event
  }

  fn hostname(&self) -> Result<String> {
    let value = self.annotation(&self.hostname_key)?;
    hostname::validate(value)?;

    Ok(value.to_string())
  }

  fn app_name(&self) -> Result<String> {
    let obj = common::root(self.event)?;
    let suffix = log_source_suffix(keys::string(obj, "LogSource")?)?;
    let value = self.annotation(&self.app_name_key)?;

    app_name::validate(&format!("{}{}{}", value, self.separator, suffix))
  }

  fn timestamp(&self) -> Result<i64> {
    common::time_generated(common::root(self.event)?)
  }

  fn origin(&self) -> Result<Option<SdElement>> {
    container_origin(common::root(self.event)?).map(Some)
  }
}

/// Container output of the istio ingress gateway, whose pods carry no
/// annotations; the namespace doubles as hostname.
pub struct IstioIngress<'e> {
  event: &'e dyn ParsedEvent
}

impl<'e> IstioIngress<'e> {
  pub fn new(event: &'e dyn ParsedEvent) -> IstioIngress<'e> {
    IstioIngress { event }
  }
}

impl<'e> SchemaAdapter for IstioIngress<'e> {
  fn event_type(&self) -> &'static str {
    "IstioIngressContainerType"
  }

  fn event(&self) -> &dyn ParsedEvent {
    self.event
  }

  fn hostname(&self) -> Result<String> {
    let namespace = keys::string(common::root(self.event)?, "PodNamespace")?;
    hostname::validate(namespace)?;

    Ok(namespace.to_string())
  }

  fn app_name(&self) -> Result<String> {
    Ok("istio-ingress".to_string())
  }

  fn timestamp(&self) -> Result<i64> {
    common::time_generated(common::root(self.event)?)
  }

  fn origin(&self) -> Result<Option<SdElement>> {
    container_origin(common::root(self.event)?).map(Some)
  }
}
