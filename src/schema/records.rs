// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use crate::error::Result;
use crate::event::{NestedEvent, ParsedEvent};
use crate::util::keys;
use super::common;

/// A batch event: an object whose `records` array holds complete events of
/// any other schema
pub struct Records<'e> {
  event: &'e dyn ParsedEvent
}

impl<'e> Records<'e> {
  pub fn new(event: &'e dyn ParsedEvent) -> Records<'e> {
    Records { event }
  }

  /// The embedded records, in order, each inheriting this event's metadata
  pub fn events(&self) -> Result<Vec<NestedEvent<'e>>> {
    let obj = common::root(self.event)?;

    Ok(keys::array(obj, "records")?
      .iter()
      .map(|element| NestedEvent::new(self.event, element))
      .collect())
  }
}
