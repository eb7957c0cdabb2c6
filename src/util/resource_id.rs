// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use snafu::ensure;

use crate::error::{MalformedResourceIdSnafu, Result};

/// Number of '/'-delimited segments in a well formed resource id, counting the
/// empty segment before the leading slash
pub const SEGMENTS: usize = 9;

/// A cloud resource path of the form
/// `/subscriptions/{sub}/resourceGroups/{group}/providers/{ns}/{type}/{name}`
///
/// The path is never normalized; every accessor re-checks the segment count and
/// fails the same way if it is wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId<'a> {
  raw: &'a str
}

impl<'a> ResourceId<'a> {
  pub fn new(raw: &'a str) -> ResourceId<'a> {
    ResourceId { raw }
  }

  pub fn as_str(&self) -> &'a str {
    self.raw
  }

  fn segment(&self, index: usize) -> Result<&'a str> {
    let segments: Vec<&'a str> = self.raw.split('/').collect();

    ensure!(segments.len() == SEGMENTS, MalformedResourceIdSnafu {
      resource_id: self.raw,
      segments: segments.len()
    });

    Ok(segments[index])
  }

  pub fn subscription_id(&self) -> Result<&'a str> {
    self.segment(2)
  }

  pub fn resource_group_name(&self) -> Result<&'a str> {
    self.segment(4)
  }

  pub fn resource_provider_namespace(&self) -> Result<&'a str> {
    self.segment(6)
  }

  pub fn resource_type(&self) -> Result<&'a str> {
    self.segment(7)
  }

  pub fn resource_name(&self) -> Result<&'a str> {
    self.segment(8)
  }
}
