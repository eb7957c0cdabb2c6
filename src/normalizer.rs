// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use snafu::ResultExt;

use crate::assemble::{assemble, Provenance};
use crate::config::ConfigSource;
use crate::error::{RecordSnafu, Result};
use crate::event::ParsedEvent;
use crate::record::CanonicalLogRecord;
use crate::schema::{classify, Schema};

/// Classifies events and builds their canonical records
///
/// A batch event yields one record per embedded record, in order; if any of
/// them fails the whole batch fails and the error carries its index.
pub struct Normalizer<'c> {
  config: &'c dyn ConfigSource
}

impl<'c> Normalizer<'c> {
  pub fn new(config: &'c dyn ConfigSource) -> Normalizer<'c> {
    Normalizer { config }
  }

  pub fn normalize(
    &self, event: &dyn ParsedEvent, provenance: &dyn Provenance
  ) -> Result<Vec<CanonicalLogRecord>> {
    match classify(event, self.config)? {
      Schema::Records(records) => {
        let mut output = Vec::new();

        for (index, nested) in records.events()?.iter().enumerate() {
          let normalized = self.normalize(nested, provenance)
            .context(RecordSnafu { index })?;

          output.extend(normalized);
        }

        Ok(output)
      },
      schema => match schema.adapter() {
        Some(adapter) => Ok(vec![assemble(adapter, provenance)?]),
        None => Ok(Vec::new())
      }
    }
  }
}
