// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use chrono::prelude::*;
use snafu::ResultExt;

use crate::error::{InvalidTimestampSnafu, Result};

/// Parses an extended ISO 8601 timestamp with any number of fractional digits
/// into epoch milliseconds. Sub-millisecond digits are truncated, never rounded.
///
/// Numeric offsets are accepted and normalized to UTC.
pub fn epoch_millis(timestamp: &str) -> Result<i64> {
  let parsed = DateTime::parse_from_rfc3339(timestamp)
    .context(InvalidTimestampSnafu { value: timestamp })?;

  Ok(parsed.timestamp_millis())
}

/// Formats epoch milliseconds as an RFC 5424 timestamp with millisecond
/// precision, or the NILVALUE if out of range
pub fn format_millis(millis: i64) -> String {
  match Utc.timestamp_millis_opt(millis).single() {
    Some(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
    None => "-".to_string()
  }
}
