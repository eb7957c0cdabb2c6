// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use std::collections::HashMap;

use chrono::prelude::*;
use dtparse::Parser;

/// Convert a datetime to UTC if an offset is available
fn normalize_datetime(
  datetime: &NaiveDateTime, offset: Option<FixedOffset>
) -> DateTime<Utc> {
  if let Some(offset) = offset {
    if let Some(local_fixed) = offset.from_local_datetime(datetime).earliest() {
      return Utc.from_utc_datetime(&local_fixed.naive_utc());
    }
  }

  // transports report enqueue times in utc, so assume it when unspecified
  Utc.from_utc_datetime(datetime)
}

fn parse_freeform(s: &str) -> Option<DateTime<Utc>> {
  let parser = Parser::default();

  let res = parser.parse(
    s,
    None, // dayfirst
    None, // yearfirst
    false, // fuzzy
    false, // fuzzy_with_tokens
    None, // default
    false, // ignoretz
    &HashMap::new() // tzinfos
  ).ok()?;

  Some(normalize_datetime(&res.0, res.1))
}

/// Parses a transport enqueue time
///
/// RFC 3339 and offset-less ISO 8601 are tried first, as nearly all transports
/// send one of those, before falling back to dtparse.
pub fn parse_enqueued_time(s: &str) -> Option<DateTime<Utc>> {
  if let Ok(d) = DateTime::parse_from_rfc3339(s) {
    return Some(normalize_datetime(&d.naive_local(), Some(*d.offset())));
  }

  if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
    return Some(normalize_datetime(&naive, None));
  }

  parse_freeform(s)
}

#[cfg(test)]
mod tests {
  use super::*;

  use spectral::prelude::*;

  fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
  }

  #[test]
  fn test_rfc3339() {
    assert_that!(parse_enqueued_time("2010-01-01T02:00:00+02:00"))
      .is_some()
      .is_equal_to(utc("2010-01-01T00:00:00Z"));
  }

  #[test]
  fn test_naive_is_utc() {
    assert_that!(parse_enqueued_time("2010-01-01T00:00:00"))
      .is_some()
      .is_equal_to(utc("2010-01-01T00:00:00Z"));
  }

  #[test]
  fn test_freeform() {
    assert_that!(parse_enqueued_time("2010-01-01 00:00:00"))
      .is_some()
      .is_equal_to(utc("2010-01-01T00:00:00Z"));
  }

  #[test]
  fn test_garbage() {
    assert_that!(parse_enqueued_time("not a time")).is_none();
  }
}
