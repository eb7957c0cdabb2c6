// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

//! Hostname validation and repair
//!
//! Two separate operations exist: [`validate`] rejects anything that is not
//! already a well formed hostname and is used for operator-supplied values,
//! while [`repair`] salvages machine-derived values (e.g. resource id hashes)
//! that are almost, but not quite, wire compatible.

use snafu::ensure;

use crate::error::{
  HostnameBadCharSnafu, HostnameBadEndSnafu, HostnameBadStartSnafu,
  HostnameEmptySnafu, HostnameTooLongSnafu, Result
};
use super::is_print_us_ascii;

pub const MAX_LENGTH: usize = 255;

fn is_edge(c: char) -> bool {
  c == '.' || c == '-'
}

fn is_allowed(c: char) -> bool {
  c.is_ascii_alphanumeric() || is_edge(c)
}

/// Strictly validates a hostname against the restricted charset
/// (`A-Z a-z 0-9 . -`), returning it unchanged if valid.
///
/// The first character may not be a digit, '.' or '-', and the last may not be
/// '.' or '-'. Empty hostnames are rejected.
pub fn validate(hostname: &str) -> Result<&str> {
  let length = hostname.chars().count();

  ensure!(length > 0, HostnameEmptySnafu);
  ensure!(length <= MAX_LENGTH, HostnameTooLongSnafu { length });

  for (i, c) in hostname.chars().enumerate() {
    if i == 0 && (c.is_ascii_digit() || is_edge(c)) {
      return HostnameBadStartSnafu { character: c }.fail();
    }

    if i == length - 1 && is_edge(c) {
      return HostnameBadEndSnafu { character: c }.fail();
    }

    ensure!(is_allowed(c), HostnameBadCharSnafu { character: c });
  }

  Ok(hostname)
}

/// Validates a hostname against the broad RFC 5424 charset: 1 to 255
/// printable US-ASCII characters with no edge restrictions.
pub fn validate_printable(hostname: &str) -> Result<&str> {
  let length = hostname.chars().count();

  ensure!(length > 0, HostnameEmptySnafu);
  ensure!(length <= MAX_LENGTH, HostnameTooLongSnafu { length });

  if let Some(c) = hostname.chars().find(|c| !is_print_us_ascii(*c)) {
    return HostnameBadCharSnafu { character: c }.fail();
  }

  Ok(hostname)
}

/// Builds the longest valid hostname prefix out of `hostname`.
///
/// Leading digits, dots and dashes are skipped, other disallowed characters are
/// dropped, and dots/dashes are held back until a following letter or digit
/// shows they are not trailing. Output never exceeds [`MAX_LENGTH`] and never
/// ends in '.' or '-'. May return an empty string if nothing is salvageable.
pub fn repair(hostname: &str) -> String {
  let mut out = String::with_capacity(hostname.len().min(MAX_LENGTH));
  let mut pending = String::new();

  for c in hostname.chars() {
    if out.len() == MAX_LENGTH {
      break;
    }

    if out.is_empty() && (c.is_ascii_digit() || is_edge(c)) {
      continue;
    }

    if is_edge(c) {
      pending.push(c);
    } else if c.is_ascii_alphanumeric() {
      // leave room for `c` itself, everything buffered is ascii
      pending.truncate(MAX_LENGTH - out.len() - 1);
      out.push_str(&pending);
      pending.clear();
      out.push(c);
    }
  }

  out
}
