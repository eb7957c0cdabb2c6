// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use snafu::ensure;

use crate::error::{AppNameBadCharSnafu, AppNameEmptySnafu, AppNameTooLongSnafu, Result};
use crate::util::md5_hex;
use super::is_print_us_ascii;

pub const MAX_LENGTH: usize = 48;

static HASH_PREFIX: &str = "md5-";

/// Replaces an app name longer than [`MAX_LENGTH`] with `md5-<hex digest>` of
/// the full name, otherwise returns it as-is.
pub fn hashed(app_name: &str) -> String {
  if app_name.chars().count() > MAX_LENGTH {
    format!("{}{}", HASH_PREFIX, md5_hex(app_name))
  } else {
    app_name.to_string()
  }
}

/// Checks an app name against the RFC 5424 APP-NAME rule, 1 to 48 printable
/// US-ASCII characters, without rewriting it
pub fn check(app_name: &str) -> Result<&str> {
  let length = app_name.chars().count();

  ensure!(length > 0, AppNameEmptySnafu);
  ensure!(length <= MAX_LENGTH, AppNameTooLongSnafu { length });

  if let Some(c) = app_name.chars().find(|c| !is_print_us_ascii(*c)) {
    return AppNameBadCharSnafu { character: c }.fail();
  }

  Ok(app_name)
}

/// Applies the overflow hash and then checks the result
pub fn validate(app_name: &str) -> Result<String> {
  let name = hashed(app_name);
  check(&name)?;

  Ok(name)
}

/// Drops any character that is not printable US-ASCII and then validates
pub fn legalize(app_name: &str) -> Result<String> {
  let printable: String = app_name.chars()
    .filter(|c| is_print_us_ascii(*c))
    .collect();

  validate(&printable)
}
