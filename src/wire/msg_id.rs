// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use snafu::ensure;

use crate::error::{MsgIdBadCharSnafu, MsgIdTooLongSnafu, Result};
use super::is_print_us_ascii;

pub const MAX_LENGTH: usize = 32;

/// Checks a message id against the RFC 5424 `MSGID` rule
///
/// An empty id is accepted and rendered as the nil value.
pub fn check(msg_id: &str) -> Result<&str> {
  let length = msg_id.chars().count();
  ensure!(length <= MAX_LENGTH, MsgIdTooLongSnafu { length });

  if let Some(c) = msg_id.chars().find(|c| !is_print_us_ascii(*c)) {
    return MsgIdBadCharSnafu { character: c }.fail();
  }

  Ok(msg_id)
}
