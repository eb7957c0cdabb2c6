// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

//! Sanitizers that make extracted values safe for the RFC 5424 wire format

pub mod app_name;
pub mod hostname;
pub mod msg_id;
pub mod timestamp;

/// Printable US-ASCII as defined by RFC 5424 (`%d33-126`)
pub fn is_print_us_ascii(c: char) -> bool {
  ('!'..='~').contains(&c)
}
