// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

pub mod hash;
pub mod keys;
pub mod resource_id;

pub use hash::md5_hex;
pub use resource_id::ResourceId;

/// Removes every non-ASCII character from the given string
pub fn ascii_only(s: &str) -> String {
  s.chars().filter(char::is_ascii).collect()
}
