// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

/// Lowercase hex MD5 digest of the UTF-8 bytes of `s`, always 32 characters
pub fn md5_hex(s: &str) -> String {
  format!("{:x}", md5::compute(s.as_bytes()))
}
