// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use std::fmt;

use serde::Serialize;

/// RFC 5424 facility codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facility {
  Kern = 0,
  User = 1,
  Mail = 2,
  Daemon = 3,
  Auth = 4,
  Syslog = 5,
  Lpr = 6,
  News = 7,
  Uucp = 8,
  Cron = 9,
  Authpriv = 10,
  Ftp = 11,
  Ntp = 12,
  Audit = 13,
  Alert = 14,
  Clock = 15,
  Local0 = 16,
  Local1 = 17,
  Local2 = 18,
  Local3 = 19,
  Local4 = 20,
  Local5 = 21,
  Local6 = 22,
  Local7 = 23
}

/// RFC 5424 severity codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Emergency = 0,
  Alert = 1,
  Critical = 2,
  Error = 3,
  Warning = 4,
  Notice = 5,
  Informational = 6,
  Debug = 7
}

/// The PRI part of an RFC 5424 header
pub fn priority(facility: Facility, severity: Severity) -> u8 {
  (facility as u8) * 8 + severity as u8
}

/// A named structured-data element
///
/// Parameters keep insertion order and may repeat a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SdElement {
  pub id: String,
  pub params: Vec<(String, String)>
}

impl SdElement {
  pub fn new<S: Into<String>>(id: S) -> SdElement {
    SdElement {
      id: id.into(),
      params: Vec::new()
    }
  }

  pub fn param<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> SdElement {
    self.params.push((name.into(), value.into()));
    self
  }

  /// The value of the first parameter with the given name
  pub fn get(&self, name: &str) -> Option<&str> {
    self.params.iter()
      .find(|(k, _)| k == name)
      .map(|(_, v)| v.as_str())
  }
}

fn escape_param_value(value: &str) -> String {
  let mut escaped = String::with_capacity(value.len());

  for c in value.chars() {
    if c == '"' || c == '\\' || c == ']' {
      escaped.push('\\');
    }

    escaped.push(c);
  }

  escaped
}

impl fmt::Display for SdElement {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "[{}", self.id)?;

    for (name, value) in &self.params {
      write!(f, " {}=\"{}\"", name, escape_param_value(value))?;
    }

    f.write_str("]")
  }
}
