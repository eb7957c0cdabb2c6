// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use std::collections::HashMap;
use std::env;
use std::error::Error as StdError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::str::FromStr;

use serde::Deserialize;
use shellexpand;
use snafu::{OptionExt, ResultExt};
use structopt::StructOpt;

use crate::error::{
  ConfigDeserializeSnafu, ConfigExpandSnafu, ConfigReadSnafu, Error,
  MissingConfigSnafu, Result
};
use crate::renderer;

/// pod annotation holding the hostname of container log events
pub static CONTAINER_HOSTNAME_ANNOTATION: &str = "containerlog.hostname.annotation";

/// pod annotation holding the app name of container log events
pub static CONTAINER_APPNAME_ANNOTATION: &str = "containerlog.appname.annotation";

/// separator placed between a container app name and its log source suffix
pub static CONTAINER_APPNAME_SEPARATOR: &str = "containerlog.appname.separator";

/// process name that syslog events must carry to be accepted
pub static SYSLOG_PROCESS_NAME: &str = "syslogtype.processname";

pub static DEFAULT_APPNAME_SEPARATOR: &str = ":";

/// A key/value configuration lookup, shared by every thread normalizing events
pub trait ConfigSource: Send + Sync {
  /// Looks up `key`, returning `Ok(None)` if it is simply not set
  fn lookup(&self, key: &str) -> Result<Option<String>>;

  /// Looks up a required key
  fn source(&self, key: &str) -> Result<String> {
    self.lookup(key)?.context(MissingConfigSnafu { key })
  }

  /// Looks up an optional key, falling back to `default` if unset
  fn source_or(&self, key: &str, default: &str) -> Result<String> {
    Ok(self.lookup(key)?.unwrap_or_else(|| default.to_string()))
  }
}

/// Reads keys from the process environment
///
/// `containerlog.hostname.annotation` is read from
/// `CONTAINERLOG_HOSTNAME_ANNOTATION`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl EnvSource {
  pub fn var_name(key: &str) -> String {
    key.to_uppercase().replace('.', "_")
  }
}

impl ConfigSource for EnvSource {
  fn lookup(&self, key: &str) -> Result<Option<String>> {
    Ok(env::var(EnvSource::var_name(key)).ok())
  }
}

/// An in-memory set of keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSource {
  values: HashMap<String, String>
}

impl From<HashMap<String, String>> for MapSource {
  fn from(values: HashMap<String, String>) -> MapSource {
    MapSource { values }
  }
}

impl ConfigSource for MapSource {
  fn lookup(&self, key: &str) -> Result<Option<String>> {
    Ok(self.values.get(key).cloned())
  }
}

/// Keys loaded from a flat YAML mapping, e.g.:
///
/// ```yaml
/// containerlog.hostname.annotation: example.com/hostname
/// containerlog.appname.annotation: example.com/appname
/// syslogtype.processname: audit-forwarder
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct FileSource {
  values: HashMap<String, String>
}

impl FileSource {
  pub fn from_reader<R: Read>(path: &str, reader: R) -> Result<FileSource> {
    serde_yaml::from_reader(reader).context(ConfigDeserializeSnafu { path })
  }
}

impl FromStr for FileSource {
  type Err = Error;

  fn from_str(path: &str) -> Result<Self, Self::Err> {
    let expanded_path = shellexpand::full(path)
      .context(ConfigExpandSnafu { path })?;
    let file = File::open(&*expanded_path)
      .context(ConfigReadSnafu { path })?;

    FileSource::from_reader(path, BufReader::new(file))
  }
}

impl ConfigSource for FileSource {
  fn lookup(&self, key: &str) -> Result<Option<String>> {
    Ok(self.values.get(key).cloned())
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RendererType {
  Rfc5424,
  Json
}

impl RendererType {
  pub fn get_renderer(&self) -> renderer::Renderer {
    match *self {
      RendererType::Rfc5424 => renderer::rfc5424_renderer,
      RendererType::Json => renderer::json_renderer
    }
  }
}

impl FromStr for RendererType {
  type Err = Box<dyn StdError>;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "rfc5424" | "syslog" => Ok(RendererType::Rfc5424),
      "json" => Ok(RendererType::Json),
      _ => bail!(format!("invalid renderer type: {}", s))
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputType {
  Envelope,
  Raw
}

impl FromStr for InputType {
  type Err = Box<dyn StdError>;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "envelope" => Ok(InputType::Envelope),
      "raw" => Ok(InputType::Raw),
      _ => bail!(format!("invalid input type: {}", s))
    }
  }
}

#[derive(Debug, StructOpt)]
#[structopt(
  name = "logchipper",
  rename_all = "kebab-case",
  raw(setting = "structopt::clap::AppSettings::ColoredHelp")
)]
pub struct Config {
  /// Renderer to use, one of: rfc5424, json
  #[structopt(long, short, default_value = "rfc5424", env = "NLF_RENDERER")]
  pub renderer: RendererType,

  /// Input format of each line on stdin, one of: envelope, raw
  ///
  /// - `envelope` expects a JSON object with a `payload` string and optional
  /// `partitionContext`, `systemProperties`, `properties`, `enqueuedTime` and
  /// `offset` fields{n}
  /// - `raw` treats each line as the event payload with no metadata
  #[structopt(long, short = "i", default_value = "envelope", env = "NLF_INPUT")]
  pub input: InputType,

  /// Hostname of this machine, recorded in each event id element
  #[structopt(long, default_value = "localhost", env = "NLF_HOSTNAME")]
  pub hostname: String,

  /// A path to a YAML file of configuration keys
  ///
  /// Keys missing from the file are read from the environment, with dots
  /// replaced by underscores and uppercased, e.g. `syslogtype.processname` is
  /// read from `SYSLOGTYPE_PROCESSNAME`.
  #[structopt(long, short = "c", env = "NLF_CONFIG")]
  pub config: Option<FileSource>
}

impl ConfigSource for Config {
  fn lookup(&self, key: &str) -> Result<Option<String>> {
    if let Some(file) = &self.config {
      if let Some(value) = file.lookup(key)? {
        return Ok(Some(value));
      }
    }

    EnvSource.lookup(key)
  }
}
