// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};

use serde_json;
use simple_error::{SimpleError, SimpleResult};
use tracing::error;

use crate::config::Config;
use crate::record::CanonicalLogRecord;
use crate::renderer::common::drain;
use crate::renderer::types::*;

pub fn format_json(record: &CanonicalLogRecord) -> SimpleResult<String> {
  serde_json::to_string(record).map_err(SimpleError::from)
}

/// Prints each record as a JSON object
pub fn json_renderer(
  _: Arc<Config>, rx: Receiver<LogEntry>
) -> io::Result<JoinHandle<()>> {
  thread::Builder::new().name("json_renderer".to_string()).spawn(move || {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = drain(rx, &mut out, format_json) {
      error!(error = %e, "error writing json records");
    }
  })
}
