// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};

use simple_error::SimpleResult;
use tracing::error;

use crate::config::Config;
use crate::record::CanonicalLogRecord;
use crate::renderer::common::drain;
use crate::renderer::types::*;

/// Formats a record as a single line; carriage returns and newlines are
/// written as `\r` and `\n` so each record stays on its own line
pub fn format_rfc5424(record: &CanonicalLogRecord) -> SimpleResult<String> {
  Ok(record.to_string().replace('\r', "\\r").replace('\n', "\\n"))
}

/// Prints each record as an RFC 5424 syslog line
pub fn rfc5424_renderer(
  _: Arc<Config>, rx: Receiver<LogEntry>
) -> io::Result<JoinHandle<()>> {
  thread::Builder::new().name("rfc5424_renderer".to_string()).spawn(move || {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = drain(rx, &mut out, format_rfc5424) {
      error!(error = %e, "error writing rfc5424 records");
    }
  })
}
