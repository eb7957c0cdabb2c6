// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use std::io::{self, BufRead};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use simple_error::{SimpleError, SimpleResult};

use crate::assemble::{Provenance, SystemProvenance};
use crate::config::{Config, InputType};
use crate::normalizer::Normalizer;
use crate::renderer::LogEntry;

/// Normalizes each line of `input` and sends the result over `tx`, followed
/// by an EOF marker
///
/// Blank lines are skipped but still counted, so reported line numbers match
/// the input.
pub fn read_lines<B: BufRead>(
  input: B,
  normalizer: &Normalizer,
  provenance: &dyn Provenance,
  input_type: InputType,
  tx: &Sender<LogEntry>
) -> SimpleResult<()> {
  for (index, line) in input.lines().enumerate() {
    let line = line.map_err(SimpleError::from)?;
    if line.trim().is_empty() {
      continue;
    }

    let entry = LogEntry::normalize(normalizer, provenance, input_type, index + 1, &line);
    if tx.send(entry).is_err() {
      // assume the renderer has quit and stop
      return Ok(());
    }
  }

  // not much we can do if this fails
  tx.send(LogEntry::eof()).ok();

  Ok(())
}

pub fn read_stdin(
  config: Arc<Config>,
  tx: Sender<LogEntry>
) -> io::Result<JoinHandle<SimpleResult<()>>> {
  thread::Builder::new().name("read_stdin".to_string()).spawn(move || {
    let normalizer = Normalizer::new(&*config);
    let provenance = SystemProvenance::new(config.hostname.as_str());

    let stdin = io::stdin();
    let result = read_lines(stdin.lock(), &normalizer, &provenance, config.input, &tx);

    if result.is_err() {
      tx.send(LogEntry::eof()).ok();
    }

    result
  })
}
