// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use std::io::Write;
use std::sync::mpsc::Receiver;

use simple_error::{SimpleError, SimpleResult};
use tracing::{debug, info, warn};

use crate::record::CanonicalLogRecord;
use crate::renderer::types::LogEntry;

/// Running totals for one rendering session
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
  pub accepted: usize,
  pub rejected: usize,
  pub records: usize
}

/// Writes every record received on `rx` using `format`, one per line, until
/// end of input or until writing fails
pub fn drain<W, F>(rx: Receiver<LogEntry>, out: &mut W, format: F) -> SimpleResult<Summary>
where
  W: Write,
  F: Fn(&CanonicalLogRecord) -> SimpleResult<String>
{
  let mut summary = Summary::default();

  for entry in rx {
    match entry {
      LogEntry::Records { line, records } => {
        debug!(line, count = records.len(), "normalized event");
        summary.accepted += 1;

        for record in &records {
          writeln!(out, "{}", format(record)?).map_err(SimpleError::from)?;
          summary.records += 1;
        }
      },
      LogEntry::Rejected { line, kind, reason } => {
        warn!(line, kind = ?kind, %reason, "rejected event");
        summary.rejected += 1;
      },
      LogEntry::Eof => break
    }
  }

  out.flush().map_err(SimpleError::from)?;

  if summary.accepted + summary.rejected == 0 {
    warn!("reached end of input without reading any events");
  }

  info!(
    accepted = summary.accepted,
    rejected = summary.rejected,
    records = summary.records,
    "reached end of input"
  );

  Ok(summary)
}
