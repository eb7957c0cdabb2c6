// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::thread::JoinHandle;

use crate::assemble::Provenance;
use crate::config::{Config, InputType};
use crate::error::ErrorKind;
use crate::event::{Envelope, Event};
use crate::normalizer::Normalizer;
use crate::record::CanonicalLogRecord;

/// The outcome of one input line, as passed from a reader to a renderer
#[derive(Debug)]
pub enum LogEntry {
  /// the line was normalized, possibly to zero records for an empty batch
  Records {
    line: usize,
    records: Vec<CanonicalLogRecord>
  },

  /// the line could not be normalized; `kind` is unset if the line was not
  /// even a valid envelope
  Rejected {
    line: usize,
    kind: Option<ErrorKind>,
    reason: String
  },

  /// end of input was reached
  Eof
}

impl LogEntry {
  pub fn eof() -> LogEntry {
    LogEntry::Eof
  }

  /// Decodes one input line and normalizes the event it carries
  pub fn normalize(
    normalizer: &Normalizer,
    provenance: &dyn Provenance,
    input: InputType,
    line: usize,
    text: &str
  ) -> LogEntry {
    let event = match input {
      InputType::Envelope => match serde_json::from_str::<Envelope>(text) {
        Ok(envelope) => envelope.into_event(),
        Err(e) => return LogEntry::Rejected {
          line,
          kind: None,
          reason: format!("invalid envelope: {}", e)
        }
      },
      InputType::Raw => Event::bare(text)
    };

    match normalizer.normalize(&event, provenance) {
      Ok(records) => LogEntry::Records { line, records },
      Err(e) => LogEntry::Rejected {
        line,
        kind: Some(e.kind()),
        reason: e.to_string()
      }
    }
  }
}

pub type Renderer = fn(
  config: Arc<Config>, rx: Receiver<LogEntry>
) -> io::Result<JoinHandle<()>>;
