// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

//#![warn(clippy)]

extern crate chrono;
extern crate dtparse;
#[macro_use] extern crate lazy_static;
#[cfg(test)] #[macro_use] extern crate maplit;
extern crate regex;
extern crate shellexpand;
#[macro_use] extern crate simple_error;
extern crate structopt;

pub mod error;
pub mod util;
pub mod wire;
pub mod event;
pub mod record;
pub mod schema;
pub mod assemble;
pub mod normalizer;
pub mod config;
pub mod reader;
pub mod renderer;

#[cfg(test)] mod testing;

pub use assemble::{FixedProvenance, Provenance, SystemProvenance};
pub use normalizer::Normalizer;
pub use config::ConfigSource;
pub use error::{Error, ErrorKind, Result};
pub use event::{Event, EventMetadata, ParsedEvent};
pub use record::{CanonicalLogRecord, Facility, SdElement, Severity};
