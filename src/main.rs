// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

//#![warn(clippy)]

extern crate atty;
extern crate logchipper;
extern crate structopt;
extern crate tracing_subscriber;

use std::error::Error;
use std::io;
use std::process;
use std::sync::Arc;
use std::sync::mpsc::channel;

use atty::Stream;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use logchipper::config::Config;
use logchipper::reader;

fn init_logging() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn main() -> Result<(), Box<dyn Error>> {
  let config = Arc::new(Config::from_args());
  init_logging();

  if atty::is(Stream::Stdin) {
    eprintln!(
      "{}\n\n{}\n\n{}",
      "error: no input was detected, pipe in some events",
      Config::clap().get_matches().usage(),
      "For more information, see --help"
    );

    process::exit(1);
  }

  let (entry_tx, entry_rx) = channel();
  let renderer_impl = config.renderer.get_renderer();
  let renderer = renderer_impl(Arc::clone(&config), entry_rx)?;
  let reader = reader::read_stdin(Arc::clone(&config), entry_tx)?;

  renderer.join().map_err(|_| "renderer thread did not exit cleanly")?;
  reader.join().map_err(|_| "reader thread did not exit cleanly")??;

  Ok(())
}
