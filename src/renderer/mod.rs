// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

mod types;
mod common;
mod json;
mod rfc5424;

pub use types::*;
pub use common::{drain, Summary};
pub use json::{format_json, json_renderer};
pub use rfc5424::{format_rfc5424, rfc5424_renderer};
