// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

mod types;
mod canonical;

pub use types::{Facility, SdElement, Severity};
pub use canonical::CanonicalLogRecord;
