// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

pub mod stdin;

pub use stdin::{read_lines, read_stdin};
