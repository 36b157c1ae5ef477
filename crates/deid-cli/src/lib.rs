//! Library components for the de-identification CLI.

pub mod logging;
