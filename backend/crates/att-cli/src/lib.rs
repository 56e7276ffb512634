//! att-cli library
//!
//! Exports the HTTP client, the capture simulator and the stream watcher for
//! use in tests.

pub(crate) mod capture;
pub(crate) mod client;
pub(crate) mod watch;

#[cfg(test)]
mod tests;

pub use capture::{CaptureOptions, CaptureSummary, describe, run_capture};
pub use client::{CliClientResult, Client, ClientError, ImageFile};
pub use watch::{format_event, watch};
