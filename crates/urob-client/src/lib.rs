//! urob-client library
//!
//! Typed HTTP client for the project/task backend, plus the logger used by
//! the `urob` binary.

pub(crate) mod client;
pub mod logger;

#[cfg(test)]
mod tests;

pub use client::{Client, ClientError, ClientResult, Operation};
