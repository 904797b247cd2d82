//! Native HTTP client for the TRON full-node wallet API.
//!
//! Implements [`TronRpc`](super::TronRpc) over JSON-over-HTTP using
//! `reqwest`: one generic request primitive, a top-level `Error` probe, and
//! typed decoding per endpoint.

mod client;
mod connection;
mod protocol;

pub use client::HttpNodeClient;
pub use connection::ClientConfig;
