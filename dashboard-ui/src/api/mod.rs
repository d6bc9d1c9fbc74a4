//! API Communication
//!
//! Browser implementation of the dashboard API contract.

pub mod client;

pub use client::BrowserApi;
