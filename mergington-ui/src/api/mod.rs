//! Activities service access over HTTP.

pub mod client;

pub use client::{api_base, FetchGateway};
