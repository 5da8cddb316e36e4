//! HTTP request handlers for the mock server.

pub mod images;

pub use images::*;
