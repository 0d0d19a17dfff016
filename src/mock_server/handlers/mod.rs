//! HTTP request handlers for the mock server.

pub mod projects;

pub use projects::*;
