//! PyPI client benchmarking suite
//!
//! Benchmarks for the pure parts of the client: path escaping, request
//! construction and project document decoding.

pub mod common;

pub use common::*;
