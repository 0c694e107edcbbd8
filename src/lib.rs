//! igloo-sync: headless host for the igloo session.
//!
//! The binary in `main.rs` is a thin shell over [`bootstrap`]; integration
//! tests drive the same wiring over in-memory streams.

pub mod bootstrap;
