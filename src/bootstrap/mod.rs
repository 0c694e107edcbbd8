//! Process bootstrap: config loading, tracing, dependency wiring and the
//! stdio run loop.

pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;
