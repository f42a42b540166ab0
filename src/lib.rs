// LogTally - lib.rs
//
// Library entry point, exposing all modules to the three binaries and to
// the integration tests.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
