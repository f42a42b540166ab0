// LogTally - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: app or platform, and never touches the filesystem.

pub mod aggregate;
pub mod export;
pub mod filter;
pub mod model;
pub mod numbers;
pub mod parser;
pub mod report;
