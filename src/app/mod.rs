// LogTally - app/mod.rs
//
// Application layer: file loading and run orchestration for the report,
// plus the contact-book command loop.
// Dependencies: core, platform, util.

pub mod contacts;
pub mod loader;
pub mod pipeline;
