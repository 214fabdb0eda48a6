pub mod config;
pub mod logging;

// Core modules: one per pipeline stage, plus shared fetch/error helpers.
pub mod error;
pub mod extract;
pub mod fetch;
pub mod identity;
pub mod outname;
pub mod profiles;
pub mod report;
pub mod select;
