//! Command-line front end for the tax and loan engines in `calc-core`.

pub mod commands;
pub mod config;
pub mod report;
pub mod schedule_export;
pub mod utils;
