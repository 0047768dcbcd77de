//! CLI library components for the Dexview catalog viewer.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod report;
