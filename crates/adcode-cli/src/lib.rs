//! CLI library components for the division code converter.

pub mod commands;
pub mod logging;
pub mod summary;
