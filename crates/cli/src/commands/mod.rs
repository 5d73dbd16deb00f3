//! CLI subcommand implementations

pub mod feedback;
pub mod metrics;
pub mod predict;
pub mod status;
