//! CLI commands for transit

pub mod dispatch;
pub mod network;
pub mod paths;
pub mod render;
pub mod report;
pub mod stats;
pub mod traverse;
