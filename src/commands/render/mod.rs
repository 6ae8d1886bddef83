//! Rendering of command results
//!
//! - `human`: aligned plain-text tables
//! - `json`: serde_json values

pub mod human;
pub mod json;
