//! Inspection commands for multi-corpus cut manifests.

pub mod check;
pub mod cli;
pub mod config;
pub mod peek;
pub mod split;
pub mod stats;
