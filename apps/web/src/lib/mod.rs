//! Shared frontend utilities for configuration and build metadata.

pub(crate) mod build_info;
pub(crate) mod config;
