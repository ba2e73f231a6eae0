//! Shared settings, errors and route constants for the pservice workspace.

pub mod config;
pub mod constants;
pub mod error;
