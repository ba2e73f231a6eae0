//! HTTP surface of the periodic timestamp list service.

pub mod app;
pub mod config;
pub mod error;
