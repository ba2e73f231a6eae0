//! Integration tests for the pservice HTTP API.

mod healthcheck;
mod helpers;
mod ptlist;
