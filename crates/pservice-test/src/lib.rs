//! pservice - integration test support.
//!
//! Re-exports the workspace crates under a single `pservice_test::` path for
//! the integration tests in `tests/`.

pub use pservice_app::app;
pub use pservice_core::config;
