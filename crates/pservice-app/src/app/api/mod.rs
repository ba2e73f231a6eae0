mod healthcheck;
mod ptlist;

use salvo::Router;

pub use ptlist::ErrorResponse;

// Re-export route constants from core
pub use pservice_core::constants::{HEALTHCHECK_ROUTE_PREFIX, PTLIST_ROUTE_PREFIX};

/// ## Summary
/// Constructs the API router.
#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(healthcheck::routes())
        .push(ptlist::routes())
}
