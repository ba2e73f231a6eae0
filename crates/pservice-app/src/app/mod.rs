pub mod api;

use salvo::Router;
use salvo::logging::Logger;
use salvo::timeout::Timeout;

use crate::config::{ConfigHandler, Settings};
use crate::error::AppResult;

/// ## Summary
/// Builds the complete service router: request logging, the per-request
/// timeout, settings injection and every API route.
///
/// ## Errors
/// Returns an error if the configured request timeout is invalid.
pub fn service_router(settings: Settings) -> AppResult<Router> {
    let timeout = settings.server.request_timeout()?;

    Ok(Router::new()
        .hoop(Logger::new())
        .hoop(Timeout::new(timeout))
        .hoop(ConfigHandler::new(settings))
        .push(api::routes()))
}
