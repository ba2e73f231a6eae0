use pservice_core::constants::{
    END_PARAM, PERIOD_PARAM, PTLIST_ROUTE_COMPONENT, START_PARAM, TIMEZONE_PARAM,
};
use pservice_time::{Enumerator, Interval, IntervalQuery};
use salvo::http::StatusCode;
use salvo::writing::Text;
use salvo::{Depot, Request, Response, Router, handler};
use serde::{Deserialize, Serialize};

use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: String,
    pub desc: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(desc: String) -> Self {
        Self {
            status: "error".to_string(),
            desc,
        }
    }
}

/// Serializes `body` and writes it with `status`.
fn render_json<T: Serialize>(res: &mut Response, status: StatusCode, body: &T) -> AppResult<()> {
    let json = serde_json::to_string(body)?;
    res.status_code(status);
    res.render(Text::Json(json));
    Ok(())
}

fn render_error(res: &mut Response, err: &AppError) {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(error = %err, "Request failed");
    } else {
        tracing::debug!(error = %err, "Request rejected");
    }

    if let Err(e) = render_json(res, status, &ErrorResponse::new(err.description())) {
        tracing::error!(error = %e, "Failed to encode error response");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        res.render(Text::Plain("Fatal error"));
    }
}

/// Validates the query and runs the enumeration.
fn compute(req: &Request, depot: &Depot) -> AppResult<Interval> {
    let settings = get_config_from_depot(depot)?;

    let period = req.query::<String>(PERIOD_PARAM);
    let tz = req.query::<String>(TIMEZONE_PARAM);
    let t1 = req.query::<String>(START_PARAM);
    let t2 = req.query::<String>(END_PARAM);

    let query = IntervalQuery {
        period: period.as_deref(),
        tz: tz.as_deref(),
        t1: t1.as_deref(),
        t2: t2.as_deref(),
    };

    let request = query.resolve(settings.enumeration.default_timezone.as_deref())?;
    tracing::debug!(
        period = %request.period,
        tz = %request.timezone(),
        start = %request.start,
        end = %request.end,
        "Enumerating interval"
    );

    Ok(request.enumerate(&Enumerator::new(settings.enumeration.max_points))?)
}

/// ## Summary
/// GET /ptlist - Lists every timestamp spaced by `period` between `t1` and `t2`
///
/// Query parameters: `period` (e.g. "1h", "3d", "1mo", "1y"), optional `tz`
/// (IANA name, defaults to the configured or system zone), and `t1`/`t2` in
/// `YYYYMMDDThhmmssZ` form.
///
/// ## Errors
/// Returns HTTP 400 with `{"status":"error","desc":...}` for any invalid parameter
/// Returns HTTP 500 if the response cannot be encoded
#[handler]
async fn ptlist(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let result =
        compute(req, depot).and_then(|interval| render_json(res, StatusCode::OK, &interval));

    if let Err(e) = result {
        render_error(res, &e);
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(PTLIST_ROUTE_COMPONENT).get(ptlist)
}
