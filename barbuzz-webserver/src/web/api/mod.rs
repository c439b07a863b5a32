use std::{fmt::Display, result};

use barbuzz_application::prelude as flows;
use barbuzz_boundary::Error as JsonErrorResponse;
use barbuzz_core::usecases::Error as ParameterError;
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::{guards::*, sqlite, Cfg, NearbyCache};
use crate::{
    adapters::json::{self, from_json, to_json},
    core::{prelude::*, usecases},
};

mod bars;
mod error;
mod favorites;
mod util;
mod wait_times;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;
type StatusResult = result::Result<Status, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   bars   --- //
        bars::get_bars,
        bars::get_bar,
        bars::post_bar,
        bars::put_bar,
        bars::delete_bar,
        // ---   wait times   --- //
        wait_times::get_wait_time,
        wait_times::post_wait_time,
        // ---   favorites   --- //
        favorites::get_favorites,
        favorites::post_toggle_favorite,
        // ---   server   --- //
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

/// Runs `f` on the thread pool for blocking tasks.
///
/// Required for everything that calls the blocking HTTP gateways.
async fn spawn_blocking<T, F>(f: F) -> result::Result<T, ApiError>
where
    F: FnOnce() -> result::Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    let res = rocket::tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| anyhow::anyhow!("Blocking task failed: {err}"))?;
    Ok(res?)
}
