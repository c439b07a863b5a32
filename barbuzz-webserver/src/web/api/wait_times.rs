use super::*;
use anyhow::anyhow;
use barbuzz_core::gateways::busyness::BusynessGateway;

#[get("/wait-times?<bar>")]
pub async fn get_wait_time(
    connections: sqlite::Connections,
    auth: Auth,
    cfg: &State<Cfg>,
    busyness: &State<Busyness>,
    bar: Option<String>,
) -> Result<Vec<u32>> {
    auth.user(&connections)?;
    let Some(bar) = bar.filter(|id| !id.trim().is_empty()) else {
        return Err(ApiError::OtherWithStatus(
            anyhow!("Bar ID is required"),
            Status::BadRequest,
        ));
    };
    let max_wait = cfg.max_wait_minutes;
    let busyness = busyness.0.clone();
    let minutes = spawn_blocking(move || {
        let busyness = busyness.as_deref().map(|gw| gw as &dyn BusynessGateway);
        flows::estimate_wait_time(&connections, busyness, &bar, max_wait)
    })
    .await?;
    Ok(Json(vec![minutes]))
}

#[post("/wait-times", format = "application/json", data = "<body>")]
pub fn post_wait_time(
    connections: sqlite::Connections,
    auth: Auth,
    body: JsonResult<json::WaitTimeReport>,
) -> Result<json::WaitTimeSample> {
    auth.user(&connections)?;
    let json::WaitTimeReport {
        bar,
        estimated_wait,
    } = body?.into_inner();
    let sample = flows::report_wait_time(&connections, &bar, estimated_wait)?;
    Ok(Json(sample.into()))
}
