use super::*;
use crate::error::BError;
use barbuzz_core::gateways::busyness::BusynessGateway;

/// Estimates the current wait time from the live busyness of
/// the venue and records it as a new sample.
///
/// Falls back to the latest recorded sample if the busyness
/// gateway is missing or fails.
pub fn estimate_wait_time(
    connections: &sqlite::Connections,
    busyness: Option<&dyn BusynessGateway>,
    establishment_id: &str,
    max_wait: u32,
) -> Result<u32> {
    let establishment = connections.shared()?.get_establishment(establishment_id)?;
    match busyness {
        Some(busyness) => match live_wait_time(busyness, &establishment, max_wait) {
            Ok(minutes) => {
                connections.exclusive()?.transaction(|conn| {
                    usecases::record_wait_time(conn, establishment_id, i64::from(minutes))
                })?;
                return Ok(minutes);
            }
            Err(err) => {
                warn!(
                    "Failed to estimate wait time of establishment {establishment_id}: {err}"
                );
            }
        },
        None => {
            debug!("No busyness gateway available");
        }
    }
    let latest = usecases::current_wait_time(&connections.shared()?, establishment_id)?;
    latest.ok_or_else(|| BError::WaitTimeUnavailable.into())
}

fn live_wait_time(
    busyness: &dyn BusynessGateway,
    establishment: &Establishment,
    max_wait: u32,
) -> anyhow::Result<u32> {
    let address = establishment.address.as_deref().unwrap_or_default();
    let venue_id = busyness.create_forecast(&establishment.name, address)?;
    let busyness_pct = busyness.current_busyness(&venue_id)?;
    debug!("Venue {venue_id} is {busyness_pct}% busy");
    Ok(usecases::busyness_to_wait_minutes(busyness_pct, max_wait))
}

/// Records a wait time reported by a visitor.
pub fn report_wait_time(
    connections: &sqlite::Connections,
    establishment_id: &str,
    estimated_wait: i64,
) -> Result<WaitTimeSample> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::record_wait_time(conn, establishment_id, estimated_wait))
        .inspect_err(|err| {
            warn!("Failed to record wait time of establishment {establishment_id}: {err}");
        })?)
}
