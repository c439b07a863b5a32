use super::prelude::*;

pub const DEFAULT_MAX_WAIT_MINUTES: u32 = 60;

/// Maps a busyness percentage linearly onto `0..=max_wait` minutes.
pub fn busyness_to_wait_minutes(busyness_pct: f64, max_wait: u32) -> u32 {
    if !busyness_pct.is_finite() {
        return 0;
    }
    let minutes = (busyness_pct / 100.0 * f64::from(max_wait)).round();
    minutes.clamp(0.0, f64::from(max_wait)) as u32
}

/// Appends a new sample for an existing establishment.
pub fn record_wait_time<R>(repo: &R, establishment_id: &str, minutes: i64) -> Result<WaitTimeSample>
where
    R: EstablishmentRepo + WaitTimeRepo + ?Sized,
{
    let estimated_wait = u32::try_from(minutes).map_err(|_| Error::WaitTime)?;
    let establishment = repo.get_establishment(establishment_id)?;
    let sample = WaitTimeSample::now(establishment.id, estimated_wait);
    repo.add_wait_time_sample(&sample)?;
    Ok(sample)
}

/// The most recent sample, if any.
pub fn current_wait_time<R>(repo: &R, establishment_id: &str) -> Result<Option<u32>>
where
    R: WaitTimeRepo + ?Sized,
{
    Ok(repo
        .latest_wait_time_sample(establishment_id)?
        .map(|s| s.estimated_wait))
}
