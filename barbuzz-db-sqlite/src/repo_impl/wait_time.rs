use super::*;

impl<'a> WaitTimeRepo for DbReadOnly<'a> {
    fn add_wait_time_sample(&self, _sample: &WaitTimeSample) -> Result<()> {
        unreachable!();
    }
    fn latest_wait_time_sample(&self, establishment_id: &str) -> Result<Option<WaitTimeSample>> {
        latest_wait_time_sample(&mut self.conn.borrow_mut(), establishment_id)
    }
    fn wait_time_samples(&self, establishment_id: &str) -> Result<Vec<WaitTimeSample>> {
        wait_time_samples(&mut self.conn.borrow_mut(), establishment_id)
    }
}

impl<'a> WaitTimeRepo for DbReadWrite<'a> {
    fn add_wait_time_sample(&self, sample: &WaitTimeSample) -> Result<()> {
        add_wait_time_sample(&mut self.conn.borrow_mut(), sample)
    }
    fn latest_wait_time_sample(&self, establishment_id: &str) -> Result<Option<WaitTimeSample>> {
        latest_wait_time_sample(&mut self.conn.borrow_mut(), establishment_id)
    }
    fn wait_time_samples(&self, establishment_id: &str) -> Result<Vec<WaitTimeSample>> {
        wait_time_samples(&mut self.conn.borrow_mut(), establishment_id)
    }
}

impl<'a> WaitTimeRepo for DbConnection<'a> {
    fn add_wait_time_sample(&self, sample: &WaitTimeSample) -> Result<()> {
        add_wait_time_sample(&mut self.conn.borrow_mut(), sample)
    }
    fn latest_wait_time_sample(&self, establishment_id: &str) -> Result<Option<WaitTimeSample>> {
        latest_wait_time_sample(&mut self.conn.borrow_mut(), establishment_id)
    }
    fn wait_time_samples(&self, establishment_id: &str) -> Result<Vec<WaitTimeSample>> {
        wait_time_samples(&mut self.conn.borrow_mut(), establishment_id)
    }
}

fn load_wait_time_sample(entity: models::WaitTimeSampleEntity) -> Result<WaitTimeSample> {
    let models::WaitTimeSampleEntity {
        created_at,
        estimated_wait,
        establishment_id,
    } = entity;
    let estimated_wait = u32::try_from(estimated_wait)
        .map_err(|_| anyhow::anyhow!("Invalid estimated wait time: {estimated_wait}"))?;
    Ok(WaitTimeSample {
        establishment_id: establishment_id.into(),
        created_at: Timestamp::from_millis(created_at),
        estimated_wait,
    })
}

fn add_wait_time_sample(conn: &mut SqliteConnection, sample: &WaitTimeSample) -> Result<()> {
    let parent_rowid = resolve_establishment_rowid(conn, sample.establishment_id.as_str())?;
    let new_sample = models::NewWaitTimeSample {
        parent_rowid,
        created_at: sample.created_at.as_millis(),
        estimated_wait: i64::from(sample.estimated_wait),
    };
    diesel::insert_into(schema::wait_time_sample::table)
        .values(&new_sample)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn latest_wait_time_sample(
    conn: &mut SqliteConnection,
    establishment_id: &str,
) -> Result<Option<WaitTimeSample>> {
    use schema::{establishment as e_dsl, wait_time_sample::dsl};
    dsl::wait_time_sample
        .inner_join(e_dsl::table)
        .select((dsl::created_at, dsl::estimated_wait, e_dsl::id))
        .filter(e_dsl::id.eq(establishment_id))
        // equal timestamps are resolved by insertion order
        .order_by((dsl::created_at.desc(), dsl::rowid.desc()))
        .first::<models::WaitTimeSampleEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_wait_time_sample)
        .transpose()
}

fn wait_time_samples(
    conn: &mut SqliteConnection,
    establishment_id: &str,
) -> Result<Vec<WaitTimeSample>> {
    use schema::{establishment as e_dsl, wait_time_sample::dsl};
    dsl::wait_time_sample
        .inner_join(e_dsl::table)
        .select((dsl::created_at, dsl::estimated_wait, e_dsl::id))
        .filter(e_dsl::id.eq(establishment_id))
        .order_by((dsl::created_at, dsl::rowid))
        .load::<models::WaitTimeSampleEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_wait_time_sample)
        .collect()
}
