use super::*;

impl<'a> EstablishmentRepo for DbReadOnly<'a> {
    fn create_establishment(&self, _establishment: &Establishment) -> Result<()> {
        unreachable!();
    }
    fn update_establishment(&self, _establishment: &Establishment) -> Result<()> {
        unreachable!();
    }
    fn delete_establishment(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
    fn upsert_establishment_by_external_id(
        &self,
        _establishment: Establishment,
    ) -> Result<Establishment> {
        unreachable!();
    }

    fn get_establishment(&self, id: &str) -> Result<Establishment> {
        get_establishment(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_establishment_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<Establishment>> {
        try_get_establishment_by_external_id(&mut self.conn.borrow_mut(), external_id)
    }
    fn establishments_in_bbox(
        &self,
        bbox: &MapBbox,
        filter: ClassificationFilter,
    ) -> Result<Vec<Establishment>> {
        establishments_in_bbox(&mut self.conn.borrow_mut(), bbox, filter)
    }
    fn establishments_by_text(
        &self,
        text: &str,
        filter: ClassificationFilter,
    ) -> Result<Vec<Establishment>> {
        establishments_by_text(&mut self.conn.borrow_mut(), text, filter)
    }
    fn all_establishments(&self) -> Result<Vec<Establishment>> {
        all_establishments(&mut self.conn.borrow_mut())
    }
    fn count_establishments(&self) -> Result<usize> {
        count_establishments(&mut self.conn.borrow_mut())
    }
}

impl<'a> EstablishmentRepo for DbReadWrite<'a> {
    fn create_establishment(&self, establishment: &Establishment) -> Result<()> {
        create_establishment(&mut self.conn.borrow_mut(), establishment)
    }
    fn update_establishment(&self, establishment: &Establishment) -> Result<()> {
        update_establishment(&mut self.conn.borrow_mut(), establishment)
    }
    fn delete_establishment(&self, id: &str) -> Result<()> {
        delete_establishment(&mut self.conn.borrow_mut(), id)
    }
    fn upsert_establishment_by_external_id(
        &self,
        establishment: Establishment,
    ) -> Result<Establishment> {
        upsert_establishment_by_external_id(&mut self.conn.borrow_mut(), establishment)
    }

    fn get_establishment(&self, id: &str) -> Result<Establishment> {
        get_establishment(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_establishment_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<Establishment>> {
        try_get_establishment_by_external_id(&mut self.conn.borrow_mut(), external_id)
    }
    fn establishments_in_bbox(
        &self,
        bbox: &MapBbox,
        filter: ClassificationFilter,
    ) -> Result<Vec<Establishment>> {
        establishments_in_bbox(&mut self.conn.borrow_mut(), bbox, filter)
    }
    fn establishments_by_text(
        &self,
        text: &str,
        filter: ClassificationFilter,
    ) -> Result<Vec<Establishment>> {
        establishments_by_text(&mut self.conn.borrow_mut(), text, filter)
    }
    fn all_establishments(&self) -> Result<Vec<Establishment>> {
        all_establishments(&mut self.conn.borrow_mut())
    }
    fn count_establishments(&self) -> Result<usize> {
        count_establishments(&mut self.conn.borrow_mut())
    }
}

impl<'a> EstablishmentRepo for DbConnection<'a> {
    fn create_establishment(&self, establishment: &Establishment) -> Result<()> {
        create_establishment(&mut self.conn.borrow_mut(), establishment)
    }
    fn update_establishment(&self, establishment: &Establishment) -> Result<()> {
        update_establishment(&mut self.conn.borrow_mut(), establishment)
    }
    fn delete_establishment(&self, id: &str) -> Result<()> {
        delete_establishment(&mut self.conn.borrow_mut(), id)
    }
    fn upsert_establishment_by_external_id(
        &self,
        establishment: Establishment,
    ) -> Result<Establishment> {
        upsert_establishment_by_external_id(&mut self.conn.borrow_mut(), establishment)
    }

    fn get_establishment(&self, id: &str) -> Result<Establishment> {
        get_establishment(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_establishment_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<Establishment>> {
        try_get_establishment_by_external_id(&mut self.conn.borrow_mut(), external_id)
    }
    fn establishments_in_bbox(
        &self,
        bbox: &MapBbox,
        filter: ClassificationFilter,
    ) -> Result<Vec<Establishment>> {
        establishments_in_bbox(&mut self.conn.borrow_mut(), bbox, filter)
    }
    fn establishments_by_text(
        &self,
        text: &str,
        filter: ClassificationFilter,
    ) -> Result<Vec<Establishment>> {
        establishments_by_text(&mut self.conn.borrow_mut(), text, filter)
    }
    fn all_establishments(&self) -> Result<Vec<Establishment>> {
        all_establishments(&mut self.conn.borrow_mut())
    }
    fn count_establishments(&self) -> Result<usize> {
        count_establishments(&mut self.conn.borrow_mut())
    }
}

type BoxedEstablishmentQuery<'a> =
    schema::establishment::BoxedQuery<'a, diesel::sqlite::Sqlite>;

const LIKE_ESCAPE_CHAR: char = '\\';

fn filter_classification(
    query: BoxedEstablishmentQuery<'_>,
    filter: ClassificationFilter,
) -> BoxedEstablishmentQuery<'_> {
    use schema::establishment::dsl;
    match filter {
        ClassificationFilter::BarLike => {
            query.filter(dsl::classification.eq_any(BAR_LIKE_CLASSIFICATIONS))
        }
        ClassificationFilter::Any => query,
    }
}

fn load_establishments(entities: Vec<models::EstablishmentEntity>) -> Result<Vec<Establishment>> {
    entities
        .into_iter()
        .map(|entity| util::load_establishment(entity).map_err(repo::Error::Other))
        .collect()
}

fn escape_like_pattern(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE_CHAR {
            escaped.push(LIKE_ESCAPE_CHAR);
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn create_establishment(conn: &mut SqliteConnection, e: &Establishment) -> Result<()> {
    let new_establishment = util::new_establishment(e)?;
    diesel::insert_into(schema::establishment::table)
        .values(&new_establishment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_establishment(conn: &mut SqliteConnection, e: &Establishment) -> Result<()> {
    use schema::establishment::dsl;
    let new_establishment = util::new_establishment(e)?;
    let count = diesel::update(dsl::establishment.filter(dsl::id.eq(e.id.as_str())))
        .set(&new_establishment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn delete_establishment(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::establishment::dsl;
    // Wait time samples and favorites are deleted by ON DELETE CASCADE
    let count = diesel::delete(dsl::establishment.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn upsert_establishment_by_external_id(
    conn: &mut SqliteConnection,
    mut e: Establishment,
) -> Result<Establishment> {
    let existing = match e.external_id.as_deref() {
        Some(external_id) => try_get_establishment_by_external_id(conn, external_id)?,
        None => None,
    };
    if let Some(existing) = existing {
        e.id = existing.id;
        e.created_at = existing.created_at;
        update_establishment(conn, &e)?;
    } else {
        create_establishment(conn, &e)?;
    }
    Ok(e)
}

fn get_establishment(conn: &mut SqliteConnection, id: &str) -> Result<Establishment> {
    use schema::establishment::dsl;
    let entity = dsl::establishment
        .filter(dsl::id.eq(id))
        .first::<models::EstablishmentEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(util::load_establishment(entity)?)
}

fn try_get_establishment_by_external_id(
    conn: &mut SqliteConnection,
    external_id: &str,
) -> Result<Option<Establishment>> {
    use schema::establishment::dsl;
    let entity = dsl::establishment
        .filter(dsl::external_id.eq(external_id))
        .first::<models::EstablishmentEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?;
    Ok(entity.map(util::load_establishment).transpose()?)
}

fn establishments_in_bbox(
    conn: &mut SqliteConnection,
    bbox: &MapBbox,
    filter: ClassificationFilter,
) -> Result<Vec<Establishment>> {
    use schema::establishment::dsl;
    let (south, west) = bbox.southwest().to_lat_lng_deg();
    let (north, east) = bbox.northeast().to_lat_lng_deg();
    let mut query = dsl::establishment
        .filter(dsl::lat.between(south, north))
        .into_boxed();
    if west <= east {
        query = query.filter(dsl::lng.between(west, east));
    } else {
        // The box wraps around the antimeridian
        query = query.filter(dsl::lng.ge(west).or(dsl::lng.le(east)));
    }
    let entities = filter_classification(query, filter)
        .order_by(dsl::rowid)
        .load::<models::EstablishmentEntity>(conn)
        .map_err(from_diesel_err)?;
    load_establishments(entities)
}

fn establishments_by_text(
    conn: &mut SqliteConnection,
    text: &str,
    filter: ClassificationFilter,
) -> Result<Vec<Establishment>> {
    use schema::establishment::dsl;
    // LIKE is case-insensitive for ASCII characters
    let pattern = escape_like_pattern(text);
    let query = dsl::establishment
        .filter(
            dsl::name
                .like(pattern.clone())
                .escape(LIKE_ESCAPE_CHAR)
                .or(dsl::address
                    .like(pattern.clone())
                    .escape(LIKE_ESCAPE_CHAR))
                .or(dsl::description.like(pattern).escape(LIKE_ESCAPE_CHAR)),
        )
        .into_boxed();
    let entities = filter_classification(query, filter)
        .order_by(dsl::rowid)
        .load::<models::EstablishmentEntity>(conn)
        .map_err(from_diesel_err)?;
    load_establishments(entities)
}

fn all_establishments(conn: &mut SqliteConnection) -> Result<Vec<Establishment>> {
    use schema::establishment::dsl;
    let entities = dsl::establishment
        .order_by(dsl::rowid)
        .load::<models::EstablishmentEntity>(conn)
        .map_err(from_diesel_err)?;
    load_establishments(entities)
}

fn count_establishments(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::establishment::dsl;
    Ok(dsl::establishment
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
