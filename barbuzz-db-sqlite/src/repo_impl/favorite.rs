use super::*;

impl<'a> FavoriteRepo for DbReadOnly<'a> {
    fn create_favorite(&self, _favorite: &Favorite) -> Result<()> {
        unreachable!();
    }
    fn delete_favorite(&self, _favorite: &Favorite) -> Result<()> {
        unreachable!();
    }
    fn is_favorite(&self, favorite: &Favorite) -> Result<bool> {
        is_favorite(&mut self.conn.borrow_mut(), favorite)
    }
    fn favorite_establishments_of_user(&self, user_id: &str) -> Result<Vec<Establishment>> {
        favorite_establishments_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> FavoriteRepo for DbReadWrite<'a> {
    fn create_favorite(&self, favorite: &Favorite) -> Result<()> {
        create_favorite(&mut self.conn.borrow_mut(), favorite)
    }
    fn delete_favorite(&self, favorite: &Favorite) -> Result<()> {
        delete_favorite(&mut self.conn.borrow_mut(), favorite)
    }
    fn is_favorite(&self, favorite: &Favorite) -> Result<bool> {
        is_favorite(&mut self.conn.borrow_mut(), favorite)
    }
    fn favorite_establishments_of_user(&self, user_id: &str) -> Result<Vec<Establishment>> {
        favorite_establishments_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> FavoriteRepo for DbConnection<'a> {
    fn create_favorite(&self, favorite: &Favorite) -> Result<()> {
        create_favorite(&mut self.conn.borrow_mut(), favorite)
    }
    fn delete_favorite(&self, favorite: &Favorite) -> Result<()> {
        delete_favorite(&mut self.conn.borrow_mut(), favorite)
    }
    fn is_favorite(&self, favorite: &Favorite) -> Result<bool> {
        is_favorite(&mut self.conn.borrow_mut(), favorite)
    }
    fn favorite_establishments_of_user(&self, user_id: &str) -> Result<Vec<Establishment>> {
        favorite_establishments_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

fn create_favorite(conn: &mut SqliteConnection, favorite: &Favorite) -> Result<()> {
    let new_favorite = models::NewFavorite {
        user_rowid: resolve_user_rowid(conn, favorite.user_id.as_str())?,
        establishment_rowid: resolve_establishment_rowid(
            conn,
            favorite.establishment_id.as_str(),
        )?,
        created_at: Timestamp::now().as_millis(),
    };
    diesel::insert_into(schema::favorite::table)
        .values(&new_favorite)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_favorite(conn: &mut SqliteConnection, favorite: &Favorite) -> Result<()> {
    use schema::favorite::dsl;
    let user_rowid = resolve_user_rowid(conn, favorite.user_id.as_str())?;
    let establishment_rowid =
        resolve_establishment_rowid(conn, favorite.establishment_id.as_str())?;
    let count = diesel::delete(
        dsl::favorite
            .filter(dsl::user_rowid.eq(user_rowid))
            .filter(dsl::establishment_rowid.eq(establishment_rowid)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn is_favorite(conn: &mut SqliteConnection, favorite: &Favorite) -> Result<bool> {
    use schema::{establishment as e_dsl, favorite::dsl, users as u_dsl};
    let count = dsl::favorite
        .inner_join(u_dsl::table)
        .inner_join(e_dsl::table)
        .filter(u_dsl::id.eq(favorite.user_id.as_str()))
        .filter(e_dsl::id.eq(favorite.establishment_id.as_str()))
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    Ok(count > 0)
}

fn favorite_establishments_of_user(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<Vec<Establishment>> {
    use schema::{establishment as e_dsl, favorite::dsl, users as u_dsl};
    dsl::favorite
        .inner_join(u_dsl::table)
        .inner_join(e_dsl::table)
        .filter(u_dsl::id.eq(user_id))
        .select(e_dsl::all_columns)
        .order_by(dsl::rowid)
        .load::<models::EstablishmentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|entity| util::load_establishment(entity).map_err(repo::Error::Other))
        .collect()
}
