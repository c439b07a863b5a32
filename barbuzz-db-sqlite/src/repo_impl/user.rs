use super::*;

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &User, _token: &str) -> Result<()> {
        unreachable!();
    }
    fn get_user_by_token(&self, token: &str) -> Result<User> {
        get_user_by_token(&mut self.conn.borrow_mut(), token)
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: &User, token: &str) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user, token)
    }
    fn get_user_by_token(&self, token: &str) -> Result<User> {
        get_user_by_token(&mut self.conn.borrow_mut(), token)
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: &User, token: &str) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user, token)
    }
    fn get_user_by_token(&self, token: &str) -> Result<User> {
        get_user_by_token(&mut self.conn.borrow_mut(), token)
    }
}

fn create_user(conn: &mut SqliteConnection, u: &User, token: &str) -> Result<()> {
    let new_user = models::NewUser {
        id: u.id.as_str(),
        username: &u.username,
        token,
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_user_by_token(conn: &mut SqliteConnection, token: &str) -> Result<User> {
    use schema::users::dsl;
    let models::UserEntity {
        rowid: _,
        id,
        username,
        token: _,
    } = dsl::users
        .filter(dsl::token.eq(token))
        .first::<models::UserEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(User {
        id: id.into(),
        username,
    })
}
