use std::cell::{Cell, RefCell};

use anyhow::anyhow;

use super::prelude::*;

pub use crate::repositories::Error as RepoError;

type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory repositories for testing use cases.
#[derive(Debug, Default)]
pub struct MockDb {
    pub establishments: RefCell<Vec<Establishment>>,
    pub wait_times: RefCell<Vec<WaitTimeSample>>,
    pub favorites: RefCell<Vec<Favorite>>,
    pub users: RefCell<Vec<(User, String)>>,
    pub fail_reads: Cell<bool>,
}

impl MockDb {
    pub fn insert(&self, establishment: Establishment) {
        self.establishments.borrow_mut().push(establishment);
    }

    fn check_reads(&self) -> RepoResult<()> {
        if self.fail_reads.get() {
            return Err(RepoError::Other(anyhow!("Store unavailable")));
        }
        Ok(())
    }
}

fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .map(|s| s.to_lowercase().contains(needle))
        .unwrap_or(false)
}

impl EstablishmentRepo for MockDb {
    fn create_establishment(&self, e: &Establishment) -> RepoResult<()> {
        if self.establishments.borrow().iter().any(|x| x.id == e.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.insert(e.clone());
        Ok(())
    }

    fn update_establishment(&self, e: &Establishment) -> RepoResult<()> {
        let mut establishments = self.establishments.borrow_mut();
        let existing = establishments
            .iter_mut()
            .find(|x| x.id == e.id)
            .ok_or(RepoError::NotFound)?;
        *existing = e.clone();
        Ok(())
    }

    fn delete_establishment(&self, id: &str) -> RepoResult<()> {
        let mut establishments = self.establishments.borrow_mut();
        let index = establishments
            .iter()
            .position(|x| x.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        establishments.remove(index);
        self.wait_times
            .borrow_mut()
            .retain(|s| s.establishment_id.as_str() != id);
        self.favorites
            .borrow_mut()
            .retain(|f| f.establishment_id.as_str() != id);
        Ok(())
    }

    fn upsert_establishment_by_external_id(
        &self,
        mut e: Establishment,
    ) -> RepoResult<Establishment> {
        let mut establishments = self.establishments.borrow_mut();
        let index = e.external_id.as_ref().and_then(|external_id| {
            establishments
                .iter()
                .position(|x| x.external_id.as_ref() == Some(external_id))
        });
        match index {
            Some(index) => {
                let existing = &mut establishments[index];
                e.id = existing.id.clone();
                e.created_at = existing.created_at;
                *existing = e.clone();
            }
            None => establishments.push(e.clone()),
        }
        Ok(e)
    }

    fn get_establishment(&self, id: &str) -> RepoResult<Establishment> {
        self.check_reads()?;
        self.establishments
            .borrow()
            .iter()
            .find(|x| x.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_establishment_by_external_id(
        &self,
        external_id: &str,
    ) -> RepoResult<Option<Establishment>> {
        self.check_reads()?;
        Ok(self
            .establishments
            .borrow()
            .iter()
            .find(|x| x.external_id.as_deref() == Some(external_id))
            .cloned())
    }

    fn establishments_in_bbox(
        &self,
        bbox: &MapBbox,
        filter: ClassificationFilter,
    ) -> RepoResult<Vec<Establishment>> {
        self.check_reads()?;
        Ok(self
            .establishments
            .borrow()
            .iter()
            .filter(|x| bbox.contains_point(x.pos) && filter.accepts(&x.classification))
            .cloned()
            .collect())
    }

    fn establishments_by_text(
        &self,
        text: &str,
        filter: ClassificationFilter,
    ) -> RepoResult<Vec<Establishment>> {
        self.check_reads()?;
        let needle = text.to_lowercase();
        Ok(self
            .establishments
            .borrow()
            .iter()
            .filter(|x| filter.accepts(&x.classification))
            .filter(|x| {
                contains_ignore_case(Some(&x.name), &needle)
                    || contains_ignore_case(x.address.as_deref(), &needle)
                    || contains_ignore_case(x.description.as_deref(), &needle)
            })
            .cloned()
            .collect())
    }

    fn all_establishments(&self) -> RepoResult<Vec<Establishment>> {
        self.check_reads()?;
        Ok(self.establishments.borrow().clone())
    }

    fn count_establishments(&self) -> RepoResult<usize> {
        self.check_reads()?;
        Ok(self.establishments.borrow().len())
    }
}

impl WaitTimeRepo for MockDb {
    fn add_wait_time_sample(&self, sample: &WaitTimeSample) -> RepoResult<()> {
        self.wait_times.borrow_mut().push(sample.clone());
        Ok(())
    }

    fn latest_wait_time_sample(&self, establishment_id: &str) -> RepoResult<Option<WaitTimeSample>> {
        self.check_reads()?;
        Ok(self
            .wait_times
            .borrow()
            .iter()
            .filter(|s| s.establishment_id.as_str() == establishment_id)
            // max_by_key returns the last maximum
            .max_by_key(|s| s.created_at)
            .cloned())
    }

    fn wait_time_samples(&self, establishment_id: &str) -> RepoResult<Vec<WaitTimeSample>> {
        self.check_reads()?;
        Ok(self
            .wait_times
            .borrow()
            .iter()
            .filter(|s| s.establishment_id.as_str() == establishment_id)
            .cloned()
            .collect())
    }
}

impl FavoriteRepo for MockDb {
    fn create_favorite(&self, favorite: &Favorite) -> RepoResult<()> {
        if self.is_favorite(favorite)? {
            return Err(RepoError::AlreadyExists);
        }
        self.favorites.borrow_mut().push(favorite.clone());
        Ok(())
    }

    fn delete_favorite(&self, favorite: &Favorite) -> RepoResult<()> {
        let mut favorites = self.favorites.borrow_mut();
        let index = favorites
            .iter()
            .position(|f| f == favorite)
            .ok_or(RepoError::NotFound)?;
        favorites.remove(index);
        Ok(())
    }

    fn is_favorite(&self, favorite: &Favorite) -> RepoResult<bool> {
        self.check_reads()?;
        Ok(self.favorites.borrow().contains(favorite))
    }

    fn favorite_establishments_of_user(&self, user_id: &str) -> RepoResult<Vec<Establishment>> {
        self.check_reads()?;
        let favorites = self.favorites.borrow();
        Ok(self
            .establishments
            .borrow()
            .iter()
            .filter(|e| {
                favorites
                    .iter()
                    .any(|f| f.user_id.as_str() == user_id && f.establishment_id == e.id)
            })
            .cloned()
            .collect())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User, token: &str) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        if users.iter().any(|(u, t)| u.id == user.id || t == token) {
            return Err(RepoError::AlreadyExists);
        }
        users.push((user.clone(), token.to_owned()));
        Ok(())
    }

    fn get_user_by_token(&self, token: &str) -> RepoResult<User> {
        self.check_reads()?;
        self.users
            .borrow()
            .iter()
            .find(|(_, t)| t == token)
            .map(|(u, _)| u.clone())
            .ok_or(RepoError::NotFound)
    }
}
