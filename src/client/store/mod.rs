//! Client side caches of backend records.
//!
//! [`EntityStore`] is one reconciling cache generic over the entity service it is built on.
//! After each successful service call the cached list is patched with the outcome of the call
//! instead of being fetched again, and each failure is recorded for display before it is
//! returned to the caller. Entity specific filters and lookups live in the submodules as
//! inherent impls on the matching store type.
//!
//! Actions take `&mut self`, so actions on one store never interleave.

pub mod combine_score;
pub mod draft_pick;
pub mod draft_selection;
pub mod player;
pub mod player_award;
pub mod schedule;
pub mod state;
pub mod team;

#[cfg(test)]
mod tests;

use std::future::Future;

pub use state::{CrudMode, StoreState};

use crate::{
    client::{
        error::Error,
        service::{CrudService, UpsertService},
    },
    model::NaturalKey,
};

pub struct EntityStore<S: CrudService> {
    service: S,
    state: StoreState<S::Entity>,
}

impl<S: CrudService> EntityStore<S> {
    /// Creates an empty store backed by `service`
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: StoreState::default(),
        }
    }

    pub fn state(&self) -> &StoreState<S::Entity> {
        &self.state
    }

    pub fn items(&self) -> &[S::Entity] {
        self.state.items()
    }

    pub fn current(&self) -> Option<&S::Entity> {
        self.state.current()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn conflict_id(&self) -> Option<i32> {
        self.state.conflict_id()
    }

    pub fn mode(&self) -> CrudMode {
        self.state.mode()
    }

    pub fn get_by_id(&self, id: i32) -> Option<&S::Entity> {
        self.state.find_by_id(id)
    }

    pub fn get_by_key(&self, key: &<S::Entity as NaturalKey>::Key) -> Option<&S::Entity>
    where
        S::Entity: NaturalKey,
    {
        self.state.find_by_key(key)
    }

    pub fn set_mode(&mut self, mode: CrudMode) {
        self.state.set_mode(mode);
    }

    pub fn clear_current(&mut self) {
        self.state.clear_current();
    }

    pub fn clear_error(&mut self) {
        self.state.clear_error();
    }

    /// Loads every record, unless records are already cached and `refresh` is false
    pub async fn fetch_all(&mut self, refresh: bool) -> Result<&[S::Entity], Error> {
        if refresh || self.state.items().is_empty() {
            self.state.begin();
            let result = self.service.get_all().await;
            let items = self.state.settle("fetch", result)?;

            self.state.replace_all(items);
        }

        Ok(self.state.items())
    }

    /// Loads every record from the backend, even when records are cached
    pub async fn refresh(&mut self) -> Result<&[S::Entity], Error> {
        self.fetch_all(true).await
    }

    /// Makes record `id` current
    ///
    /// The cached copy is used without a request when `use_cache` is set and the record is
    /// listed. A fetched record refreshes its listed copy but is never added to the list.
    pub async fn fetch_by_id(&mut self, id: i32, use_cache: bool) -> Result<S::Entity, Error> {
        if use_cache {
            if let Some(cached) = self.state.find_by_id(id).cloned() {
                self.state.set_current(Some(cached.clone()));

                return Ok(cached);
            }
        }

        self.state.begin();
        let result = self.service.get_by_id(id).await;
        let item = self.state.settle("fetch", result)?;

        self.state.apply_fetched_one(item.clone());

        Ok(item)
    }

    /// Runs a filtered fetch and adds its records to the cache
    ///
    /// `fetch` can't borrow the store, entity stores build it from a copy of their service.
    pub async fn fetch_matching<F>(&mut self, fetch: F) -> Result<Vec<S::Entity>, Error>
    where
        F: Future<Output = Result<Vec<S::Entity>, Error>>,
    {
        self.state.begin();
        let result = fetch.await;
        let items = self.state.settle("fetch", result)?;

        self.state.merge(&items);

        Ok(items)
    }

    /// Creates a record, which becomes current
    ///
    /// A rejected duplicate records the identifier of the conflicting record, see
    /// [`EntityStore::conflict_id`].
    pub async fn create(&mut self, item: &S::Entity) -> Result<S::Entity, Error> {
        self.state.begin();
        let result = self.service.create(item).await;
        let created = self.state.settle("create", result)?;

        self.state.apply_saved(created.clone());

        Ok(created)
    }

    pub async fn update(&mut self, id: i32, item: &S::Entity) -> Result<S::Entity, Error> {
        self.state.begin();
        let result = self.service.update(id, item).await;
        let updated = self.state.settle("update", result)?;

        self.state.apply_updated(id, updated.clone());

        Ok(updated)
    }

    pub async fn remove(&mut self, id: i32) -> Result<(), Error> {
        self.state.begin();
        let result = self.service.delete(id).await;
        self.state.settle("delete", result)?;

        self.state.apply_removed(id);

        Ok(())
    }
}

impl<S: UpsertService> EntityStore<S> {
    /// Creates the record, or updates the one already holding its natural key
    pub async fn create_or_update(&mut self, item: &S::Entity) -> Result<S::Entity, Error> {
        self.state.begin();
        let result = self.service.create_or_update(item).await;
        let saved = self.state.settle("save", result)?;

        self.state.apply_saved(saved.clone());

        Ok(saved)
    }
}
