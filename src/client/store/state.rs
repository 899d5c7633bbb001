use dioxus_logger::tracing;

use crate::{
    client::error::Error,
    model::{Entity, NaturalKey},
};

/// What the user is doing with the records of a store
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrudMode {
    #[default]
    Read,
    Create,
    Edit,
    Delete,
}

/// Cached records of one entity type and the outcome of the last store action.
///
/// Every transition keeps `items` free of two records with the same identifier: records
/// are replaced in place when their identifier is already listed.
#[derive(Clone, Debug)]
pub struct StoreState<E> {
    items: Vec<E>,
    current: Option<E>,
    loading: bool,
    error: Option<String>,
    conflict_id: Option<i32>,
    mode: CrudMode,
}

impl<E> Default for StoreState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            loading: false,
            error: None,
            conflict_id: None,
            mode: CrudMode::default(),
        }
    }
}

impl<E: Entity> StoreState<E> {
    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn current(&self) -> Option<&E> {
        self.current.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed action
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Identifier of the record a rejected duplicate conflicts with
    pub fn conflict_id(&self) -> Option<i32> {
        self.conflict_id
    }

    pub fn mode(&self) -> CrudMode {
        self.mode
    }

    pub fn find_by_id(&self, id: i32) -> Option<&E> {
        self.items.iter().find(|item| item.id() == Some(id))
    }

    /// Listed record with the same natural key as `key`, ignoring case
    pub fn find_by_key(&self, key: &E::Key) -> Option<&E>
    where
        E: NaturalKey,
    {
        self.items.iter().find(|item| item.natural_key() == *key)
    }

    fn position(&self, id: Option<i32>) -> Option<usize> {
        id.and_then(|id| self.items.iter().position(|item| item.id() == Some(id)))
    }

    pub(super) fn set_mode(&mut self, mode: CrudMode) {
        self.mode = mode;
    }

    pub(super) fn clear_current(&mut self) {
        self.current = None;
    }

    pub(super) fn clear_error(&mut self) {
        self.error = None;
        self.conflict_id = None;
    }

    pub(super) fn set_current(&mut self, current: Option<E>) {
        self.current = current;
    }

    /// Marks the start of an action
    pub(super) fn begin(&mut self) {
        self.loading = true;
        self.clear_error();
    }

    /// Marks the end of an action, recording the failure if there is one
    ///
    /// # Arguments
    /// - `action` - Verb describing the action in the failure message, e.g. `create`
    /// - `result` - Outcome of the service call, returned unchanged
    pub(super) fn settle<T>(&mut self, action: &str, result: Result<T, Error>) -> Result<T, Error> {
        self.loading = false;

        if let Err(err) = &result {
            tracing::error!("Failed to {} {}: {}", action, E::LABEL, err);

            match err {
                Error::DuplicateEntity(duplicate) => {
                    self.error = Some(duplicate.message.clone());
                    self.conflict_id = duplicate.existing_id;
                }
                err => self.error = Some(format!("Failed to {} {}: {}", action, E::LABEL, err)),
            }
        }

        result
    }

    pub(super) fn replace_all(&mut self, items: Vec<E>) {
        self.items = items;
    }

    /// A record fetched by identifier becomes current and refreshes its listed copy
    ///
    /// The record is not added to the list when it isn't listed yet.
    pub(super) fn apply_fetched_one(&mut self, item: E) {
        if let Some(index) = self.position(item.id()) {
            self.items[index] = item.clone();
        }

        self.current = Some(item);
    }

    /// Adds records fetched by a filter, replacing the listed copies
    pub(super) fn merge(&mut self, items: &[E]) {
        for item in items {
            self.upsert_item(item.clone());
        }
    }

    /// A saved record becomes current and is listed exactly once
    pub(super) fn apply_saved(&mut self, item: E) {
        self.upsert_item(item.clone());
        self.current = Some(item);
    }

    /// Replaces the listed copy of record `id` and the current record if it is `id`
    ///
    /// An updated record that isn't listed is left out of the list.
    pub(super) fn apply_updated(&mut self, id: i32, item: E) {
        if let Some(index) = self.position(Some(id)) {
            self.items[index] = item.clone();
        }

        if self.current.as_ref().and_then(Entity::id) == Some(id) {
            self.current = Some(item);
        }
    }

    pub(super) fn apply_removed(&mut self, id: i32) {
        self.items.retain(|item| item.id() != Some(id));

        if self.current.as_ref().and_then(Entity::id) == Some(id) {
            self.current = None;
        }
    }

    fn upsert_item(&mut self, item: E) {
        match self.position(item.id()) {
            Some(index) => self.items[index] = item,
            None => self.items.push(item),
        }
    }
}
