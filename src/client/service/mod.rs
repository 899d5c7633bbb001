//! Service layer for business rules.
//!
//! Services wrap repositories with the duplicate-safe upsert protocol: before any create or
//! update request is sent, the natural key of the candidate is looked up and a conflicting
//! record rejects the operation with [`DuplicateEntityError`]. Stores talk to services only
//! through [`CrudService`], so one generic store serves every entity type.

pub mod combine_score;
pub mod draft_pick;
pub mod draft_selection;
pub mod player;
pub mod player_award;
pub mod schedule;
pub mod team;
pub mod team_dropdown;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;

use crate::{
    client::error::{duplicate::DuplicateEntityError, Error},
    model::Entity,
};

/// Common CRUD operations of an entity service.
#[allow(async_fn_in_trait)]
pub trait CrudService {
    type Entity: Entity;

    async fn get_all(&self) -> Result<Vec<Self::Entity>, Error>;

    async fn get_by_id(&self, id: i32) -> Result<Self::Entity, Error>;

    /// Creates a record, rejecting it with [`Error::DuplicateEntity`] if its natural key is taken
    async fn create(&self, item: &Self::Entity) -> Result<Self::Entity, Error>;

    /// Replaces record `id`, rejecting it if another record holds the same natural key
    async fn update(&self, id: i32, item: &Self::Entity) -> Result<Self::Entity, Error>;

    async fn delete(&self, id: i32) -> Result<(), Error>;
}

/// Create-or-update keyed on the natural key.
#[allow(async_fn_in_trait)]
pub trait UpsertService: CrudService {
    /// Creates `item`, or updates the record already holding its natural key.
    ///
    /// A [`DuplicateEntityError`] carrying the existing identifier redirects the operation to
    /// [`CrudService::update`] of that record, which repeats the duplicate scan. Any other
    /// failure, including a duplicate without identifier, is returned unchanged.
    async fn create_or_update(&self, item: &Self::Entity) -> Result<Self::Entity, Error> {
        match self.create(item).await {
            Err(Error::DuplicateEntity(DuplicateEntityError {
                existing_id: Some(existing_id),
                ..
            })) => {
                tracing::debug!(
                    "{} already exists with ID {}, updating instead",
                    <Self::Entity as Entity>::NAME,
                    existing_id
                );

                self.update(existing_id, item).await
            }
            result => result,
        }
    }
}

/// Fails with a [`DuplicateEntityError`] when `existing` is a record other than `own_id`.
///
/// Create passes `None` as `own_id` so any match is a conflict, update passes the identifier
/// being updated so a record is allowed to match itself.
///
/// # Arguments
/// - `existing` - Record found holding the candidate's natural key, if any
/// - `own_id` - Identifier of the record being updated
/// - `message` - Builds the error message from the conflicting record
pub(crate) fn ensure_unique<E, F>(
    existing: Option<E>,
    own_id: Option<i32>,
    message: F,
) -> Result<(), DuplicateEntityError>
where
    E: Entity,
    F: FnOnce(&E) -> String,
{
    match existing {
        Some(existing) if own_id.is_none() || existing.id() != own_id => {
            let err = DuplicateEntityError::new(message(&existing), E::NAME, existing.id());
            tracing::debug!("Duplicate {} rejected: {}", E::NAME, err);

            Err(err)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod ensure_unique_tests {
    use super::*;
    use crate::model::Team;

    fn team(id: i32) -> Team {
        Team {
            id: Some(id),
            name: "Eagles".to_string(),
            ..Default::default()
        }
    }

    /// Expect any match to conflict on create
    #[test]
    fn rejects_any_match_on_create() {
        let result = ensure_unique(Some(team(1)), None, |t| format!("{} taken", t.name));

        assert_eq!(
            result,
            Err(DuplicateEntityError::new("Eagles taken", "Team", Some(1)))
        );
    }

    /// Expect a record to be allowed to match itself on update
    #[test]
    fn allows_self_match_on_update() {
        assert!(ensure_unique(Some(team(1)), Some(1), |_| String::new()).is_ok());
        assert!(ensure_unique(Some(team(1)), Some(2), |_| String::new()).is_err());
        assert!(ensure_unique(None::<Team>, None, |_| String::new()).is_ok());
    }
}
