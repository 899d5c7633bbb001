mod draft_pick;
mod draft_selection;
mod team_dropdown;

use draftboard_test_utils::prelude::*;
use serde_json::json;

use crate::client::{
    error::{duplicate::DuplicateEntityError, Error},
    service::{CrudService, UpsertService},
    util::test::api_client,
};

/// Duplicate error carried by `result`, panics on any other outcome
fn expect_duplicate<T: std::fmt::Debug>(result: Result<T, Error>) -> DuplicateEntityError {
    match result {
        Err(Error::DuplicateEntity(err)) => err,
        other => panic!("expected a duplicate error, got {:?}", other),
    }
}
