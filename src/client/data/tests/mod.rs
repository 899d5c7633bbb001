mod schedule;

use draftboard_test_utils::prelude::*;
use serde_json::json;

use crate::client::{error::Error, util::test::api_client};
