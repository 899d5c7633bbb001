//! Mock HTTP endpoint creation utilities.
//!
//! Each helper registers a mockito endpoint on the setup's server and returns the `Mock` so
//! the test can verify it was called exactly `expected_requests` times. Paths are matched
//! together with their query string.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::TestSetup;

impl TestSetup {
    /// Create a mock GET endpoint returning `body` as JSON.
    ///
    /// # Arguments
    /// - `path` - Request path including any query string
    /// - `body` - JSON body to return, bare or enveloped
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn with_get_endpoint(&mut self, path: &str, body: Value, expected_requests: usize) -> Mock {
        self.json_endpoint("GET", path, 200, body, expected_requests)
    }

    /// Create a mock POST endpoint returning the created record.
    ///
    /// Any request body is accepted, use [`TestSetup::with_create_endpoint_matching`] to
    /// assert on the request body.
    pub fn with_create_endpoint(
        &mut self,
        path: &str,
        created: Value,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint("POST", path, 201, created, expected_requests)
    }

    /// Create a mock POST endpoint that only matches requests containing `partial_body`.
    pub fn with_create_endpoint_matching(
        &mut self,
        path: &str,
        partial_body: Value,
        created: Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("POST", path)
            .match_body(Matcher::PartialJson(partial_body))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(created.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock PUT endpoint returning the updated record.
    pub fn with_update_endpoint(
        &mut self,
        path: &str,
        updated: Value,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint("PUT", path, 200, updated, expected_requests)
    }

    /// Create a mock DELETE endpoint answering 204 No Content.
    pub fn with_delete_endpoint(&mut self, path: &str, expected_requests: usize) -> Mock {
        self.server
            .mock("DELETE", path)
            .with_status(204)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering with an arbitrary status and JSON body.
    ///
    /// Used for error responses, e.g. `{ "error": "Team not found" }` with 404.
    pub fn with_status_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint(method, path, status, body, expected_requests)
    }

    /// Create a mock endpoint that must never be called.
    ///
    /// Registered for mutating requests that duplicate detection is expected to prevent.
    pub fn with_forbidden_call(&mut self, method: &str, path: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(500)
            .expect(0)
            .create()
    }

    fn json_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
