use mockito::{Mock, Server, ServerGuard};

/// Mock REST backend shared by client tests.
///
/// Endpoints are registered through the helpers in [`crate::fixtures::endpoint`] and verified
/// either individually with `Mock::assert` or all at once with [`TestSetup::assert_mocks`].
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Self {
        let server = Server::new_async().await;

        TestSetup {
            server,
            mocks: Vec::new(),
        }
    }

    /// Base URL of the mock backend
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Keep a mock alive until the end of the test and verify it in [`TestSetup::assert_mocks`]
    pub fn track(&mut self, mock: Mock) {
        self.mocks.push(mock);
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Calls `assert()` on all mocks tracked by the setup to verify they were invoked the
    /// expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
