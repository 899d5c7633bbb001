//! Fixtures for the mock draft backend.
//!
//! `factory` builds JSON records shaped like the backend's responses, `endpoint` registers
//! mockito endpoints that serve them.

pub mod endpoint;
pub mod factory;
