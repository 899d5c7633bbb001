pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod service;
pub mod store;
pub mod transport;
pub mod util;

pub use app::AppState;
