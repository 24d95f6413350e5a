//! Core library surface for the Pets TUI application.
//!
//! The catalog and editor screens sit on top of a URI-addressed provider
//! backed by SQLite. The `bin` target only wires configuration, logging and
//! the provider together before handing control to the event loop.
pub mod config;
pub mod contract;
pub mod db;
pub mod loader;
pub mod logging;
pub mod models;
pub mod provider;
pub mod ui;

pub use config::Config;
pub use contract::PetUri;

/// The domain types that other layers manipulate.
pub use models::{Gender, Pet, PetSummary, PetValues};

/// The provider seam and its SQLite implementation.
pub use provider::{PetProvider, ProviderError, SqlitePetProvider};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
