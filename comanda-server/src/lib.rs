//! Comanda server - authoritative stores for the table-ordering workflow
//!
//! Hosts the order store (the only status mutation path), the read-only
//! menu catalog and table directory, and the mock credential check.
//! [`backend::LocalBackend`] serves `shared::client::Backend` - the
//! collaborator interface consumed by the client crate - from these
//! in-process stores.

pub mod auth;
pub mod backend;
pub mod catalog;
pub mod orders;
pub mod seed;
pub mod tables;

// Re-exports
pub use auth::CredentialStore;
pub use backend::LocalBackend;
pub use shared::client::Backend;
pub use catalog::MenuCatalog;
pub use orders::OrderStore;
pub use tables::TableDirectory;
