//! Comanda client - device-side ordering workflow
//!
//! Everything a customer or staff device runs locally: the
//! session/role gate, the table resolver, the per-table cart with
//! best-effort local persistence, and the two polling synchronizers
//! that keep views consistent with the order store.
//!
//! All state is carried in explicitly passed context objects (a
//! [`session::Session`], a [`cart::CartManager`] per table, poller
//! handles); there are no process-wide singletons.

pub mod cart;
pub mod config;
pub mod logger;
pub mod poll;
pub mod resolver;
pub mod session;
pub mod storage;

// Re-exports
pub use cart::CartManager;
pub use config::ClientConfig;
pub use poll::{CustomerOrderPoller, StaffQueuePoller};
pub use resolver::TableResolver;
pub use session::Session;
pub use storage::{BlobStorage, FileStorage, MemoryStorage};
