//! In-memory storage backend for testing.
//!
//! Records live in a `BTreeMap` wrapped in `Arc<RwLock<_>>`, which keeps
//! them in ascending identifier order the same way the account index does.

mod repository;

pub use repository::InMemoryRepository;
