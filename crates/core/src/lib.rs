//! Functional core for the locations service.
//!
//! Pure types and functions only: the location variant model, the repository
//! contract, the pagination cursor codec, and the AppSync routing/response
//! shaping. All I/O lives in the `locations` crate.

pub mod appsync;
pub mod location;
pub mod storage;
