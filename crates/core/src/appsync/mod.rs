//! AppSync direct-resolver contract: inbound envelope, routing table,
//! argument shapes and response shaping.

mod arguments;
mod event;
mod operation;
mod response;

pub use arguments::{
    CreateLocationArguments, DeleteLocationArguments, GetLocationArguments,
    ListLocationsArguments, LocationKeyArguments, UpdateLocationArguments,
};
pub use event::{AppSyncEvent, AppSyncInfo, AppSyncRequest};
pub use operation::Operation;
pub use response::{ListLocationsResponse, LocationResponse};
