mod appsync;
mod error;

pub use appsync::AppSyncHandler;
