mod cursor;
mod error;
mod error_kind;
mod traits;
mod types;

pub use cursor::{CursorError, PaginationCursor};
pub use error::{RepositoryError, Result};
pub use error_kind::{repository_error_kind, ErrorKind};
pub use traits::LocationRepository;
pub use types::{ListOptions, LocationPage, StoredLocation, DEFAULT_PAGE_SIZE};
