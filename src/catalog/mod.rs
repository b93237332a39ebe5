//! # Catalog
//!
//! Book records, the identifier sequence that names them, and the concurrent
//! store that holds them for the lifetime of the process.

mod errors;
mod record;
mod sequence;
mod store;

pub use errors::{CatalogError, CatalogResult, ErrorKind};
pub use record::{generate_code, Record, CODE_PREFIX, CODE_RANDOM_DIGITS};
pub use sequence::IdentifierSequence;
pub use store::{Snapshot, Store};
