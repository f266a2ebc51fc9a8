//! Catalog loading and querying.

/// JSON-backed catalog store.
pub mod store;
/// Filtering and highlights selection over loaded records.
pub mod query;

pub use query::{filter, highlights, DEFAULT_HIGHLIGHT_COUNT};
pub use store::{CatalogError, CatalogStore};
