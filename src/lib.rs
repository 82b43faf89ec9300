//! Sorting and prefix search for library-catalog records.
//!
//! This crate is the algorithmic core of a catalog browser: callers fetch
//! books and genres from their API, sort the collection once, then search the
//! sorted result as the user types and page the output for display. Ordering
//! and matching are case- and diacritic-insensitive throughout.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│ quicksort.rs  │────▶│  search.rs   │
//! │ (Book,Genre,│     │ insertion.rs  │     │ (binary and  │
//! │  SortKey)   │     │  (ordering)   │     │ linear scan) │
//! └─────────────┘     └───────────────┘     └──────────────┘
//!        │                    │                     │
//!        └──────────────┬─────┴─────────────────────┘
//!                       ▼
//!               ┌──────────────┐
//!               │ normalize.rs │
//!               │ (key folding)│
//!               └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use shelfsort::{binary_search_prefix, quick_sorted, Book};
//!
//! let catalog: Vec<Book> = serde_json::from_str(
//!     r#"[{"id": "1", "title": "Dune"}, {"id": "2", "title": "Dracula"}]"#,
//! ).unwrap();
//!
//! let sorted = quick_sorted(&catalog);
//! let hits = binary_search_prefix(&sorted, "dra");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].title, "Dracula");
//! ```
//!
//! # Blocking behavior
//!
//! [`quick_sort`], [`binary_search_prefix`], and [`linear_search_prefix`] are
//! synchronous and run to completion on the calling thread - O(n log n),
//! O(log n + k), and O(n) of blocking work respectively. Only
//! [`insertion_sort`] suspends; it yields a scheduling tick at chunk
//! boundaries so an event loop sharing its thread stays responsive. None of
//! the operations support cancellation. The engine is stateless: callers own
//! the arrays, and callers cache expensive sort results.

// Module declarations
mod insertion;
mod normalize;
mod quicksort;
mod search;
pub mod testing;
mod types;

// Re-exports for public API
pub use insertion::{
    insertion_sort, insertion_sort_configured, insertion_sort_with_progress, YieldThresholds,
    ROWS_PER_TICK, SHIFTS_PER_CHUNK,
};
pub use normalize::normalize_key;
pub use quicksort::{quick_sort, quick_sorted};
pub use search::{
    binary_search_prefix, ensure_sorted_by_key, is_sorted_by_key, linear_search_prefix, OrderError,
};
pub use types::{Book, Genre, SortKey};
