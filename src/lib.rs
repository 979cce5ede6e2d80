//! Shared library for the termi-cheat reference tool.
//!
//! The crate loads topic-grouped command examples from the JSON files of a
//! store directory and renders them for the terminal. Public items here form
//! the contract the binaries depend on: store discovery, the cached loader,
//! and the three output modes (single lookup, cross-document search, listing).

pub mod app;
pub mod cache;
pub mod cli;
pub mod document;
pub mod listing;
pub mod loader;
pub mod render;
pub mod search;
pub mod store;

pub use app::{App, EXIT_FAILURE, EXIT_OK, EXIT_USAGE, Mode};
pub use cache::{DEFAULT_CACHE_CAPACITY, DocumentCache};
pub use document::{Document, Entry, parse_document, read_document};
pub use listing::render_listing;
pub use loader::Loader;
pub use render::{render_document, render_lookup_header};
pub use search::{DEFAULT_MAX_RESULTS, SearchSummary, search_files, search_store};
pub use store::{STORE_DIR_NAME, Store, find_store_dir};
