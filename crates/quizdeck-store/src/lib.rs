//! quizdeck-store: durable stores, quiz sources, and configuration.
//!
//! Implements the `DurableStore` and `QuizSource` traits from
//! `quizdeck-core` for the local filesystem, plus an in-memory store for
//! tests and ephemeral sessions.

pub mod config;
pub mod file;
pub mod memory;
pub mod source;

pub use config::{load_config_from, QuizdeckConfig};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use source::{DirectorySource, CATALOG_FILE};
