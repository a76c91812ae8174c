//! quizdeck-core: quiz state engine.
//!
//! This crate defines the topic and question model, the scoring engine, the
//! progress store with its persistence gateway, and the session controller
//! that sequences user events over them.

pub mod aggregate;
pub mod error;
pub mod model;
pub mod parser;
pub mod persistence;
pub mod progress;
pub mod scoring;
pub mod session;
pub mod traits;
pub mod view;
