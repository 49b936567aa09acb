//! Entity storage for an interactive session.
//!
//! Everything lives in process memory and is dropped with the session.

pub mod memory;

pub use memory::InMemoryStore;
