//! Slipbox Core Library
//!
//! Domain logic for the slipbox link-graph analyzer: parsing zetteldeft-style
//! notes, aggregating them into an in-memory link graph, and deriving
//! collection statistics.

pub mod collection;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod note;
pub mod scan;
