//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Legal-move tree counts against published tables
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

mod perft;
