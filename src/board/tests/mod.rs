//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `occupancy.rs` - put/remove behavior and atomicity
//! - `edge_cases.rs` - unbounded squares, wide boards, notation limits
//! - `proptest.rs` - Property-based tests
