//! Integration test suite for the column engine.
//!
//! Tests are organized by concern:
//! 1. Column lifecycle (construct, add, modify, delete)
//! 2. Persistence of serialized columns
//! 3. Randomized operation sequences checked against a reference model

pub mod model_tests;
pub mod persistence_tests;
