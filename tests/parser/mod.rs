//! Parser layer tests
//!
//! Scanner behaviour over realistic inputs:
//! - Destructuring patterns
//! - Type bodies
//! - Normalization idempotence

mod tests_scanner_properties;
