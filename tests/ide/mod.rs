//! IDE layer tests
//!
//! Presentation of extraction results for hover and completion.

mod tests_hover;
