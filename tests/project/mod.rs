//! Project layer tests
//!
//! Component files on disk and the props cache.

mod tests_props_cache;
