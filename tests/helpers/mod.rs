//! Shared fixtures and assertions for integration tests.

#![allow(dead_code)]

pub mod component_fixtures;
pub mod props_assertions;
