//! Test helpers module
//!
//! This module provides utilities for testing the OrbitView client.
//! It includes a mock backend, JSON fixtures and test context setup.

#![allow(dead_code)]

pub mod backend_mock;
pub mod test_context;
pub mod test_data;

#[allow(unused_imports)]
pub use backend_mock::*;
#[allow(unused_imports)]
pub use test_context::*;
#[allow(unused_imports)]
pub use test_data::*;
