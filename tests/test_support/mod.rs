//! Shared fixtures for the integration tests: sample catalog loading and submit shortcuts.
//! Note: Declare `mod test_support;` in each test file that uses it.

#![allow(unused)] // Not every test file uses every helper

mod helpers;

pub use helpers::*;

type TestResult<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.
