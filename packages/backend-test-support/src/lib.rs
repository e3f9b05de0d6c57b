//! Test support utilities shared by the bowling integration tests.
//!
//! This crate provides unified logging initialization so every test binary
//! gets the same quiet-by-default subscriber.

pub mod logging;
