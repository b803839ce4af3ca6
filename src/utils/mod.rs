//! # Utilities Module
//!
//! Utility functions for stepping and heading mathematics.

pub mod math;

pub use math::*;
