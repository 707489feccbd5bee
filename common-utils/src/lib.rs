//! # Common utils
//!
//! This library provides functionality needed in more than one of our tweet pattern crates.

pub mod date_utils;
