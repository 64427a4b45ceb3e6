//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod encode;
pub mod export;
pub mod summary;
