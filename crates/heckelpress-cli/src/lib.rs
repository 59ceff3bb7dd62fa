//! Heckel press CLI library.
//!
//! This crate provides command-line interface utilities for the Heckel
//! compaction calculator, including terminal styling and output formatting.

pub mod commands;
pub mod output;
pub mod terminal;
