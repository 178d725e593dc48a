//! CLI infrastructure for the tic-tac-toe minimax toolkit
//!
//! This module provides the command-line interface for playing against the
//! search, running agent series, and analyzing or exporting board values.

pub mod commands;
pub mod config;
pub mod output;
