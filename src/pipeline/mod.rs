//! Match-play pipeline
//!
//! This module provides:
//! - Agent implementations (minimax, random)
//! - The match runner that plays agents against each other
//! - Observers for printing boards and tracking progress

pub mod agents;
pub mod observers;
pub mod series;

pub use agents::{MinimaxAgent, RandomAgent};
pub use observers::{BoardPrinter, ProgressObserver};
pub use series::{MatchRunner, SeriesResult, play_match};

pub use crate::ports::{Agent, Observer};
