//! Ports (trait boundaries) between the game core and its drivers.
//!
//! The match runner only talks to agents and observers through these traits;
//! concrete implementations live in [`pipeline`](crate::pipeline) and in the
//! CLI.

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::Observer;
