//! Milestone and badge progress computation for the Praise dashboard
//!
//! Everything here is pure: callers fetch badge definitions and stats from the
//! backend and pass them in; nothing is cached or mutated in place.

pub mod charts;
pub mod progress;
pub mod repos;
pub mod session;
pub mod timeline;
pub mod transform;

#[cfg(test)]
mod progress_test;

pub use progress::{compute_progress, ProgressSummary};
pub use transform::{transform, Milestone};
