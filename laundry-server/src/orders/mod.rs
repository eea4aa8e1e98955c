//! Order lifecycle services
//!
//! - [`progression`]: time-based status advancement
//! - [`scheduler`]: in-server periodic runner for progression

pub mod progression;
pub mod scheduler;

pub use progression::{Advance, ProgressionReport, TRANSITIONS, Transition, progress_orders};
pub use scheduler::ProgressionScheduler;
