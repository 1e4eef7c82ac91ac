mod service;
mod stats;

pub use service::{is_refresh_due, UpdateService};
pub use stats::SweepStats;
