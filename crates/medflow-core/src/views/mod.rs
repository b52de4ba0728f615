//! Derived view models, recomputed from the aggregate on demand.

pub mod calendar;
pub mod log;
pub mod reports;
