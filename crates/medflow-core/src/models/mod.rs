//! Domain models for the clinic aggregate.

mod aggregate;
mod appointment;
mod consultant;
mod patient;
mod settings;

pub use aggregate::*;
pub use appointment::*;
pub use consultant::*;
pub use patient::*;
pub use settings::*;
