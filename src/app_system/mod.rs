//! Process setup and the demonstration driver.

pub mod demo;
pub mod telemetry;

pub use demo::*;
pub use telemetry::*;
