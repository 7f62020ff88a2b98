//! Tools an assistant can call.
pub mod error;
pub mod weather;

pub use weather::{WeatherReport, WeatherTool};
