pub mod config;
pub mod errors;

pub use config::{AppConfig, LoggingConfig, OutputConfig};
pub use errors::{ConverterError, Result};
