pub mod config;
pub mod error;

pub use config::ReaderConfig;
pub use error::{ConfigError, InfrastructureError};
