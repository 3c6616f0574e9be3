//! Core business logic abstractions

pub mod config;
pub mod error;
pub mod key_store;
pub mod log;
pub mod rate;

// Re-export main types for cleaner imports
pub use error::{ErrorKind, RateError};
pub use key_store::{AccessKeyProvider, PropertiesKeyStore, StaticAccessKey};
pub use rate::{ExchangeRateProvider, RateDate, RateDocument};
