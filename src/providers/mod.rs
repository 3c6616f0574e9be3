pub mod fixer;

pub use fixer::FixerRateClient;
