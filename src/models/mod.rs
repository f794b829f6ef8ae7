pub mod config;

pub use config::{RunConfig, DEFAULT_SUFFIX, SUFFIX_ENV};
