pub mod converter;
pub mod discovery;

pub use converter::{BatchReport, ThemeConverter};
pub use discovery::{discover_inputs, DiscoveryReport};
