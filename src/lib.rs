pub mod config;
pub mod controls;
pub mod driver;
pub mod error;
pub mod issue;
pub mod tracker;

pub use config::Config;
pub use error::{Error, Result};

#[cfg(test)]
pub(crate) mod test_support;
