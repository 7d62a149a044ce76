// SPDX-License-Identifier: MPL-2.0
//! Application-wide error type.
//!
//! Navigation itself never fails; errors only surface at the edges
//! (configuration files, embedded assets, catalog construction).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// An image reference could not be resolved to asset bytes.
    #[error("Asset Error: {0}")]
    Asset(String),

    /// Localization resources failed to parse or register.
    #[error("I18n Error: {0}")]
    I18n(String),

    #[error("Gallery collection must contain at least one item")]
    EmptyCollection,

    #[error("Duplicate gallery item id: {0}")]
    DuplicateItemId(u32),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
