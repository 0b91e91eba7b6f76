// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config Error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Config Error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
    #[error("Catalog Error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Problems found while loading a story catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The file is not valid TOML or does not match the catalog layout.
    #[error("malformed catalog: {0}")]
    Malformed(String),

    /// Two authors share the same id.
    #[error("duplicate author id: {0}")]
    DuplicateAuthor(String),

    /// Two items share the same id (item ids are global across authors).
    #[error("duplicate item id: {0}")]
    DuplicateItem(String),
}

pub type Result<T> = std::result::Result<T, Error>;
