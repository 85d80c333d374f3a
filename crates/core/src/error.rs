//! Error types for Pigeonhole Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Directory has no contacts")]
    EmptyDirectory,

    #[error("Duplicate contact id: {0}")]
    DuplicateContact(String),

    #[error("Unknown contact id: {0}")]
    UnknownContact(String),

    #[error("Message text is empty")]
    EmptyText,

    #[error("No recipient selected")]
    NoRecipient,

    #[error("Seed parse error: {0}")]
    SeedParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
