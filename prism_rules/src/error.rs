//! Errors raised while building or loading rules.

use thiserror::Error;

/// Failure to assemble a keyword table or domain catalog.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("unknown foundation: {0}")]
    UnknownFoundation(String),

    #[error("domain catalog is empty")]
    EmptyCatalog,

    #[error("duplicate domain id: {0}")]
    DuplicateDomain(String),

    #[error("default domain '{0}' is not in the catalog")]
    UnknownDefaultDomain(String),

    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rules file: {0}")]
    Parse(#[from] toml::de::Error),
}
