use thiserror::Error;

#[derive(Error, Debug)]
pub enum FcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The result of a path operation would not fit in `MAX_PATH` characters
    #[error("Path too long: {0}")]
    Overflow(String),

    /// Structurally unusable input, e.g. a path with no root to strip to
    #[error("Malformed path: {0}")]
    MalformedInput(String),

    /// A pattern or file matched nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Two extension-only listings ran out at different times; `missing` is
    /// `entry` with the counterpart pattern's `extension` substituted in
    #[error("Listings out of step: {entry} has no counterpart {missing}")]
    Desynchronized {
        entry: String,
        missing: String,
        extension: String,
    },

    #[error("Invalid switch: {0}")]
    InvalidSwitch(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, FcError>;
