//! Error types for shortnames-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A dictionary file referenced by the configuration could not be used.
    #[error("dictionary {path}: {source}")]
    Dictionary {
        /// The dictionary path as resolved against the config location.
        path: Utf8PathBuf,
        /// What went wrong while loading it.
        #[source]
        source: DictionaryError,
    },
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while building or loading a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// An abbreviation rule has an empty phrase.
    #[error("abbreviation rule {index} has an empty phrase")]
    EmptyPhrase {
        /// Position of the rule in its source list.
        index: usize,
    },

    /// A given-name entry is empty.
    #[error("given name {index} is empty")]
    EmptyGivenName {
        /// Position of the entry in its source list.
        index: usize,
    },

    /// The dictionary file does not exist.
    #[error("dictionary file not found: {0}")]
    NotFound(Utf8PathBuf),

    /// The dictionary file could not be read or parsed.
    #[error("failed to load dictionary file: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Result type alias using [`DictionaryError`].
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Which buffer a capacity check applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The name being shortened.
    Input,
    /// The short form under construction.
    Short,
    /// The shortest form under construction.
    Shortest,
}

impl Field {
    /// Returns the field name as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Short => "short",
            Self::Shortest => "shortest",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while shortening a name.
#[derive(Error, Debug)]
pub enum ShortenError {
    /// The input or one of the outputs would exceed the configured capacity.
    #[error("{field} is {len} characters (limit: {max})")]
    CapacityExceeded {
        /// Which buffer overflowed.
        field: Field,
        /// Length in characters the buffer would have reached.
        len: usize,
        /// The configured limit.
        max: usize,
    },

    /// The input bytes are not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Result type alias using [`ShortenError`].
pub type ShortenResult<T> = Result<T, ShortenError>;
