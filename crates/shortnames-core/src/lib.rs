//! Core library for shortnames.
//!
//! This crate abbreviates street and place names for map labels. Every name
//! yields two forms: a *short* form where known phrases are abbreviated
//! ("ulica" → "ul.") and a *shortest* form that also drops the abbreviated
//! phrases and given names, keeping the distinctive remainder.
//!
//! # Modules
//!
//! - [`shorten`] - The shortening engine
//! - [`dictionary`] - Abbreviation and given-name rule lists
//! - [`dictionaries`] - Built-in rule data
//! - [`classifier`] - Character classification used for matching
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use shortnames_core::shorten_name;
//!
//! let name = shorten_name("ulica Świętego Jana Kowalskiego").unwrap();
//! assert_eq!(name.short, "ul. Św. J. Kowalskiego");
//! assert_eq!(name.shortest, "Kowalskiego");
//! ```
#![deny(unsafe_code)]

pub mod classifier;
pub mod config;
pub mod dictionaries;
pub mod dictionary;
pub mod error;
pub mod shorten;

pub use classifier::{TextClassifier, UnicodeClassifier};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel, OutputFormat};
pub use dictionary::{
    AbbreviationRule, Dictionary, DictionaryBuilder, DictionaryFile, DictionaryStats,
    GivenNameRule,
};
pub use error::{
    ConfigError, ConfigResult, DictionaryError, DictionaryResult, Field, ShortenError,
    ShortenResult,
};
pub use shorten::{Capacity, ShortenedName, Shortener, shorten_name};
