//! Built-in dictionaries for name shortening.
//!
//! Provides the ordered abbreviation pairs and the given-name list that
//! [`crate::dictionary::builtin`] compiles into a [`crate::Dictionary`].

pub mod abbreviations;
pub mod given_names;
