//! Command implementations.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use owo_colors::Style;
use shortnames_core::Dictionary;
use shortnames_core::config::{Config, ConfigSources};

pub mod dict;
pub mod info;
pub mod shorten;

/// Style for section headings in human-readable output.
fn heading() -> Style {
    Style::new().bold().underline()
}

/// Build the dictionary for a command.
///
/// Files given on the command line resolve against `cwd` and take priority
/// over the dictionaries named in the configuration, which in turn take
/// priority over the built-in rules.
pub fn load_dictionary(
    config: &Config,
    sources: &ConfigSources,
    cwd: &Utf8Path,
    extra: &[Utf8PathBuf],
    no_builtin: bool,
) -> anyhow::Result<Dictionary> {
    let mut config = config.clone();
    let mut dictionaries: Vec<Utf8PathBuf> = extra
        .iter()
        .map(|path| {
            if path.is_relative() {
                cwd.join(path)
            } else {
                path.clone()
            }
        })
        .collect();
    dictionaries.append(&mut config.dictionaries);
    config.dictionaries = dictionaries;
    config.no_builtin_dictionary |= no_builtin;

    config
        .load_dictionary(sources)
        .context("failed to load dictionary")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_line_dictionary_comes_first() {
        let tmp = TempDir::new().unwrap();
        let cwd = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        fs::write(
            cwd.join("extra.toml"),
            "[[abbreviations]]\nphrase = \"ulica\"\nabbreviation = \"u.\"\n",
        )
        .unwrap();

        let dict = load_dictionary(
            &Config::default(),
            &ConfigSources::default(),
            &cwd,
            &[Utf8PathBuf::from("extra.toml")],
            false,
        )
        .unwrap();

        let rules = dict.rules_for_word("Ulica");
        assert_eq!(rules[0].abbreviation, "u.");
        assert_eq!(rules[1].abbreviation, "ul.");
    }

    #[test]
    fn no_builtin_leaves_empty_dictionary() {
        let dict = load_dictionary(
            &Config::default(),
            &ConfigSources::default(),
            Utf8Path::new("."),
            &[],
            true,
        )
        .unwrap();
        assert!(dict.abbreviations().is_empty());
        assert!(dict.given_names().is_empty());
    }

    #[test]
    fn missing_dictionary_is_an_error() {
        let result = load_dictionary(
            &Config::default(),
            &ConfigSources::default(),
            Utf8Path::new("/nonexistent"),
            &[Utf8PathBuf::from("missing.toml")],
            false,
        );
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("missing.toml"), "unexpected error: {err}");
    }
}
