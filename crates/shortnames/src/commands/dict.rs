//! Dict command: inspect the active dictionary.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout};
use serde::Serialize;
use shortnames_core::config::{Config, ConfigSources};
use shortnames_core::{AbbreviationRule, Dictionary, DictionaryStats};
use tracing::{debug, instrument};

use super::heading;

/// Arguments for the `dict` subcommand.
#[derive(Args, Debug, Default)]
pub struct DictArgs {
    /// List the rules that can apply at WORD, in priority order
    #[arg(short, long, value_name = "WORD")]
    pub lookup: Option<String>,

    /// Extra dictionary file, searched before all others (repeatable)
    #[arg(short, long = "dictionary", value_name = "FILE")]
    pub dictionaries: Vec<Utf8PathBuf>,

    /// Leave out the built-in dictionary
    #[arg(long)]
    pub no_builtin: bool,
}

#[derive(Serialize)]
struct Lookup<'a> {
    word: &'a str,
    abbreviations: Vec<&'a AbbreviationRule>,
    given_name: bool,
}

impl<'a> Lookup<'a> {
    fn new(dictionary: &'a Dictionary, word: &'a str) -> Self {
        Self {
            word,
            abbreviations: dictionary.rules_for_word(word),
            given_name: dictionary.is_given_name(word),
        }
    }
}

/// Print dictionary statistics, or the rules matching a word.
#[instrument(name = "cmd_dict", skip_all, fields(lookup = ?args.lookup))]
pub fn cmd_dict(
    args: DictArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    cwd: &Utf8Path,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing dict command");

    let dictionary =
        super::load_dictionary(config, sources, cwd, &args.dictionaries, args.no_builtin)?;

    match args.lookup {
        Some(ref word) => {
            let lookup = Lookup::new(&dictionary, word);
            if global_json {
                println!("{}", serde_json::to_string_pretty(&lookup)?);
            } else {
                print_lookup(&lookup);
            }
        }
        None => {
            let stats = dictionary.stats();
            if global_json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&stats);
            }
        }
    }

    Ok(())
}

fn print_stats(stats: &DictionaryStats) {
    println!("{}", "Dictionary".if_supports_color(Stdout, |t| t.style(heading())));
    for (label, count) in [
        ("Abbreviation rules", stats.abbreviations),
        ("Omission rules", stats.omissions),
        ("Multi-word phrases", stats.multi_word),
        ("Given names", stats.given_names),
    ] {
        println!("{}: {count}", label.if_supports_color(Stdout, |t| t.dimmed()));
    }
}

fn print_lookup(lookup: &Lookup<'_>) {
    if lookup.abbreviations.is_empty() && !lookup.given_name {
        println!(
            "{}: {}",
            lookup.word.if_supports_color(Stdout, |t| t.bold()),
            "no rules".if_supports_color(Stdout, |t| t.yellow())
        );
        return;
    }

    for rule in &lookup.abbreviations {
        if rule.is_omission() {
            println!(
                "{} → {}",
                rule.phrase,
                "(omitted)".if_supports_color(Stdout, |t| t.dimmed())
            );
        } else {
            println!(
                "{} → {}",
                rule.phrase,
                rule.abbreviation.if_supports_color(Stdout, |t| t.green())
            );
        }
    }
    if lookup.given_name {
        println!(
            "{} {}",
            lookup.word,
            "(given name)".if_supports_color(Stdout, |t| t.cyan())
        );
    }
}
