//! Info command: package details and the effective configuration.

use clap::Args;
use owo_colors::{OwoColorize, Stream::Stdout};
use serde::Serialize;
use shortnames_core::config::{Config, ConfigSources, user_config_dir};
use tracing::{debug, instrument};

use super::heading;

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_config_dir: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_chars: Option<usize>,
    unbounded: bool,
    output_format: String,
    builtin_dictionary: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dictionaries: Vec<String>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            user_config_dir: user_config_dir().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_chars: config.max_chars,
            unbounded: config.unbounded,
            output_format: config.output_format.unwrap_or_default().to_string(),
            builtin_dictionary: !config.no_builtin_dictionary,
            dictionaries: config.dictionaries.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let info = PackageInfo::new();

    debug!(json_output = global_json, "executing info command");

    let config_info = ConfigInfo::from_config(config, sources);
    let full_info = FullInfo {
        package: info,
        config: config_info,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
    } else {
        println!(
            "{} {}",
            full_info.package.name.if_supports_color(Stdout, |t| t.bold()),
            full_info.package.version.if_supports_color(Stdout, |t| t.green())
        );
        if !full_info.package.description.is_empty() {
            println!("{}", full_info.package.description);
        }
        if !full_info.package.license.is_empty() {
            println!(
                "{}: {}",
                "License".if_supports_color(Stdout, |t| t.dimmed()),
                full_info.package.license
            );
        }
        if !full_info.package.repository.is_empty() {
            println!(
                "{}: {}",
                "Repository".if_supports_color(Stdout, |t| t.dimmed()),
                full_info.package.repository.if_supports_color(Stdout, |t| t.cyan())
            );
        }
        if !full_info.package.homepage.is_empty() {
            println!(
                "{}: {}",
                "Homepage".if_supports_color(Stdout, |t| t.dimmed()),
                full_info.package.homepage.if_supports_color(Stdout, |t| t.cyan())
            );
        }

        // Configuration section
        println!();
        println!("{}", "Configuration".if_supports_color(Stdout, |t| t.style(heading())));
        if let Some(ref path) = full_info.config.config_file {
            println!(
                "{}: {}",
                "Config file".if_supports_color(Stdout, |t| t.dimmed()),
                path.if_supports_color(Stdout, |t| t.cyan())
            );
        } else {
            println!(
                "{}: {}",
                "Config file".if_supports_color(Stdout, |t| t.dimmed()),
                "none loaded".if_supports_color(Stdout, |t| t.yellow())
            );
        }
        println!(
            "{}: {}",
            "Log level".if_supports_color(Stdout, |t| t.dimmed()),
            full_info.config.log_level
        );
        if let Some(ref dir) = full_info.config.log_dir {
            println!(
                "{}: {dir}",
                "Log directory".if_supports_color(Stdout, |t| t.dimmed())
            );
        }
        if let Some(ref dir) = full_info.config.user_config_dir {
            println!(
                "{}: {dir}",
                "User config dir".if_supports_color(Stdout, |t| t.dimmed())
            );
        }

        println!();
        println!("{}", "Shortening".if_supports_color(Stdout, |t| t.style(heading())));
        if full_info.config.unbounded {
            println!(
                "{}: {}",
                "Max chars".if_supports_color(Stdout, |t| t.dimmed()),
                "unbounded".if_supports_color(Stdout, |t| t.yellow())
            );
        } else {
            print_opt("Max chars", &full_info.config.max_chars);
        }
        println!(
            "{}: {}",
            "Output format".if_supports_color(Stdout, |t| t.dimmed()),
            full_info.config.output_format
        );
        println!(
            "{}: {}",
            "Built-in dictionary".if_supports_color(Stdout, |t| t.dimmed()),
            if full_info.config.builtin_dictionary {
                "yes"
            } else {
                "no"
            }
        );
        if !full_info.config.dictionaries.is_empty() {
            println!(
                "{}: {}",
                "Dictionaries".if_supports_color(Stdout, |t| t.dimmed()),
                full_info.config.dictionaries.join(", ")
            );
        }
    }

    Ok(())
}

/// Print an optional numeric value or "(default)".
fn print_opt<T: std::fmt::Display>(label: &str, value: &Option<T>) {
    let label = label.if_supports_color(Stdout, |t| t.dimmed());
    match value {
        Some(v) => println!("{label}: {v}"),
        None => println!(
            "{label}: {}",
            "(default)".if_supports_color(Stdout, |t| t.dimmed())
        ),
    }
}
