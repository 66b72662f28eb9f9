//! Shorten command: abbreviate names from a file, stdin, or arguments.

use std::io::{BufRead, BufReader, BufWriter, Write};

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use serde::Serialize;
use shortnames_core::config::{Config, ConfigSources, OutputFormat};
use shortnames_core::{Capacity, ShortenError, ShortenedName, Shortener};
use tracing::{debug, instrument};

/// Arguments for the `shorten` subcommand.
#[derive(Args, Debug, Default)]
pub struct ShortenArgs {
    /// File with one name per line (reads stdin when omitted or "-")
    #[arg(conflicts_with = "names")]
    pub file: Option<Utf8PathBuf>,

    /// Shorten NAME instead of reading input (repeatable)
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub names: Vec<String>,

    /// Output format (default: tsv, or `output_format` from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Extra dictionary file, searched before all others (repeatable)
    #[arg(short, long = "dictionary", value_name = "FILE")]
    pub dictionaries: Vec<Utf8PathBuf>,

    /// Leave out the built-in dictionary
    #[arg(long)]
    pub no_builtin: bool,

    /// Length limit, in characters, for each name and its shortened forms
    #[arg(long, value_name = "N", conflicts_with = "unbounded")]
    pub max_chars: Option<usize>,

    /// Disable the length limit
    #[arg(long)]
    pub unbounded: bool,
}

impl ShortenArgs {
    fn capacity(&self, config: &Config) -> Capacity {
        if self.unbounded {
            Capacity::Unbounded
        } else if let Some(max) = self.max_chars {
            Capacity::Limited(max)
        } else {
            config.capacity()
        }
    }

    fn format(&self, global_json: bool, config: &Config) -> OutputFormat {
        if global_json {
            OutputFormat::Json
        } else {
            self.format.or(config.output_format).unwrap_or_default()
        }
    }
}

#[derive(Serialize)]
struct NameRecord<'a> {
    name: &'a str,
    short: &'a str,
    shortest: &'a str,
}

/// Shorten every name and print both forms.
#[instrument(name = "cmd_shorten", skip_all, fields(file = ?args.file))]
pub fn cmd_shorten(
    args: ShortenArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    cwd: &Utf8Path,
) -> anyhow::Result<()> {
    let format = args.format(global_json, config);
    let capacity = args.capacity(config);
    debug!(%format, ?capacity, names = args.names.len(), "executing shorten command");

    let dictionary =
        super::load_dictionary(config, sources, cwd, &args.dictionaries, args.no_builtin)?;
    let shortener = Shortener::new(&dictionary).with_capacity(capacity);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let count = if !args.names.is_empty() {
        for (i, name) in args.names.iter().enumerate() {
            let shortened = shortener
                .shorten(name)
                .with_context(|| format!("failed to shorten name {}", i + 1))?;
            write_name(&mut out, format, name, &shortened)?;
        }
        args.names.len()
    } else {
        match args.file.as_deref() {
            Some(path) if path.as_str() != "-" => {
                let file = std::fs::File::open(path.as_std_path())
                    .with_context(|| format!("failed to read {path}"))?;
                shorten_lines(&shortener, BufReader::new(file), &mut out, format, path.as_str())?
            }
            _ => shorten_lines(
                &shortener,
                std::io::stdin().lock(),
                &mut out,
                format,
                "<stdin>",
            )?,
        }
    };

    out.flush().context("failed to write output")?;
    debug!(count, "names shortened");
    Ok(())
}

/// Shorten one name per input line, stopping at the first failure.
///
/// Lines are read as bytes; the line ending (`\n` or `\r\n`) is stripped
/// and the rest must be valid UTF-8. Returns the number of lines processed.
pub fn shorten_lines<R: BufRead, W: Write>(
    shortener: &Shortener<'_>,
    mut reader: R,
    out: &mut W,
    format: OutputFormat,
    source: &str,
) -> anyhow::Result<usize> {
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("failed to read {source}"))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let line = strip_line_ending(&buf);
        let (name, shortened) = std::str::from_utf8(line)
            .map_err(ShortenError::from)
            .and_then(|name| shortener.shorten(name).map(|shortened| (name, shortened)))
            .with_context(|| format!("{source}: line {line_no}"))?;
        write_name(out, format, name, &shortened)?;
    }

    Ok(line_no)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn write_name<W: Write>(
    out: &mut W,
    format: OutputFormat,
    name: &str,
    shortened: &ShortenedName,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Tsv => writeln!(out, "{}\t{}", shortened.short, shortened.shortest)?,
        OutputFormat::Lines => {
            writeln!(out, "{}", shortened.short)?;
            writeln!(out, "{}", shortened.shortest)?;
        }
        OutputFormat::Json => {
            let record = NameRecord {
                name,
                short: &shortened.short,
                shortest: &shortened.shortest,
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &[u8], format: OutputFormat) -> anyhow::Result<String> {
        let shortener = Shortener::builtin();
        let mut out = Vec::new();
        shorten_lines(&shortener, Cursor::new(input), &mut out, format, "test")?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn tsv_prints_both_forms_per_line() {
        let out = run(b"Ulica Jana Kowalskiego\nPlac Zamkowy\n", OutputFormat::Tsv).unwrap();
        assert_eq!(out, "Ul. J. Kowalskiego\tKowalskiego\nPl. Zamkowy\tZamkowy\n");
    }

    #[test]
    fn lines_format_prints_two_lines_per_name() {
        let out = run(b"Plac Zamkowy", OutputFormat::Lines).unwrap();
        assert_eq!(out, "Pl. Zamkowy\nZamkowy\n");
    }

    #[test]
    fn json_format_includes_input() {
        let out = run(b"Plac Zamkowy\r\n", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["name"], "Plac Zamkowy");
        assert_eq!(value["short"], "Pl. Zamkowy");
        assert_eq!(value["shortest"], "Zamkowy");
    }

    #[test]
    fn empty_line_keeps_alignment() {
        let out = run(b"\nPlac Zamkowy\n", OutputFormat::Tsv).unwrap();
        assert_eq!(out, "\t\nPl. Zamkowy\tZamkowy\n");
    }

    #[test]
    fn invalid_utf8_reports_line_number() {
        let err = run(b"Plac Zamkowy\n\xff\xfe\n", OutputFormat::Tsv).unwrap_err();
        assert_eq!(err.to_string(), "test: line 2");
        assert!(err.chain().any(|cause| cause.to_string().contains("UTF-8")));
    }

    #[test]
    fn strips_crlf_and_lf() {
        assert_eq!(strip_line_ending(b"abc\r\n"), b"abc");
        assert_eq!(strip_line_ending(b"abc\n"), b"abc");
        assert_eq!(strip_line_ending(b"abc"), b"abc");
    }

    #[test]
    fn command_line_flags_override_config() {
        let config = Config {
            max_chars: Some(10),
            output_format: Some(OutputFormat::Lines),
            ..Config::default()
        };
        let args = ShortenArgs {
            unbounded: true,
            ..ShortenArgs::default()
        };
        assert_eq!(args.capacity(&config), Capacity::Unbounded);
        assert_eq!(args.format(false, &config), OutputFormat::Lines);
        assert_eq!(args.format(true, &config), OutputFormat::Json);
        assert_eq!(ShortenArgs::default().capacity(&config), Capacity::Limited(10));
    }
}
