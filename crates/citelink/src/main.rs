/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use citelink_core::{LinkConfig, Source, Sources};
use citelink_processor::{
    format_source_references,
    io::{load_config, load_sources},
    render::{djot::Djot, html::Html, plain::PlainText, OutputFormat},
    text::{clean_ai_output, clean_text, strip_citations},
    Linker, WebCitationProcessor,
};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Link numeric citation markers to their sources
    Link {
        /// Response text file; stdin when absent or `-`
        input: Option<PathBuf>,

        /// Path to the sources file (JSON or YAML)
        #[arg(short, long)]
        sources: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Path to a link options file (JSON or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a JSON report of how each marker resolved
        #[arg(long)]
        report: bool,
    },
    /// Process `[@Web]` citations, numbered badges and inline source references
    Web {
        /// Response text file; stdin when absent or `-`
        input: Option<PathBuf>,

        /// Path to the sources file (JSON or YAML)
        #[arg(short, long)]
        sources: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Path to a link options file (JSON or YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print sources as a numbered reference list
    Refs {
        /// Path to the sources file (JSON or YAML)
        #[arg(short, long)]
        sources: PathBuf,
    },
    /// Remove numeric citation markers
    Strip {
        /// Response text file; stdin when absent or `-`
        input: Option<PathBuf>,
    },
    /// Clean response text for display
    Clean {
        /// Response text file; stdin when absent or `-`
        input: Option<PathBuf>,

        /// Strip reasoning blocks and planning chatter instead of flattening
        #[arg(long)]
        ai: bool,
    },
    /// Validate a sources file
    Validate {
        /// Path to the sources file (JSON or YAML)
        path: PathBuf,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Generate JSON schema for sources and link options
    #[cfg(feature = "schema")]
    Schema,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Format {
    Plain,
    Html,
    Djot,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Plain => write!(f, "plain"),
            Format::Html => write!(f, "html"),
            Format::Djot => write!(f, "djot"),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Link {
            input,
            sources,
            format,
            config,
            report,
        } => {
            let content = read_input_or_exit(input.as_deref());
            let sources = load_sources_or_exit(&sources);
            let config = load_config_or_exit(config.as_deref());
            tracing::debug!(%format, sources = sources.len(), "linking citations");

            match format {
                Format::Plain => run_link::<PlainText>(&content, &sources, config, report),
                Format::Html => run_link::<Html>(&content, &sources, config, report),
                Format::Djot => run_link::<Djot>(&content, &sources, config, report),
            }
        }
        Commands::Web {
            input,
            sources,
            format,
            config,
        } => {
            let content = read_input_or_exit(input.as_deref());
            let sources = sources
                .as_deref()
                .map(load_sources_or_exit)
                .unwrap_or_default();
            let config = load_config_or_exit(config.as_deref());
            tracing::debug!(%format, sources = sources.len(), "processing web citations");

            let output = match format {
                Format::Plain => {
                    WebCitationProcessor::<PlainText>::new(config).process(&content, &sources)
                }
                Format::Html => WebCitationProcessor::<Html>::new(config).process(&content, &sources),
                Format::Djot => WebCitationProcessor::<Djot>::new(config).process(&content, &sources),
            };
            print!("{}", output);
        }
        Commands::Refs { sources } => {
            let sources = load_sources_or_exit(&sources);
            println!("{}", format_source_references(&sources));
        }
        Commands::Strip { input } => {
            let content = read_input_or_exit(input.as_deref());
            print!("{}", strip_citations(&content));
        }
        Commands::Clean { input, ai } => {
            let content = read_input_or_exit(input.as_deref());
            let cleaned = if ai {
                clean_ai_output(&content)
            } else {
                clean_text(&content)
            };
            println!("{}", cleaned);
        }
        Commands::Validate { path } => {
            let sources = load_sources_or_exit(&path);
            let summary = validate_sources(&sources);
            for warning in &summary.warnings {
                println!("  {}", warning);
            }
            println!(
                "Sources file is valid: {} sources, {} linkable.",
                summary.total, summary.linkable
            );
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        }
        #[cfg(feature = "schema")]
        Commands::Schema => {
            let schema = serde_json::json!({
                "sources": schemars::schema_for!(citelink_core::Sources),
                "config": schemars::schema_for!(LinkConfig),
            });
            match serde_json::to_string_pretty(&schema) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("Error serializing schema: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// What `validate` found in a sources file.
#[derive(Debug, PartialEq, Eq)]
struct ValidationSummary {
    total: usize,
    linkable: usize,
    warnings: Vec<String>,
}

fn validate_sources(sources: &[Source]) -> ValidationSummary {
    let mut linkable = 0;
    let mut warnings = Vec::new();
    for (i, source) in sources.iter().enumerate() {
        match source.link_url() {
            None => warnings.push(format!(
                "[{}] has no URL; its markers will not be linked",
                i + 1
            )),
            Some(url) => {
                linkable += 1;
                if source.parsed_url().is_none() {
                    warnings.push(format!("[{}] URL is not absolute: {}", i + 1, url));
                }
            }
        }
    }
    ValidationSummary {
        total: sources.len(),
        linkable,
        warnings,
    }
}

/// Build the `--report` document: per-marker resolutions, counts and output.
fn link_report<F: OutputFormat>(
    linker: &Linker<F>,
    content: &str,
    sources: &[Source],
) -> serde_json::Value {
    let resolutions = linker.resolve(content, sources);
    let linked = resolutions.iter().filter(|r| r.is_linked()).count();
    serde_json::json!({
        "markers": resolutions,
        "linked": linked,
        "unlinked": resolutions.len() - linked,
        "output": linker.link(content, sources),
    })
}

fn run_link<F: OutputFormat>(content: &str, sources: &Sources, config: LinkConfig, report: bool) {
    let linker = Linker::<F>::new(config);

    if !report {
        print!("{}", linker.link(content, sources));
        return;
    }

    match serde_json::to_string_pretty(&link_report(&linker, content, sources)) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error serializing report: {}", e);
            std::process::exit(1);
        }
    }
}

fn read_input_or_exit(path: Option<&Path>) -> String {
    let result = match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map(|_| buf)
        }
    };
    match result {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_sources_or_exit(path: &Path) -> Sources {
    match load_sources(path) {
        Ok(sources) => {
            tracing::debug!(path = %path.display(), count = sources.len(), "loaded sources");
            sources
        }
        Err(e) => {
            eprintln!("Error loading sources from {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

fn load_config_or_exit(path: Option<&Path>) -> LinkConfig {
    let Some(path) = path else {
        return LinkConfig::default();
    };
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config from {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_link_defaults_to_html() {
        let cli = Cli::try_parse_from(["citelink", "link", "--sources", "s.json"]).unwrap();
        match cli.command {
            Commands::Link {
                input,
                format,
                report,
                ..
            } => {
                assert!(input.is_none());
                assert_eq!(format, Format::Html);
                assert!(!report);
            }
            _ => panic!("expected link command"),
        }
    }

    #[test]
    fn test_link_requires_sources() {
        assert!(Cli::try_parse_from(["citelink", "link", "answer.txt"]).is_err());
    }

    #[test]
    fn test_global_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["citelink", "strip", "-", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_validate_sources_counts_and_warnings() {
        let sources = vec![
            Source::from_url("https://a.example"),
            Source::default(),
            Source::from_url("not-a-url"),
            Source::from_url(""),
        ];
        let summary = validate_sources(&sources);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.linkable, 2);
        assert_eq!(
            summary.warnings,
            vec![
                "[2] has no URL; its markers will not be linked".to_string(),
                "[3] URL is not absolute: not-a-url".to_string(),
                "[4] has no URL; its markers will not be linked".to_string(),
            ]
        );
    }

    #[test]
    fn test_validate_empty_sources() {
        assert_eq!(
            validate_sources(&[]),
            ValidationSummary {
                total: 0,
                linkable: 0,
                warnings: vec![],
            }
        );
    }

    #[test]
    fn test_link_report() {
        let linker = Linker::<PlainText>::default();
        let sources = vec![Source::from_url("https://a.example")];
        let report = link_report(&linker, "See [1] and [2].", &sources);
        assert_eq!(report["linked"], 1);
        assert_eq!(report["unlinked"], 1);
        assert_eq!(report["markers"].as_array().map(Vec::len), Some(2));
        assert_eq!(report["output"], "See [1] <https://a.example> and [2].");
    }
}
