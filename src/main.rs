use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use wa_markup::{Config, VariableReport, template};

#[derive(Parser)]
#[command(name = "wa-markup")]
#[command(about = "Render WhatsApp-style message markup and preview templates")]
struct Cli {
    /// Config file (missing file falls back to built-in defaults)
    #[arg(short, long, default_value = "wa-markup.toml", global = true)]
    config: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a message
    Render {
        /// Input file (reads stdin when omitted)
        input: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// Show a template with placeholders as [name]
    Preview { input: Option<PathBuf> },
    /// List template placeholders, or check them against declared names
    Variables {
        input: Option<PathBuf>,

        /// Declared variable names; exits non-zero if the template uses others
        #[arg(short, long, value_delimiter = ',')]
        declared: Option<Vec<String>>,
    },
    /// Print the truncated summary shown on a template card
    Summary { input: Option<PathBuf> },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Json,
    Text,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(&cli.config)?;

    match cli.command {
        Command::Render { input, format } => {
            let message = read_input(input.as_deref())?;
            let tokens = wa_markup::render(&message);
            tracing::info!(tokens = tokens.len(), "rendered message");

            match format {
                Format::Html => println!("{}", wa_markup::tokens_to_html(&tokens, &config.html)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&tokens)?),
                Format::Text => println!("{}", wa_markup::literal_text(&tokens)),
            }
        }
        Command::Preview { input } => {
            let text = read_input(input.as_deref())?;
            println!("{}", preview_output(&text, &config));
        }
        Command::Variables { input, declared } => {
            let text = read_input(input.as_deref())?;
            let Some(declared) = declared else {
                for name in template::variables(&text) {
                    println!("{name}");
                }
                return Ok(ExitCode::SUCCESS);
            };

            let report = template::check_variables(&text, declared.as_slice());
            for line in report_lines(&report) {
                println!("{line}");
            }
            let status = report_status(&report);
            if status != 0 {
                tracing::warn!(missing = report.missing.len(), "template uses undeclared variables");
                return Ok(ExitCode::from(status));
            }
        }
        Command::Summary { input } => {
            let text = read_input(input.as_deref())?;
            println!("{}", template::truncate(&text, config.template.truncate_at));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("WA_MARKUP_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read a file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    let mut content = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    trim_trailing_newline(&mut content);
    tracing::debug!(bytes = content.len(), "read input");
    Ok(content)
}

/// Drop one trailing `\n` (or `\r\n`) so `echo` and editors don't add an
/// empty last line.
fn trim_trailing_newline(content: &mut String) {
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
}

fn preview_output(text: &str, config: &Config) -> String {
    if text.is_empty() {
        config.template.empty_preview.clone()
    } else {
        wa_markup::preview(text)
    }
}

fn report_lines(report: &VariableReport) -> Vec<String> {
    let missing = report.missing.iter().map(|name| format!("missing: {name}"));
    let unused = report.unused.iter().map(|name| format!("unused: {name}"));
    missing.chain(unused).collect()
}

/// Exit status for `variables --declared`: undeclared placeholders fail,
/// unused declarations only warn.
fn report_status(report: &VariableReport) -> u8 {
    if report.missing.is_empty() { 0 } else { 1 }
}
