//! Thale Compiler CLI
//!
//! Scans a `.thl` file and prints the numeric code of every token.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};

use thale_lang::config::{ColorMode, Config, OutputFormat};
use thale_lang::error::{self, Diagnostic};
use thale_lang::{Scanner, Token};

#[derive(Parser, Debug)]
#[command(name = "thale", version, about = "Thale Compiler", long_about = None)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
struct Cli {
    /// Thale source file to scan
    file: PathBuf,

    /// How tokens are printed
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Codes)]
    format: OutputFormat,

    /// When to style diagnostics
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Show compiler version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    let config = Config::new(cli.file)
        .with_format(cli.format)
        .with_color(cli.color);
    config.apply_color();

    match run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("thale: error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("THALE_LOG", "warn"))
        .format_timestamp(None)
        .init();
}

/// Scan the configured file, printing tokens to stdout
fn run(config: &Config) -> anyhow::Result<ExitCode> {
    config.validate()?;

    let bytes = fs::read(&config.input)
        .with_context(|| format!("could not read file '{}'", config.input.display()))?;
    log::debug!("loaded {} ({} bytes)", config.display_name(), bytes.len());

    let source = String::from_utf8_lossy(&bytes);
    let name = config.display_name();
    let mut scanner = Scanner::with_filename(&source, Some(name.as_str()));
    let mut out = BufWriter::new(io::stdout().lock());
    let mut count = 0usize;
    let mut recovered = 0usize;

    loop {
        let result = scanner.next_token();

        // recovered diagnostics come first, even when the token failed
        for diagnostic in scanner.take_recovered() {
            out.flush()?;
            Diagnostic::with_source(diagnostic, &source).emit();
            recovered += 1;
        }

        let token = match result {
            Ok(token) => token,
            Err(err) => {
                out.flush()?;
                error::report(&err, &source)
            }
        };

        if token.is_eof() {
            break;
        }
        print_token(&mut out, &token, config.format)?;
        count += 1;
    }
    out.flush()?;

    if recovered > 0 {
        log::info!("{}: {} tokens, {} errors", name, count, recovered);
        return Ok(ExitCode::FAILURE);
    }
    log::info!("{}: {} tokens", name, count);
    Ok(ExitCode::SUCCESS)
}

fn print_token(out: &mut impl Write, token: &Token<'_>, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Codes => writeln!(out, "Token: {}", token.kind.code()),
        OutputFormat::Detailed => writeln!(
            out,
            "{}:{}\t{:?}\t{}",
            token.line, token.column, token.kind, token.lexeme
        ),
    }
}
