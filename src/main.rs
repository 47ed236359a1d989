use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
    process,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::info;

use exprc::{
    display_error,
    errors::errors::FrontendError,
    lexer::lexer::tokenize,
    parser::parser::{parse_program, ParserConfig, DEFAULT_MAX_DEPTH},
    reserved::reserved::ReservedRegistry,
    type_checker::compat::TypeCompatibilityTable,
};

/// Parses and type checks a source file, printing the typed tree as JSON.
#[derive(ClapParser, Debug)]
#[command(name = "exprc")]
#[command(version = "0.1.0")]
#[command(about = "Front end for a small statically typed expression language")]
struct Cli {
    /// Input source file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Deepest allowed nesting of operators, parentheses and blocks
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Print the token stream instead of the tree
    #[arg(long)]
    tokens: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let start = Instant::now();

    let registry = ReservedRegistry::standard();
    let compat = TypeCompatibilityTable::standard();

    let file = File::open(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    let reader = BufReader::new(file);

    if cli.tokens {
        let tokens = tokenize(reader, &registry).or_else(|error| report(error, &cli))?;
        for token in &tokens {
            token.debug();
        }
        return Ok(());
    }

    let config = ParserConfig {
        max_depth: cli.max_depth,
    };
    let units =
        parse_program(reader, &registry, &compat, config).or_else(|error| report(error, &cli))?;

    info!("parsed {} in {:?}", cli.input.display(), start.elapsed());

    let json = if cli.compact {
        serde_json::to_string(&units)
    } else {
        serde_json::to_string_pretty(&units)
    }
    .context("failed to serialize the syntax tree")?;

    println!("{}", json);
    Ok(())
}

/// Prints a source error and exits; I/O failures are handed back to `main`.
fn report<T>(error: FrontendError, cli: &Cli) -> Result<T> {
    match error {
        FrontendError::Source(error) => {
            let source = fs::read_to_string(&cli.input).unwrap_or_default();
            display_error(&error, &cli.input, &source);
            process::exit(1);
        }
        FrontendError::Io(error) => {
            Err(error).with_context(|| format!("failed to read {}", cli.input.display()))
        }
    }
}
