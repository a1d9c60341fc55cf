//! # checkout-cli: Command-Line Checkout
//!
//! Prices a basket from the command line.
//!
//! ## Usage
//! ```text
//! checkout [--config PATH] [--json] [CODES...]
//!
//!   checkout A A A B B D          # → TOTAL $1.90
//!   checkout A,B,A,A,B            # commas work too
//!   echo "A B A" | checkout       # no codes: read them from stdin
//!   checkout --json A A A         # receipt as JSON
//! ```
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Args::parse            ─► flags + codes                             │
//! │  2. PricingConfig::load    ─► flag / env / config dir / built-in        │
//! │  3. PricingConfig::build   ─► ProductCatalog + DiscountRules            │
//! │  4. Checkout::scan × N                                                  │
//! │  5. Checkout::receipt      ─► text or JSON on stdout                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Logs go to stderr so stdout carries only the receipt.

pub mod config;
pub mod error;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use checkout_core::Checkout;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub use config::PricingConfig;
pub use error::{CliError, CliResult};

/// Help text printed for `--help` and after usage errors.
pub const USAGE: &str = "\
Usage: checkout [--config PATH] [--json] [CODES...]

Scans each product code and prints the basket total.
Codes may be separated by spaces or commas. With no codes, reads them from stdin.

Options:
  --config PATH   price list (TOML); defaults to $CHECKOUT_CONFIG, then the user config dir
  --json          print the receipt as JSON
  -h, --help      show this help";

// =============================================================================
// Arguments
// =============================================================================

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub json: bool,
    pub help: bool,
    pub codes: Vec<String>,
}

impl Args {
    /// Parses arguments (without the program name).
    pub fn parse<I, S>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "-h" | "--help" => parsed.help = true,
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--config requires a path".to_string()))?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "--" => {
                    for rest in args.by_ref() {
                        parsed.codes.extend(split_codes(&rest).map(str::to_string));
                    }
                }
                other if other.starts_with("--config=") => {
                    parsed.config = Some(PathBuf::from(&other["--config=".len()..]));
                }
                other if other.starts_with('-') && other.len() > 1 => {
                    return Err(CliError::Usage(format!("unknown option: {other}")));
                }
                other => parsed.codes.extend(split_codes(other).map(str::to_string)),
            }
        }

        Ok(parsed)
    }
}

/// Splits on commas and whitespace, dropping empty pieces.
pub fn split_codes(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|code| !code.is_empty())
}

// =============================================================================
// Running
// =============================================================================

/// Prices one basket and writes the receipt to `out`.
///
/// `input` is only read when `args.codes` is empty.
pub fn run<R: BufRead, W: Write>(args: Args, input: R, out: &mut W) -> CliResult<()> {
    if args.help {
        writeln!(out, "{USAGE}")?;
        return Ok(());
    }

    let pricing = PricingConfig::load(args.config)?;
    let (catalog, rules) = pricing.build()?;
    let mut checkout = Checkout::new(&catalog, &rules)?;

    if args.codes.is_empty() {
        debug!("No codes on the command line, reading stdin");
        for line in input.lines() {
            let line = line?;
            split_codes(&line).for_each(|code| checkout.scan(code));
        }
    } else {
        args.codes.iter().for_each(|code| checkout.scan(code.as_str()));
    }

    let receipt = checkout.receipt();
    info!(
        items = receipt.item_count,
        quantity = receipt.total_quantity,
        total = receipt.total.cents(),
        "Basket priced"
    );

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &receipt)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{receipt}")?;
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging on stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=checkout_core=trace` - Show every scan
/// - Default: warnings only
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
