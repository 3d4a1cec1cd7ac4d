//! Reads a text `T` and a pattern `P` (whitespace separated) from stdin and prints every offset
//! where `P` occurs in `T`, one per line.

use std::ffi::OsString;
use std::io::{self, BufWriter, Read, Write};

use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use log::{info, LevelFilter};

use rabin_karp::cs::string::RabinKarp;

const PKG_NAME: &str = env!("CARGO_PKG_NAME");
const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    seed: Option<u64>,
    verify: bool,
    log_filter: LevelFilter,
}

fn parse_opts<I, T>(args: I) -> Result<Options, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cmd = Command::new(PKG_NAME)
        .version(PKG_VERSION)
        .about("Print the offsets of a pattern in a text, both read from stdin")
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("N")
                .value_parser(value_parser!(u64))
                .help("Seed the hash base for reproducible runs"),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .action(ArgAction::SetTrue)
                .help("Confirm hash matches byte-by-byte"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Set verbosity level"),
        );

    let matches = cmd.try_get_matches_from(args)?;
    Ok(Options {
        seed: matches.get_one::<u64>("seed").copied(),
        verify: matches.get_flag("verify"),
        log_filter: match matches.get_count("verbose") {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        },
    })
}

fn init_log(filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(filter)
        .chain(io::stderr())
        .apply()
        .context("failed to install logger")
}

/// Splits the input into text and pattern and writes the match offsets to `out`.
fn run(input: &str, opts: &Options, out: &mut impl Write) -> Result<()> {
    let mut tokens = input.split_whitespace();
    let text = tokens.next().ok_or_else(|| anyhow!("missing text on stdin"))?;
    let pattern = tokens
        .next()
        .ok_or_else(|| anyhow!("missing pattern on stdin"))?;

    let offsets = match opts.seed {
        Some(seed) => RabinKarp::seeded(seed)
            .verify(opts.verify)
            .find_all(text, pattern),
        None => RabinKarp::new().verify(opts.verify).find_all(text, pattern),
    };
    info!("{} match(es)", offsets.len());

    for offset in offsets {
        writeln!(out, "{}", offset)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let opts = match parse_opts(std::env::args_os()) {
        Ok(opts) => opts,
        Err(e) => e.exit(),
    };
    init_log(opts.log_filter)?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&input, &opts, &mut out)
}
