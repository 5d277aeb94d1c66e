// Command-line front end for rlenc.
//
// `encode` reads an integer stream (decimal text or packed big-endian
// words) from a file or stdin and writes the run-length encoded bytes to a
// file or stdout. `config` prints build/format details.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::io::{self as rio, EncodeStats, InputFormat};
use crate::rle::format::{MAX_LITERAL_LEN, MAX_RUN_LEN, MIN_RUN_LEN};

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Run-length/delta encoder for 32-bit integer streams.
#[derive(Parser, Debug)]
#[command(
    name = "rlenc",
    version,
    about = "Run-length/delta encoder for 32-bit integer streams",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Run-length encode an integer stream.
    Encode(EncodeArgs),
    /// Print build/format details.
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Whitespace-separated decimal integers.
    Text,
    /// Packed 4-byte big-endian words.
    Be,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => InputFormat::Text,
            FormatArg::Be => InputFormat::BigEndian,
        }
    }
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// Input interpretation.
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Input file (stdin if omitted).
    #[arg(value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Output file (stdout if omitted).
    #[arg(value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_encode(cli: &Cli, args: &EncodeArgs) -> i32 {
    let format = InputFormat::from(args.format);

    if let Some(ref path) = args.output {
        if path.exists() && !cli.force {
            eprintln!(
                "rlenc: output file exists, use -f to overwrite: {}",
                path.display()
            );
            return 1;
        }
    }

    let reader: Box<dyn Read> = match args.input {
        Some(ref path) => match File::open(path) {
            Ok(f) => Box::new(BufReader::new(f)),
            Err(e) => {
                eprintln!("rlenc: encode: open {}: {e}", path.display());
                return 1;
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    let mut encoded = Vec::new();
    let stats = match rio::encode_reader(reader, &mut encoded, format) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("rlenc: encode: {e}");
            return 1;
        }
    };

    if let Some(ref path) = args.output {
        if let Err(e) = std::fs::write(path, &encoded) {
            eprintln!("rlenc: encode: write: {e}");
            return 1;
        }
    } else {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = out.write_all(&encoded) {
            eprintln!("rlenc: encode: write: {e}");
            return 1;
        }
    }

    report_stats(cli, &stats);
    0
}

fn report_stats(cli: &Cli, stats: &EncodeStats) {
    if cli.json_output {
        let json = serde_json::json!({
            "values": stats.values,
            "raw_bytes": stats.raw_len,
            "encoded_bytes": stats.encoded_len,
        });
        eprintln!("{json}");
    } else if cli.verbose > 0 && !cli.quiet {
        eprintln!(
            "rlenc: encode: {} values, {} raw bytes, {} encoded bytes",
            stats.values, stats.raw_len, stats.encoded_len
        );
    }
}

fn cmd_config() -> i32 {
    println!("rlenc version {}", env!("CARGO_PKG_VERSION"));
    println!("min run length:     {MIN_RUN_LEN}");
    println!("max run length:     {MAX_RUN_LEN}");
    println!("max literal length: {MAX_LITERAL_LEN}");
    println!("run delta range:    [-128, 127]");
    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Cmd::Encode(ref args) => cmd_encode(&cli, args),
        Cmd::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
