use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use sniffpack::config::DEFAULT_MAX_OUTPUT_LEN;
use sniffpack::{Action, Options, TextEncoding};

const EXIT_INVALID_ACTION: u8 = 1;
const EXIT_DECODE_FAILED: u8 = 2;

/// Decompressing formatter with gzip, lzma, lz4 and snappy support.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Available actions: decode, validate
    action: String,

    /// Value encoded with base64
    value: String,

    /// Text encoding of the decompressed payload
    #[arg(long, value_enum, default_value_t = TextEncoding::Utf8)]
    encoding: TextEncoding,

    /// Largest decompressed payload accepted
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_OUTPUT_LEN)]
    max_output: usize,

    /// Log to stderr; repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(level(cli.verbose))
        .target(env_logger::Target::Stderr)
        .init();

    let action = match cli.action.parse::<Action>() {
        Ok(action) => action,
        Err(err) => {
            println!("{err}");
            return ExitCode::from(EXIT_INVALID_ACTION);
        }
    };

    let opts = Options::new()
        .with_encoding(cli.encoding)
        .with_max_output_len(cli.max_output);
    log::info!("{action}: {} base64 chars, {opts:?}", cli.value.len());

    match action.run(&cli.value, &opts) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err}");
            ExitCode::from(EXIT_DECODE_FAILED)
        }
    }
}
