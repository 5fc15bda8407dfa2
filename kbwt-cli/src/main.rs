//! kbwt - keyed block-parallel text compressor.
//!
//! Two verbs: `compress` and `decompress`, both driven by a master key and
//! a per-block sub-key derived from it.

mod commands;
mod utils;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::{cmd_compress, cmd_decompress};
use kbwt_core::mode::Mode;

#[derive(Parser)]
#[command(name = "kbwt")]
#[command(author, version, about = "Keyed block-parallel text compressor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    Compress {
        /// Input file to compress
        #[arg(short, long)]
        input: PathBuf,

        /// Output path; `.bin` is appended
        #[arg(short, long)]
        output: PathBuf,

        /// Back-end mode
        #[arg(short, long, value_enum)]
        mode: ModeArg,

        /// Master key, or a path to a file containing one
        #[arg(short, long)]
        key: String,

        /// Append log output to this file, in addition to stderr
        #[arg(short, long)]
        log: Option<PathBuf>,
    },

    /// Decompress a file
    Decompress {
        /// Input container file
        #[arg(short, long)]
        input: PathBuf,

        /// Output path; the original extension is restored if recorded
        #[arg(short, long)]
        output: PathBuf,

        /// Master key, or a path to a file containing one
        #[arg(short, long)]
        key: String,

        /// Append log output to this file, in addition to stderr
        #[arg(short, long)]
        log: Option<PathBuf>,
    },
}

/// Back-end mode (for clap's `ValueEnum`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ModeArg {
    Bzip2,
    Huffman,
    Lzw,
    Arithmetic,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Bzip2 => Mode::Bzip2,
            ModeArg::Huffman => Mode::Huffman,
            ModeArg::Lzw => Mode::Lzw,
            ModeArg::Arithmetic => Mode::Arithmetic,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            mode,
            key,
            log,
        } => utils::init_logging(log.as_deref())
            .map_err(|e| e.into())
            .and_then(|()| cmd_compress(&input, &output, mode.into(), &key)),
        Commands::Decompress {
            input,
            output,
            key,
            log,
        } => utils::init_logging(log.as_deref())
            .map_err(|e| e.into())
            .and_then(|()| cmd_decompress(&input, &output, &key)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
