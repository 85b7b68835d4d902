//! WordVinder - CLI
//!
//! Word puzzle helpers for Wordle, Quartiles and Wordscapes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordvinder::{
    commands::{WordscapesConfig, run_benchmark, run_quartiles, run_simple, run_wordle, run_wordscapes},
    dictionary::{self, DictionaryError, DictionaryIndex, loader},
    logging::init_logger,
    output::{
        print_benchmark_result, print_dictionary_error, print_quartiles_result,
        print_wordle_result, print_wordscapes_result,
    },
};

#[derive(Parser)]
#[command(
    name = "wordvinder",
    about = "Word puzzle helpers: Wordle constraints, Quartiles tiles and Wordscapes letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List five-letter words consistent with the rows played so far
    Wordle {
        /// Rows as GUESS:FEEDBACK, e.g. crane:--G-Y (G/Y/- or emoji; '.' for an empty letter)
        attempts: Vec<String>,
    },

    /// Find words spelled by 2-4 of the selected tiles
    Quartiles {
        /// Tiles of 1-2 letters, in selection order
        #[arg(required = true)]
        tiles: Vec<String>,
    },

    /// Find words that can be made from a wheel of letters
    Wordscapes {
        /// Letters on the wheel, together or separated
        letters: Vec<String>,

        /// Only list words of this length (repeatable)
        #[arg(short, long = "length")]
        lengths: Vec<usize>,

        /// Words already found (repeatable)
        #[arg(short, long)]
        solved: Vec<String>,

        /// Analyzed board as JSON
        #[arg(short, long)]
        board: Option<PathBuf>,
    },

    /// Interactive Wordle session
    Simple,

    /// Time random queries of all three kinds in parallel
    Benchmark {
        /// Number of random queries
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Seed for a reproducible query mix
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary selected by the -w flag into the shared slot
fn load_dictionary(wordlist: &str) -> Result<&'static DictionaryIndex, DictionaryError> {
    let shared = dictionary::global();
    match wordlist {
        "embedded" => shared.get_or_load(loader::load_reference_words),
        path => shared.get_or_load(|| loader::load_from_file(path)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    // Reported once, as its own state rather than an empty result
    let index = match load_dictionary(&cli.wordlist) {
        Ok(index) => index,
        Err(e) => {
            print_dictionary_error(&cli.wordlist, &e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Wordle { attempts } => {
            let result = run_wordle(index, &attempts)?;
            print_wordle_result(&result, cli.verbose);
        }
        Commands::Quartiles { tiles } => {
            let result = run_quartiles(index, &tiles);
            print_quartiles_result(&result);
        }
        Commands::Wordscapes {
            letters,
            lengths,
            solved,
            board,
        } => {
            let config = WordscapesConfig {
                letters,
                lengths,
                solved,
                board,
            };
            let result = run_wordscapes(index, &config)?;
            print_wordscapes_result(&result);
        }
        Commands::Simple => run_simple(index).context("Interactive session failed")?,
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random queries...");
            let result = run_benchmark(index, count, seed);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
