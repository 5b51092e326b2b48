use clap::Parser;
use anyhow::{bail, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::prelude::IndexedRandom;

/// Generate random sequences from a given alphabet.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random RNA sequences", long_about = None)]
struct Args {
    /// Alphabet to choose from, comma-separated (e.g., A,C,G,U)
    #[arg(short, long, default_value = "A,C,G,U")]
    alphabet: String,

    /// Length of each generated sequence
    #[arg(short, long, default_value_t = 50)]
    length: usize,

    /// Number of sequences to generate
    #[arg(short, long, default_value_t = 1)]
    num: usize,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Prefix every sequence with a FASTA header
    #[arg(long)]
    fasta: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let alphabet: Vec<char> = args.alphabet
        .split(',')
        .filter_map(|s| s.trim().chars().next())
        .collect();
    if alphabet.is_empty() {
        bail!("Empty alphabet: '{}'", args.alphabet);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    for n in 0..args.num {
        let seq: String = (0..args.length)
            .filter_map(|_| alphabet.choose(&mut rng).copied())
            .collect();
        if args.fasta {
            println!(">random_{}", n + 1);
        }
        println!("{}", seq);
    }
    Ok(())
}
