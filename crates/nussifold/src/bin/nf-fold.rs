use std::io::Write;
use log::info;
use log::warn;
use colored::*;
use env_logger::Builder;
use clap::Args;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;
use rayon::prelude::*;

use nf_fold::fold;
use nf_fold::FoldParams;
use nf_fold::PairingRule;
use nf_fold::MIN_HAIRPIN;

use nussifold::input_parsers::ruler;
use nussifold::input_parsers::SequenceRecord;
use nussifold::input_parsers::read_sequences_input;
use nussifold::input_parsers::read_sequences_lossy_input;
use nussifold::report::FoldReport;

#[derive(Debug, Args)]
pub struct FoldInput {
    /// Input file (FASTA-like), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Replace unsupported nucleotides by 'N' (never pairs) instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Args)]
pub struct FoldArguments {
    /// Minimum number of unpaired bases enclosed by a hairpin
    #[arg(long, default_value_t = MIN_HAIRPIN)]
    pub min_hairpin: usize,

    /// Allow G-U wobble pairs
    #[arg(long)]
    pub wobble: bool,
}

impl FoldArguments {
    pub fn build_params(&self) -> FoldParams {
        let pairing = if self.wobble {
            PairingRule::Wobble
        } else {
            PairingRule::WatsonCrick
        };
        FoldParams::new(self.min_hairpin, pairing)
    }
}

#[derive(Debug, Parser)]
#[command(name = "nf-fold")]
#[command(author, version, about = "Maximum base-pair folding of RNA sequences")]
pub struct Cli {
    #[command(flatten)]
    pub input: FoldInput,

    #[command(flatten, next_help_heading = "Folding parameters")]
    pub fold: FoldArguments,

    /// Print one JSON object per sequence
    #[arg(long)]
    pub json: bool,

    /// List base pairs by position instead of traceback order
    #[arg(long)]
    pub sorted: bool,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            // no prefix, just the message
            writeln!(buf, "{}", record.args())
        })
        .init();
}

fn fold_record(record: &SequenceRecord, params: &FoldParams, sorted: bool) -> Result<FoldReport> {
    let unknown = record.sequence.count_unknown();
    if unknown > 0 {
        warn!("{} {}: {} unpairable 'N' position(s)", "WARNING:".red(), record.name(), unknown);
    }
    let result = fold(&record.sequence, params)?;
    Ok(FoldReport::new(&record.name(), &record.sequence, &result, sorted))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.input.verbose);

    let params = cli.fold.build_params();
    let records = if cli.input.lenient {
        read_sequences_lossy_input(&cli.input.input)?
    } else {
        read_sequences_input(&cli.input.input)?
    };
    info!("Folding {} sequence(s) with {:?}", records.len(), params);

    let reports = records
        .par_iter()
        .map(|r| fold_record(r, &params, cli.sorted))
        .collect::<Result<Vec<_>>>()?;

    for (record, report) in records.iter().zip(&reports) {
        if cli.json {
            println!("{}", serde_json::to_string(report)?);
            continue;
        }
        if let Some(h) = &record.header {
            println!("{}", h.yellow());
        }
        // Same stream as the sequence, so the ruler stays aligned.
        let len = record.sequence.len();
        if cli.input.verbose > 0 && len > 0 {
            println!("{}", ruler(len - 1).magenta());
        }
        print!("{:#}", report);
    }

    Ok(())
}
