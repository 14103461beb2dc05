use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use tweet_gen_core::io::{read_column, read_lines};
use tweet_gen_core::model::{ChainSampler, SamplerConfig, SuccessorWeighting, DEFAULT_WORDS_PER_UNIT};
use tweet_gen_core::tokenize::tokenize;

/// Generates a new tweet from a Markov chain learned on a corpus of tweets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Corpus file: a CSV with a header row, or plain text with `--lines`
    corpus: PathBuf,

    /// CSV column holding the documents
    #[arg(long, default_value = "content")]
    column: String,

    /// CSV field delimiter (single ASCII character)
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Treat the corpus as plain text, one document per line
    #[arg(long)]
    lines: bool,

    /// Number of consecutive tokens grouped into one word
    #[arg(long, default_value_t = DEFAULT_WORDS_PER_UNIT)]
    words_per_unit: usize,

    /// How successors are weighted while walking the chain
    #[arg(long, value_enum, default_value_t = Weighting::Frequency)]
    weighting: Weighting,

    /// Seed for a reproducible sentence
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Weighting {
    /// Successors weighted by how often they were observed
    Frequency,
    /// Successors weighted by their position (compatibility mode)
    Index,
}

impl From<Weighting> for SuccessorWeighting {
    fn from(weighting: Weighting) -> Self {
        match weighting {
            Weighting::Frequency => SuccessorWeighting::Frequency,
            Weighting::Index => SuccessorWeighting::Index,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    // Reject a bad configuration before reading the corpus
    let config = SamplerConfig::new(args.words_per_unit)?.with_weighting(args.weighting.into());

    let texts = if args.lines {
        info!("Loading documents from {}", args.corpus.display());
        read_lines(&args.corpus)?
    } else {
        if !args.delimiter.is_ascii() {
            return Err(format!("Delimiter must be an ASCII character, got {:?}", args.delimiter).into());
        }
        info!("Loading column '{}' from {}", args.column, args.corpus.display());
        read_column(&args.corpus, &args.column, args.delimiter as u8)?
    };

    let documents: Vec<Vec<String>> = texts.iter().map(|text| tokenize(text)).collect();
    info!("Training on {} documents", documents.len());

    let mut sampler = ChainSampler::new(config);
    sampler.train(&documents)?;

    let sentence = match args.seed {
        Some(seed) => sampler.generate(&mut StdRng::seed_from_u64(seed))?,
        None => sampler.generate_with_thread_rng()?,
    };
    println!("{}", sentence);

    Ok(())
}
