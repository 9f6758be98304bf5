use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use vqaprep::cli::Cli;
use vqaprep::converter::{Converter, DATASET_FILE_NAME};
use vqaprep::corpus::VqaCorpus;
use vqaprep::observer::{SAMPLE_INTERVAL, SampleProbe};
use vqaprep::tokenizer::download;
use vqaprep::tokenizer::wordpiece::WordPieceTokenizer;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vqaprep=info".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();
    let options = cli.to_options();
    options.validate()?;

    // 1. Provision the tokenizer vocabulary (one-time download)
    download::ensure_tokenizer_files(&cli.tokenizer_dir)?;
    let tokenizer = WordPieceTokenizer::from_vocab_dir(&cli.tokenizer_dir)
        .context("failed to load tokenizer")?;

    // 2. Load the corpus
    let corpus = VqaCorpus::load(&options.annot_file, &options.ques_file)?;
    info!("Loaded {} annotation records", corpus.len());

    // 3. Run the conversion with sampled diagnostics
    let image_dir = options.image_dir();
    let mut probe = SampleProbe::new(image_dir, SAMPLE_INTERVAL);
    let converter = Converter::new(&tokenizer, options.mode);
    let summary = converter.convert(&corpus, &options.output_dir, &mut probe)?;

    info!(
        "Wrote {} records to {}",
        summary.records,
        options.output_dir.join(DATASET_FILE_NAME).display()
    );
    Ok(())
}
