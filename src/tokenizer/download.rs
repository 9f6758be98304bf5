/// Tokenizer file auto-download from HuggingFace.
///
/// Fetches the `bert-base-uncased` vocabulary files if they don't
/// already exist locally, so a fresh checkout works without manual
/// setup.
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Base URL for HuggingFace vocabulary files.
const HF_BASE: &str = "https://huggingface.co/bert-base-uncased/resolve/main";

/// Files required for the tokenizer, with their relative URL paths.
const TOKENIZER_FILES: &[(&str, &str)] = &[
    ("tokenizer.json", "tokenizer.json"),
    ("tokenizer_config.json", "tokenizer_config.json"),
    ("vocab.txt", "vocab.txt"),
];

/// Return the default vocabulary directory path.
#[must_use]
pub fn default_vocab_dir() -> PathBuf {
    PathBuf::from("models/bert-base-uncased")
}

/// Check whether all required tokenizer files exist in `vocab_dir`.
#[must_use]
pub fn all_files_present(vocab_dir: &Path) -> bool {
    TOKENIZER_FILES
        .iter()
        .all(|(name, _)| vocab_dir.join(name).exists())
}

/// Download tokenizer files from HuggingFace if any are missing.
///
/// Creates the vocabulary directory if it doesn't exist.
/// Skips individual files that are already present.
pub fn ensure_tokenizer_files(vocab_dir: &Path) -> Result<()> {
    info!("Checking tokenizer files in {}", vocab_dir.display());

    fs::create_dir_all(vocab_dir)
        .with_context(|| format!("failed to create vocab directory: {}", vocab_dir.display()))?;

    if all_files_present(vocab_dir) {
        info!("All tokenizer files found, skipping download");
        return Ok(());
    }

    eprintln!("[INFO] Downloading bert-base-uncased tokenizer files from HuggingFace...");

    for &(filename, url_path) in TOKENIZER_FILES {
        let dest = vocab_dir.join(filename);

        if dest.exists() {
            info!("File already exists: {filename}");
            continue;
        }

        let url = format!("{HF_BASE}/{url_path}");
        eprintln!("[INFO] Downloading {filename}...");
        download_file(&dest, &url).with_context(|| format!("failed to download {filename}"))?;
        eprintln!("[INFO] Downloaded {filename}");
    }

    eprintln!("[INFO] Tokenizer download complete!");
    Ok(())
}

/// Download a single file with a progress bar.
fn download_file(dest: &Path, url: &str) -> Result<()> {
    let resp =
        reqwest::blocking::get(url).with_context(|| format!("HTTP request failed: {url}"))?;

    if !resp.status().is_success() {
        anyhow::bail!("bad status: {} for {url}", resp.status());
    }

    let total = resp.content_length().unwrap_or(0);

    let pb = if total > 0 {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {bar:40.cyan/blue} {percent}% ({bytes}/{total_bytes}) {msg}")
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb
    } else {
        ProgressBar::new_spinner()
    };

    let mut file = fs::File::create(dest)
        .with_context(|| format!("failed to create file: {}", dest.display()))?;

    let bytes = resp.bytes().context("failed to read response body")?;
    file.write_all(&bytes).context("failed to write file")?;
    pb.set_position(bytes.len() as u64);
    pb.finish_and_clear();

    Ok(())
}
