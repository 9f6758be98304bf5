/// The conversion pass: corpus in, `vqa_dataset.txt` out.
///
/// One linear walk over the annotation records. Each record becomes one
/// output line `image_filename \t comma_joined_tokens`. The file is
/// opened once in overwrite mode and closed on every exit path.
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::corpus::VqaCorpus;
use crate::image_name::ImageMode;
use crate::observer::RecordObserver;
use crate::tokenizer::TextTokenizer;

/// Name of the dataset file written into the output directory.
pub const DATASET_FILE_NAME: &str = "vqa_dataset.txt";

/// Conversion inputs supplied by the CLI.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    pub annot_file: PathBuf,
    pub ques_file: PathBuf,
    pub output_dir: PathBuf,
    pub mode: ImageMode,
}

impl ConvertOptions {
    /// Validate paths before any processing.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.annot_file != self.ques_file,
            "annotations and questions must be different files"
        );
        anyhow::ensure!(
            !self.output_dir.as_os_str().is_empty(),
            "output directory must not be empty"
        );
        Ok(())
    }

    /// The `images/` directory expected beside the annotations file,
    /// used only for sampled existence diagnostics.
    #[must_use]
    pub fn image_dir(&self) -> PathBuf {
        self.annot_file
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("images")
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Number of lines written.
    pub records: usize,
}

/// Runs the conversion against a borrowed tokenizer.
pub struct Converter<'a, T: TextTokenizer + ?Sized> {
    tokenizer: &'a T,
    mode: ImageMode,
}

impl<'a, T: TextTokenizer + ?Sized> Converter<'a, T> {
    pub fn new(tokenizer: &'a T, mode: ImageMode) -> Self {
        Self { tokenizer, mode }
    }

    /// Convert `corpus` into `output_dir/vqa_dataset.txt`.
    ///
    /// The output directory is created if absent. Records are written in
    /// corpus order; a failure mid-run aborts and leaves the lines
    /// written so far intact.
    pub fn convert(
        &self,
        corpus: &VqaCorpus,
        output_dir: &Path,
        observer: &mut dyn RecordObserver,
    ) -> Result<ConvertSummary> {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("failed to create {}", output_dir.display()))?;

        let output_path = output_dir.join(DATASET_FILE_NAME);
        let file = File::create(&output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        let mut writer = BufWriter::new(file);

        let mut summary = ConvertSummary::default();

        for (index, annotation) in corpus.annotations().iter().enumerate() {
            let image_name = self.mode.image_filename(annotation.image_id);
            let question = corpus.question(annotation.question_id)?;
            let answer = &annotation.multiple_choice_answer;

            // No space between the question text and the first [SEP]
            let text = format!("[CLS] {question}[SEP] {answer} [SEP]");
            let tokens = self
                .tokenizer
                .tokenize(&text)
                .with_context(|| format!("failed to tokenize record {index}"))?;
            let joined = tokens.join(",");

            writer
                .write_all(format!("{image_name}\t{joined}\n").as_bytes())
                .with_context(|| format!("failed to write {}", output_path.display()))?;

            observer.on_record(index, &image_name, &joined);
            summary.records += 1;
        }

        writer
            .flush()
            .with_context(|| format!("failed to flush {}", output_path.display()))?;

        debug!("Conversion finished: {} records", summary.records);
        Ok(summary)
    }
}
