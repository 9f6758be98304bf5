/// Command-line surface.
///
/// Flag spellings keep the snake_case form the surrounding tooling
/// already passes (`--annot_file`, not `--annot-file`). Exactly one
/// image-naming flag is required; clap rejects the run before any
/// processing otherwise.
use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::converter::ConvertOptions;
use crate::image_name::ImageMode;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Prepare a flat tokenized dataset (vqa_dataset.txt) from VQA annotations and questions",
    group(ArgGroup::new("image_mode").required(true).multiple(false))
)]
pub struct Cli {
    /// Path to annotations file (.json)
    #[arg(short = 'a', long = "annot_file", value_name = "PATH")]
    pub annot_file: PathBuf,

    /// Path to questions file (.json)
    #[arg(short = 'q', long = "ques_file", value_name = "PATH")]
    pub ques_file: PathBuf,

    /// Directory that receives vqa_dataset.txt
    #[arg(short = 'o', long = "output_dir", value_name = "PATH")]
    pub output_dir: PathBuf,

    /// Image format is COCO_train2014_000000xxxxxx.jpg
    #[arg(long = "balanced_real_images", group = "image_mode")]
    pub balanced_real_images: bool,

    /// Image format is abstract_v002_train2015_0000000xxxxx.png
    #[arg(long = "abstract_scene_images", group = "image_mode")]
    pub abstract_scene_images: bool,

    /// Directory holding tokenizer.json (downloaded on first run)
    #[arg(
        long = "tokenizer_dir",
        value_name = "PATH",
        default_value = "models/bert-base-uncased"
    )]
    pub tokenizer_dir: PathBuf,
}

impl Cli {
    /// The image-naming mode selected by the flags.
    #[must_use]
    pub fn image_mode(&self) -> ImageMode {
        if self.balanced_real_images {
            ImageMode::BalancedReal
        } else {
            ImageMode::AbstractScene
        }
    }

    /// Bundle the parsed arguments into converter options.
    #[must_use]
    pub fn to_options(&self) -> ConvertOptions {
        ConvertOptions {
            annot_file: self.annot_file.clone(),
            ques_file: self.ques_file.clone(),
            output_dir: self.output_dir.clone(),
            mode: self.image_mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &[&str] = &[
        "vqaprep",
        "-a",
        "annotations.json",
        "-q",
        "questions.json",
        "-o",
        "out",
    ];

    fn parse(extra: &[&str]) -> Result<Cli, clap::Error> {
        let mut argv: Vec<&str> = BASE.to_vec();
        argv.extend_from_slice(extra);
        Cli::try_parse_from(argv)
    }

    #[test]
    fn test_balanced_real_mode() {
        let cli = parse(&["--balanced_real_images"]).unwrap();
        assert_eq!(cli.image_mode(), ImageMode::BalancedReal);
        assert_eq!(cli.annot_file, PathBuf::from("annotations.json"));
        assert_eq!(cli.tokenizer_dir, PathBuf::from("models/bert-base-uncased"));
    }

    #[test]
    fn test_abstract_scene_mode() {
        let cli = parse(&["--abstract_scene_images"]).unwrap();
        assert_eq!(cli.image_mode(), ImageMode::AbstractScene);
    }

    #[test]
    fn test_both_mode_flags_rejected() {
        let result = parse(&["--balanced_real_images", "--abstract_scene_images"]);
        assert!(result.is_err(), "mode flags are mutually exclusive");
    }

    #[test]
    fn test_no_mode_flag_rejected() {
        let result = parse(&[]);
        assert!(result.is_err(), "one mode flag is required");
    }

    #[test]
    fn test_missing_required_path_rejected() {
        let result = Cli::try_parse_from(["vqaprep", "--balanced_real_images"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_long_flags_keep_snake_case() {
        let cli = Cli::try_parse_from([
            "vqaprep",
            "--annot_file",
            "a.json",
            "--ques_file",
            "q.json",
            "--output_dir",
            "out",
            "--balanced_real_images",
        ])
        .unwrap();
        assert_eq!(cli.ques_file, PathBuf::from("q.json"));
    }

    #[test]
    fn test_to_options() {
        let cli = parse(&["--balanced_real_images"]).unwrap();
        let options = cli.to_options();
        assert_eq!(options.mode, ImageMode::BalancedReal);
        assert_eq!(options.output_dir, PathBuf::from("out"));
        assert!(options.validate().is_ok());
    }
}
