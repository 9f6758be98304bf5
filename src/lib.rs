//! # vqaprep — VQA dataset preparation
//!
//! One-shot converter that turns a VQA annotations file and its paired
//! questions file into a flat, tab-delimited text dataset
//! (`vqa_dataset.txt`) ready for language-model training.
//!
//! ## Architecture
//!
//! - **[`cli`]** — clap argument surface (input files, output dir, image-naming mode)
//! - **[`corpus`]** — serde loading of the annotation/question JSON, keyed question lookup
//! - **[`image_name`]** — corpus-specific image filename derivation (COCO / abstract scenes)
//! - **[`tokenizer`]** — WordPiece tokenization seam (HuggingFace `tokenizers` + hub download)
//! - **[`observer`]** — per-record diagnostics (sampled token/image spot checks)
//! - **[`converter`]** — the single linear pass that writes the dataset file

pub mod cli;
pub mod converter;
pub mod corpus;
pub mod image_name;
pub mod observer;
pub mod tokenizer;
