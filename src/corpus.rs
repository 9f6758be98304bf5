/// Loading of the VQA annotation and question JSON files.
///
/// Both files are parsed with serde into the few fields the converter
/// needs; everything else in the JSON is ignored. Annotations keep the
/// file's array order. Questions are indexed by `question_id` for the
/// per-record lookup.
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// One question/answer annotation from the annotations file.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationRecord {
    pub image_id: u64,
    pub question_id: u64,
    pub multiple_choice_answer: String,
}

/// One question from the questions file.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub question_id: u64,
    pub question: String,
}

#[derive(Debug, Deserialize)]
struct AnnotationFile {
    annotations: Vec<AnnotationRecord>,
}

#[derive(Debug, Deserialize)]
struct QuestionFile {
    questions: Vec<QuestionRecord>,
}

/// The joined corpus: annotations in file order plus a question lookup.
pub struct VqaCorpus {
    annotations: Vec<AnnotationRecord>,
    questions: HashMap<u64, QuestionRecord>,
}

impl VqaCorpus {
    /// Load and join the two corpus files.
    ///
    /// Missing or malformed files are fatal. Duplicate `question_id`s in
    /// the questions file keep the last occurrence.
    pub fn load(annot_path: &Path, ques_path: &Path) -> Result<Self> {
        let annot_file: AnnotationFile = read_json(annot_path)
            .with_context(|| format!("failed to load annotations: {}", annot_path.display()))?;

        let ques_file: QuestionFile = read_json(ques_path)
            .with_context(|| format!("failed to load questions: {}", ques_path.display()))?;

        let questions = ques_file
            .questions
            .into_iter()
            .map(|q| (q.question_id, q))
            .collect();

        Ok(Self {
            annotations: annot_file.annotations,
            questions,
        })
    }

    /// Annotation records in the order they appear in the file.
    #[must_use]
    pub fn annotations(&self) -> &[AnnotationRecord] {
        &self.annotations
    }

    /// Look up the question text for `question_id`.
    ///
    /// Every annotation is expected to have a paired question; a missing
    /// pairing is a corpus defect and fatal to the run.
    pub fn question(&self, question_id: u64) -> Result<&str> {
        match self.questions.get(&question_id) {
            Some(record) => Ok(&record.question),
            None => anyhow::bail!("no question record for question_id {question_id}"),
        }
    }

    /// Number of annotation records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("invalid JSON in {}", path.display()))
}
