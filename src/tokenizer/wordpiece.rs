/// WordPiece tokenizer wrapper around the HuggingFace `tokenizers` crate.
///
/// Loads the `bert-base-uncased` vocabulary from a `tokenizer.json` and
/// returns token strings. The converter embeds `[CLS]`/`[SEP]` markers
/// literally in its input text, so encoding never adds special tokens of
/// its own; the vocabulary's added-tokens table keeps the literal
/// markers atomic.
use std::path::Path;

use tokenizers::Tokenizer;

use super::{TextTokenizer, TokenizerError};

/// Subword tokenizer for BERT-style vocabularies.
pub struct WordPieceTokenizer {
    inner: Tokenizer,
}

impl WordPieceTokenizer {
    /// Load a tokenizer from a `tokenizer.json` file in `vocab_dir`.
    pub fn from_vocab_dir(vocab_dir: &Path) -> Result<Self, TokenizerError> {
        let tokenizer_path = vocab_dir.join("tokenizer.json");

        if !tokenizer_path.exists() {
            return Err(TokenizerError::VocabLoadFailed(format!(
                "tokenizer.json not found in {}",
                vocab_dir.display()
            )));
        }

        let inner = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| TokenizerError::VocabLoadFailed(e.to_string()))?;

        Ok(Self { inner })
    }

    /// Get the vocabulary size.
    #[must_use]
    pub fn vocab_size(&self) -> usize {
        self.inner.get_vocab_size(false)
    }
}

impl TextTokenizer for WordPieceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizerError> {
        // add_special_tokens = false: the input already carries its markers
        let encoding = self
            .inner
            .encode(text, false)
            .map_err(|e| TokenizerError::EncodeFailed(e.to_string()))?;

        Ok(encoding.get_tokens().to_vec())
    }
}
