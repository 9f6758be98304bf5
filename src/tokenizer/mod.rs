/// Tokenizer trait and shared error type for subword tokenization.
pub mod download;
pub mod mock;
pub mod wordpiece;

use thiserror::Error;

/// Errors that can occur during tokenization.
#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("vocabulary load failed: {0}")]
    VocabLoadFailed(String),

    #[error("encoding failed: {0}")]
    EncodeFailed(String),
}

/// Trait for subword tokenizer implementations.
///
/// Implementations must be `Send + Sync` so a single tokenizer can be
/// shared behind a reference.
pub trait TextTokenizer: Send + Sync {
    /// Split `text` into an ordered sequence of token strings.
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizerError>;
}
