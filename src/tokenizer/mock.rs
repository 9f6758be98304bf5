/// Mock tokenizer for testing purposes.
///
/// Splits on whitespace and punctuation, lowercases words, and keeps
/// bracketed markers like `[CLS]`/`[SEP]` atomic. Deterministic and
/// vocabulary-free, so tests never need the downloaded tokenizer files.
use super::{TextTokenizer, TokenizerError};

/// A deterministic word-level tokenizer.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockTokenizer;

impl TextTokenizer for MockTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizerError> {
        let mut tokens = Vec::new();
        for word in text.split_whitespace() {
            split_word(word, &mut tokens);
        }
        Ok(tokens)
    }
}

/// Split one whitespace-delimited word, peeling off bracketed markers.
fn split_word(word: &str, tokens: &mut Vec<String>) {
    let mut rest = word;
    while !rest.is_empty() {
        if let Some(start) = rest.find('[') {
            if let Some(end) = rest[start..].find(']').map(|i| start + i) {
                split_plain(&rest[..start], tokens);
                tokens.push(rest[start..=end].to_string());
                rest = &rest[end + 1..];
                continue;
            }
        }
        split_plain(rest, tokens);
        break;
    }
}

/// Split a marker-free segment into lowercased words and punctuation.
fn split_plain(segment: &str, tokens: &mut Vec<String>) {
    let mut current = String::new();
    for ch in segment.chars() {
        if ch.is_alphanumeric() || ch == '\'' {
            current.extend(ch.to_lowercase());
        } else {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            tokens.push(ch.to_string());
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_stay_atomic() {
        let tokens = MockTokenizer.tokenize("[CLS] Is it red?[SEP] yes [SEP]").unwrap();
        assert_eq!(
            tokens,
            vec!["[CLS]", "is", "it", "red", "?", "[SEP]", "yes", "[SEP]"]
        );
    }

    #[test]
    fn test_deterministic() {
        let a = MockTokenizer.tokenize("What color is the cat?").unwrap();
        let b = MockTokenizer.tokenize("What color is the cat?").unwrap();
        assert_eq!(a, b, "same input should produce same tokens");
    }

    #[test]
    fn test_punctuation_is_split_off() {
        let tokens = MockTokenizer.tokenize("red, white-ish.").unwrap();
        assert_eq!(tokens, vec!["red", ",", "white", "-", "ish", "."]);
    }

    #[test]
    fn test_lowercases_words() {
        let tokens = MockTokenizer.tokenize("How MANY Dogs").unwrap();
        assert_eq!(tokens, vec!["how", "many", "dogs"]);
    }

    #[test]
    fn test_empty_input() {
        let tokens = MockTokenizer.tokenize("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_no_separator_characters_in_tokens() {
        let tokens = MockTokenizer
            .tokenize("[CLS] does the man wear glasses?[SEP] no [SEP]")
            .unwrap();
        assert!(tokens.iter().all(|t| !t.contains('\t') && !t.contains('\n')));
        assert!(tokens.iter().all(|t| !t.is_empty()));
    }
}
