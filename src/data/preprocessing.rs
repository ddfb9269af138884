//! # Text Preprocessing
//!
//! Normalization and tokenization shared by the sentiment scorers. Survey
//! comments arrive as already-clean prose, so this is deliberately lighter
//! than social-media preprocessing: unicode normalization, lowercasing, and
//! whitespace collapsing.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Text preprocessor for survey comments.
pub struct TextPreprocessor {
    /// Regex for multiple whitespace
    whitespace_regex: Regex,
}

impl Default for TextPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPreprocessor {
    /// Create a new text preprocessor.
    pub fn new() -> Self {
        Self {
            whitespace_regex: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Normalize text for scoring.
    ///
    /// Steps:
    /// 1. Unicode normalization (NFC)
    /// 2. Convert to lowercase
    /// 3. Collapse whitespace runs to single spaces
    pub fn normalize(&self, text: &str) -> String {
        let normalized: String = text.nfc().collect();
        let lowercase = normalized.to_lowercase();
        let clean = self.whitespace_regex.replace_all(&lowercase, " ");
        clean.trim().to_string()
    }

    /// Split normalized text into word tokens, trimming surrounding
    /// punctuation from each token.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
            .filter(|word| !word.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_collapses() {
        let pre = TextPreprocessor::new();
        assert_eq!(
            pre.normalize("  Oil   prices ARE\n falling "),
            "oil prices are falling"
        );
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        let pre = TextPreprocessor::new();
        let tokens = pre.tokenize("prices are falling, margins squeezed.");
        assert_eq!(tokens, vec!["prices", "are", "falling", "margins", "squeezed"]);
    }

    #[test]
    fn test_tokenize_drops_pure_punctuation() {
        let pre = TextPreprocessor::new();
        let tokens = pre.tokenize("uncertainty -- everywhere");
        assert_eq!(tokens, vec!["uncertainty", "everywhere"]);
    }
}
