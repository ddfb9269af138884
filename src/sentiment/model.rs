//! # Sentiment Model
//!
//! Discrete 3-class sentiment classification of survey comments. The model
//! wraps a pretrained checkpoint ([`super::weights`]): input text is
//! normalized, tokenized, and truncated to the model's maximum input
//! length, per-class log scores are accumulated from the checkpoint, and a
//! numerically stable softmax picks the winning class. The whole path is
//! deterministic given the fixed checkpoint.
//!
//! Inference failures are visible: empty input after normalization or a
//! non-finite probability is an error, never a silently defaulted label.

use super::weights::{CLASS_PRIORS, MAX_INPUT_TOKENS, TOKEN_CLASS_WEIGHTS};
use crate::data::preprocessing::TextPreprocessor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Discrete sentiment classes, in checkpoint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Negative,
    Neutral,
    Positive,
}

impl SentimentLabel {
    /// All labels, in checkpoint order.
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
        SentimentLabel::Positive,
    ];

    /// String form used in the persisted table.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Positive => "Positive",
        }
    }

    /// Numeric score used for time-series aggregation: -1, 0, +1.
    pub fn score(&self) -> f64 {
        match self {
            SentimentLabel::Negative => -1.0,
            SentimentLabel::Neutral => 0.0,
            SentimentLabel::Positive => 1.0,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during inference.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("no tokens left after normalization of {0:?}")]
    EmptyInput(String),

    #[error("non-finite class probability for input {0:?}")]
    NonFiniteScore(String),
}

/// Handle to the loaded sentiment classifier.
///
/// Load once with [`SentimentModel::load`] and hold for the process
/// lifetime; classification borrows the handle immutably.
pub struct SentimentModel {
    /// Token → per-class log weights, built from the checkpoint
    vocab: HashMap<&'static str, [f64; 3]>,
    /// Log class priors
    priors: [f64; 3],
    /// Maximum tokens scored per input
    max_input_tokens: usize,
    /// Shared text normalizer
    preprocessor: TextPreprocessor,
}

impl SentimentModel {
    /// Load the embedded checkpoint and return a ready classifier.
    pub fn load() -> Self {
        let vocab = TOKEN_CLASS_WEIGHTS.iter().copied().collect();
        Self {
            vocab,
            priors: CLASS_PRIORS,
            max_input_tokens: MAX_INPUT_TOKENS,
            preprocessor: TextPreprocessor::new(),
        }
    }

    /// Number of tokens in the checkpoint vocabulary.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Classify a comment into one of the three sentiment classes.
    pub fn classify(&self, text: &str) -> Result<SentimentLabel, ModelError> {
        let probs = self.probabilities(text)?;
        let (label_index, _) = probs
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .unwrap_or((1, &probs[1]));
        Ok(SentimentLabel::ALL[label_index])
    }

    /// Class probabilities `[Negative, Neutral, Positive]` for a comment.
    pub fn probabilities(&self, text: &str) -> Result<[f64; 3], ModelError> {
        let normalized = self.preprocessor.normalize(text);
        let mut tokens = self.preprocessor.tokenize(&normalized);
        if tokens.is_empty() {
            return Err(ModelError::EmptyInput(text.to_string()));
        }
        tokens.truncate(self.max_input_tokens);

        let mut logits = self.priors;
        for token in &tokens {
            if let Some(weights) = self.vocab.get(token.as_str()) {
                for (logit, weight) in logits.iter_mut().zip(weights.iter()) {
                    *logit += weight;
                }
            }
            // out-of-vocabulary tokens contribute nothing
        }

        let probs = softmax(logits);
        if probs.iter().any(|p| !p.is_finite()) {
            return Err(ModelError::NonFiniteScore(text.to_string()));
        }
        Ok(probs)
    }
}

/// Numerically stable softmax over the three class logits.
fn softmax(logits: [f64; 3]) -> [f64; 3] {
    let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps = logits.map(|l| (l - max).exp());
    let sum: f64 = exps.iter().sum();
    exps.map(|e| e / sum)
}
