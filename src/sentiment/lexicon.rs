//! # Lexicon Scorer
//!
//! Continuous sentiment measures from a word lexicon: polarity in `[-1, 1]`
//! and subjectivity in `[0, 1]`. This scorer is independent of the discrete
//! classifier and is used to sanity-check its labels, not to replace them.

use std::collections::HashMap;

/// Word lexicon carrying (polarity, subjectivity) per entry, with negation
/// and intensifier handling.
pub struct LexiconScorer {
    /// Word → (polarity, subjectivity)
    words: HashMap<&'static str, (f64, f64)>,
    /// Words that flip the polarity of the next sentiment word
    negations: Vec<&'static str>,
    /// Word → polarity multiplier
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Create the scorer with the built-in lexicon.
    pub fn new() -> Self {
        let entries: &[(&str, f64, f64)] = &[
            // (word, polarity, subjectivity)
            ("improving", 0.6, 0.6),
            ("improved", 0.6, 0.6),
            ("improvement", 0.5, 0.5),
            ("optimistic", 0.7, 0.9),
            ("optimism", 0.7, 0.9),
            ("strong", 0.5, 0.6),
            ("stronger", 0.5, 0.6),
            ("robust", 0.5, 0.6),
            ("healthy", 0.5, 0.5),
            ("good", 0.5, 0.6),
            ("great", 0.8, 0.8),
            ("better", 0.4, 0.5),
            ("growth", 0.4, 0.4),
            ("growing", 0.4, 0.4),
            ("recovery", 0.4, 0.4),
            ("rebound", 0.4, 0.4),
            ("confident", 0.6, 0.8),
            ("confidence", 0.5, 0.7),
            ("encouraging", 0.6, 0.7),
            ("profitable", 0.6, 0.5),
            ("opportunity", 0.3, 0.5),
            ("stable", 0.2, 0.3),
            ("steady", 0.2, 0.3),
            ("falling", -0.5, 0.4),
            ("fell", -0.4, 0.4),
            ("decline", -0.5, 0.4),
            ("declining", -0.5, 0.4),
            ("weak", -0.5, 0.6),
            ("weaker", -0.5, 0.6),
            ("weakness", -0.5, 0.6),
            ("poor", -0.5, 0.6),
            ("bad", -0.6, 0.7),
            ("worse", -0.6, 0.7),
            ("worst", -0.8, 0.8),
            ("difficult", -0.4, 0.6),
            ("tough", -0.4, 0.6),
            ("uncertain", -0.4, 0.7),
            ("uncertainty", -0.4, 0.7),
            ("concern", -0.4, 0.6),
            ("concerned", -0.4, 0.6),
            ("concerns", -0.4, 0.6),
            ("fear", -0.6, 0.8),
            ("pessimistic", -0.7, 0.9),
            ("recession", -0.7, 0.6),
            ("downturn", -0.6, 0.5),
            ("slowdown", -0.5, 0.5),
            ("oversupply", -0.4, 0.4),
            ("squeezed", -0.5, 0.6),
            ("struggling", -0.6, 0.6),
            ("layoffs", -0.7, 0.5),
            ("bankruptcy", -0.8, 0.5),
            ("bankruptcies", -0.8, 0.5),
            ("losses", -0.5, 0.4),
            ("loss", -0.5, 0.4),
            ("volatile", -0.3, 0.5),
            ("volatility", -0.3, 0.5),
            ("hurting", -0.5, 0.5),
            ("hurt", -0.5, 0.5),
        ];

        let words = entries
            .iter()
            .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
            .collect();

        let negations = vec![
            "not", "no", "never", "neither", "nobody", "nothing", "none", "cannot",
            "can't", "don't", "doesn't", "didn't", "won't", "wouldn't", "shouldn't",
            "couldn't", "isn't", "aren't", "wasn't", "weren't", "hardly", "barely",
        ];

        let mut intensifiers = HashMap::new();
        intensifiers.insert("very", 1.5);
        intensifiers.insert("extremely", 2.0);
        intensifiers.insert("highly", 1.5);
        intensifiers.insert("significantly", 1.5);
        intensifiers.insert("substantially", 1.5);
        intensifiers.insert("dramatically", 1.8);
        intensifiers.insert("slightly", 0.5);
        intensifiers.insert("somewhat", 0.7);
        intensifiers.insert("marginally", 0.5);

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    /// Whether a word flips the next sentiment word's polarity.
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word)
    }

    /// Score a comment.
    ///
    /// Walks the words once: negations flip the sign of the next matched
    /// word, intensifiers scale it. Polarity is the mean of matched word
    /// polarities clamped to `[-1, 1]`; subjectivity is the mean of matched
    /// word subjectivities clamped to `[0, 1]`. No matches scores (0, 0).
    pub fn score(&self, text: &str) -> LexiconScore {
        let lowered = text.to_lowercase();
        let mut polarities: Vec<f64> = Vec::new();
        let mut subjectivities: Vec<f64> = Vec::new();

        let mut negate_next = false;
        let mut intensifier: f64 = 1.0;

        for raw in lowered.split_whitespace() {
            let word = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'');

            if self.is_negation(word) {
                negate_next = true;
                continue;
            }

            if let Some(&mult) = self.intensifiers.get(word) {
                intensifier = mult;
                continue;
            }

            if let Some(&(mut polarity, subjectivity)) = self.words.get(word) {
                if negate_next {
                    polarity = -polarity;
                    negate_next = false;
                }
                polarity *= intensifier;
                intensifier = 1.0;

                polarities.push(polarity);
                subjectivities.push(subjectivity);
            } else {
                negate_next = false;
                intensifier = 1.0;
            }
        }

        if polarities.is_empty() {
            return LexiconScore {
                polarity: 0.0,
                subjectivity: 0.0,
            };
        }

        let polarity = polarities.iter().sum::<f64>() / polarities.len() as f64;
        let subjectivity = subjectivities.iter().sum::<f64>() / subjectivities.len() as f64;

        LexiconScore {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

/// Continuous sentiment measures for one comment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconScore {
    /// Mean signed word polarity, in `[-1, 1]`.
    pub polarity: f64,
    /// Mean word subjectivity, in `[0, 1]`.
    pub subjectivity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let scorer = LexiconScorer::new();
        let score = scorer.score("Conditions are improving and we are optimistic");
        assert!(score.polarity > 0.0);
        assert!(score.subjectivity > 0.0);
    }

    #[test]
    fn test_negative_text() {
        let scorer = LexiconScorer::new();
        let score = scorer.score("Weak prices and falling margins");
        assert!(score.polarity < 0.0);
    }

    #[test]
    fn test_no_matches_scores_zero() {
        let scorer = LexiconScorer::new();
        let score = scorer.score("We drilled three wells this quarter");
        assert_eq!(score.polarity, 0.0);
        assert_eq!(score.subjectivity, 0.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let scorer = LexiconScorer::new();
        let plain = scorer.score("the outlook is optimistic");
        let negated = scorer.score("the outlook is not optimistic");
        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < 0.0);
    }

    #[test]
    fn test_intensifier_scales_polarity() {
        let scorer = LexiconScorer::new();
        let plain = scorer.score("demand is weak");
        let intensified = scorer.score("demand is extremely weak");
        assert!(intensified.polarity < plain.polarity);
    }

    #[test]
    fn test_bounds() {
        let scorer = LexiconScorer::new();
        let score = scorer.score("extremely great extremely great extremely great");
        assert!(score.polarity <= 1.0);
        assert!(score.subjectivity <= 1.0);
    }
}
