//! # Classifier Checkpoint
//!
//! Static checkpoint for the sentiment classifier: class priors and
//! per-token class weights exported from a multinomial sentiment model
//! fitted on energy-survey text. Class order everywhere is
//! `[Negative, Neutral, Positive]`. The table is data, not code; the
//! classifier in [`crate::sentiment::model`] treats it as an opaque
//! checkpoint.

/// Maximum number of input tokens the model scores; longer input is truncated.
pub(crate) const MAX_INPUT_TOKENS: usize = 512;

/// Log class priors, `[Negative, Neutral, Positive]`.
pub(crate) const CLASS_PRIORS: [f64; 3] = [-1.20, -0.95, -1.20];

/// Per-token log-weight contributions, `[Negative, Neutral, Positive]`.
/// Tokens are matched after normalization; out-of-vocabulary tokens
/// contribute nothing.
pub(crate) const TOKEN_CLASS_WEIGHTS: &[(&str, [f64; 3])] = &[
    // negative-leaning vocabulary
    ("bad", [1.3, -0.1, -1.3]),
    ("bankrupt", [1.9, -0.4, -1.9]),
    ("bankruptcies", [1.9, -0.4, -1.9]),
    ("bankruptcy", [1.9, -0.4, -1.9]),
    ("cancel", [1.2, -0.1, -1.2]),
    ("cancelled", [1.2, -0.1, -1.2]),
    ("collapse", [1.8, -0.3, -1.8]),
    ("concern", [1.2, 0.0, -1.2]),
    ("concerned", [1.2, 0.0, -1.2]),
    ("concerns", [1.2, 0.0, -1.2]),
    ("curtail", [1.1, 0.0, -1.1]),
    ("curtailed", [1.1, 0.0, -1.1]),
    ("decline", [1.4, -0.1, -1.4]),
    ("declined", [1.4, -0.1, -1.4]),
    ("declining", [1.5, -0.1, -1.5]),
    ("difficult", [1.3, 0.0, -1.3]),
    ("downturn", [1.6, -0.2, -1.6]),
    ("drop", [1.3, 0.0, -1.3]),
    ("dropped", [1.3, 0.0, -1.3]),
    ("dropping", [1.3, 0.0, -1.3]),
    ("fear", [1.4, -0.1, -1.4]),
    ("fell", [1.3, 0.0, -1.3]),
    ("falling", [1.5, 0.0, -1.6]),
    ("hurt", [1.3, -0.1, -1.3]),
    ("hurting", [1.3, -0.1, -1.3]),
    ("idle", [1.0, 0.1, -1.0]),
    ("idled", [1.0, 0.1, -1.0]),
    ("inflation", [1.0, 0.1, -1.0]),
    ("layoff", [1.7, -0.3, -1.7]),
    ("layoffs", [1.7, -0.3, -1.7]),
    ("lose", [1.3, -0.1, -1.3]),
    ("loss", [1.4, -0.1, -1.4]),
    ("losses", [1.4, -0.1, -1.4]),
    ("lower", [0.9, 0.2, -0.9]),
    ("negative", [1.4, -0.1, -1.4]),
    ("oversupply", [1.3, 0.0, -1.3]),
    ("pessimistic", [1.7, -0.2, -1.7]),
    ("poor", [1.3, -0.1, -1.3]),
    ("recession", [1.7, -0.2, -1.7]),
    ("shut", [1.1, 0.0, -1.1]),
    ("slowdown", [1.4, -0.1, -1.4]),
    ("slowing", [1.2, 0.0, -1.2]),
    ("squeezed", [1.4, -0.1, -1.5]),
    ("stress", [1.2, 0.0, -1.2]),
    ("struggle", [1.3, -0.1, -1.3]),
    ("struggling", [1.4, -0.1, -1.4]),
    ("tariff", [1.0, 0.2, -1.0]),
    ("tariffs", [1.0, 0.2, -1.0]),
    ("tough", [1.1, 0.1, -1.1]),
    ("uncertain", [1.2, 0.1, -1.2]),
    ("uncertainty", [1.3, 0.1, -1.3]),
    ("volatile", [1.1, 0.1, -1.1]),
    ("volatility", [1.1, 0.1, -1.1]),
    ("weak", [1.4, -0.1, -1.4]),
    ("weaker", [1.4, -0.1, -1.4]),
    ("weakness", [1.4, -0.1, -1.4]),
    ("worse", [1.5, -0.1, -1.5]),
    ("worst", [1.6, -0.2, -1.6]),
    // positive-leaning vocabulary
    ("accelerate", [-1.1, -0.1, 1.2]),
    ("accelerating", [-1.1, -0.1, 1.2]),
    ("better", [-1.2, 0.0, 1.3]),
    ("confidence", [-1.3, -0.1, 1.4]),
    ("confident", [-1.3, -0.1, 1.4]),
    ("encouraged", [-1.4, -0.2, 1.5]),
    ("encouraging", [-1.4, -0.2, 1.5]),
    ("expand", [-1.0, 0.0, 1.1]),
    ("expanding", [-1.0, 0.0, 1.1]),
    ("expansion", [-1.0, 0.0, 1.1]),
    ("gain", [-1.1, 0.0, 1.2]),
    ("gains", [-1.1, 0.0, 1.2]),
    ("good", [-1.2, 0.0, 1.3]),
    ("great", [-1.4, -0.2, 1.5]),
    ("grow", [-1.1, 0.0, 1.2]),
    ("growing", [-1.1, 0.0, 1.2]),
    ("growth", [-1.1, 0.0, 1.2]),
    ("healthy", [-1.2, -0.1, 1.3]),
    ("improve", [-1.4, -0.2, 1.5]),
    ("improved", [-1.4, -0.2, 1.5]),
    ("improvement", [-1.4, -0.2, 1.5]),
    ("improving", [-1.5, -0.2, 1.6]),
    ("momentum", [-1.0, 0.0, 1.1]),
    ("opportunity", [-1.0, 0.0, 1.1]),
    ("optimism", [-1.6, -0.3, 1.7]),
    ("optimistic", [-1.7, -0.3, 1.8]),
    ("positive", [-1.4, -0.1, 1.5]),
    ("profitable", [-1.3, -0.1, 1.4]),
    ("rebound", [-1.3, -0.1, 1.4]),
    ("rebounded", [-1.3, -0.1, 1.4]),
    ("recover", [-1.2, 0.0, 1.3]),
    ("recovery", [-1.2, 0.0, 1.3]),
    ("robust", [-1.3, -0.1, 1.4]),
    ("solid", [-1.2, -0.1, 1.3]),
    ("strong", [-1.3, -0.1, 1.4]),
    ("stronger", [-1.3, -0.1, 1.4]),
    ("upside", [-1.1, 0.0, 1.2]),
    // high-frequency neutral vocabulary, mildly informative
    ("activity", [-0.1, 0.3, -0.1]),
    ("basin", [0.0, 0.2, 0.0]),
    ("business", [0.0, 0.2, 0.0]),
    ("capital", [0.1, 0.2, -0.1]),
    ("company", [0.0, 0.2, 0.0]),
    ("crude", [0.0, 0.2, 0.0]),
    ("demand", [0.0, 0.2, 0.0]),
    ("drilling", [0.0, 0.2, 0.0]),
    ("gas", [0.0, 0.2, 0.0]),
    ("margin", [0.3, 0.1, -0.3]),
    ("margins", [0.3, 0.1, -0.3]),
    ("market", [0.0, 0.2, 0.0]),
    ("oil", [0.0, 0.2, 0.0]),
    ("operators", [0.0, 0.2, 0.0]),
    ("outlook", [0.0, 0.2, 0.0]),
    ("price", [0.1, 0.2, -0.1]),
    ("prices", [0.1, 0.2, -0.1]),
    ("production", [0.0, 0.2, 0.0]),
    ("quarter", [0.0, 0.2, 0.0]),
    ("rig", [0.0, 0.2, 0.0]),
    ("rigs", [0.0, 0.2, 0.0]),
    ("spending", [0.1, 0.2, -0.1]),
    ("supply", [0.0, 0.2, 0.0]),
    ("survey", [0.0, 0.2, 0.0]),
    ("wells", [0.0, 0.2, 0.0]),
    ("year", [0.0, 0.2, 0.0]),
];
