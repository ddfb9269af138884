//! # Theme and Segment Classification
//!
//! Keyword-driven topical classification of survey comments. A comment is
//! assigned every theme whose keyword list has at least one substring match
//! in the lowercased text, and a single business segment chosen by a fixed
//! priority rule. No stemming or tokenization, just case-insensitive
//! substring containment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Theme assigned when no keyword matches.
pub const UNCATEGORIZED_THEME: &str = "Uncategorized";

/// Theme names and their keyword lists, in fixed iteration order.
const THEME_KEYWORDS: &[(&str, &[&str])] = &[
    ("Oil Price Outlook", &["price", "oil", "barrel", "market"]),
    (
        "Geopolitical Risk",
        &["war", "conflict", "iran", "middle east", "strait"],
    ),
    ("Tariffs & Trade", &["tariff", "trade", "import", "export"]),
    (
        "Cost Inflation",
        &["cost", "steel", "water", "power", "price increase"],
    ),
    (
        "Service Sector Margin Pressure",
        &["margin", "vendor", "services", "squeezed"],
    ),
    (
        "Regulation & Politics",
        &["policy", "administration", "regulation", "government"],
    ),
    (
        "Capital Discipline / Rig Count",
        &["rig", "spending", "capital", "cut", "lay down"],
    ),
    (
        "M&A Environment",
        &["merger", "acquisition", "deal", "divestiture"],
    ),
    (
        "Natural Gas Sentiment",
        &["natural gas", "henry hub", "lng"],
    ),
    (
        "Interest Rates / Macro Policy",
        &["interest rate", "fed", "economy", "macroeconomic"],
    ),
];

/// Keywords marking the exploration & production segment.
const EP_KEYWORDS: &[&str] = &["e&p", "exploration"];

/// Keywords marking the oilfield services segment.
const SERVICES_KEYWORDS: &[&str] = &["service", "vendor"];

/// Coarse business-sector classification of a comment's author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// Exploration & production firms.
    #[serde(rename = "E&P")]
    EAndP,
    /// Oilfield services and vendors.
    Services,
    /// No segment keyword present.
    Unknown,
}

impl Segment {
    /// String form used in the persisted table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::EAndP => "E&P",
            Segment::Services => "Services",
            Segment::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword catalog for theme and segment detection.
///
/// Built once at startup from the static tables above and read-only for the
/// process lifetime.
pub struct ThemeCatalog {
    /// (theme name, keywords) in fixed iteration order
    themes: &'static [(&'static str, &'static [&'static str])],
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeCatalog {
    /// Create the catalog.
    pub fn new() -> Self {
        Self {
            themes: THEME_KEYWORDS,
        }
    }

    /// Names of all configured themes, in iteration order.
    pub fn theme_names(&self) -> Vec<&'static str> {
        self.themes.iter().map(|(name, _)| *name).collect()
    }

    /// Detect every theme whose keyword list matches the text.
    ///
    /// Matching lowercases the text once and tests substring containment for
    /// each keyword. Themes are independent: one comment can match several.
    /// Returns `[UNCATEGORIZED_THEME]` when nothing matches, never empty.
    pub fn detect_themes(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let matched: Vec<String> = self
            .themes
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|kw| lowered.contains(kw)))
            .map(|(name, _)| name.to_string())
            .collect();

        if matched.is_empty() {
            vec![UNCATEGORIZED_THEME.to_string()]
        } else {
            matched
        }
    }

    /// Classify the author's business segment.
    ///
    /// Disjoint three-way rule evaluated in priority order: E&P keywords
    /// win over services keywords; anything else is `Unknown`.
    pub fn detect_segment(&self, text: &str) -> Segment {
        let lowered = text.to_lowercase();
        if EP_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            Segment::EAndP
        } else if SERVICES_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            Segment::Services
        } else {
            Segment::Unknown
        }
    }
}
