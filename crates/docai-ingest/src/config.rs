//! Declarative tables and tuning constants for the document processor.

use docai_core::config::DEFAULT_CLASSIFY_THRESHOLD;
use docai_core::{DocumentCategory, EntityType};
use serde::{Deserialize, Serialize};

/// `D/M/Y` or `Y/M/D`, `/` or `-` separated.
pub const DATE_PATTERN: &str =
    r"\b([0-9]{1,2}[/-][0-9]{1,2}[/-][0-9]{2,4}|[0-9]{4}[/-][0-9]{1,2}[/-][0-9]{1,2})\b";
pub const MONEY_PATTERN: &str = r"\$[0-9,]+(?:\.[0-9]{2})?";
pub const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b";

/// Keywords (lowercase) that vote for a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    pub category: DocumentCategory,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(category: DocumentCategory, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }
}

/// A regex whose matches become entities of one type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityPattern {
    pub kind: EntityType,
    pub pattern: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Checked in order; the first rule reaching the threshold wins.
    pub category_rules: Vec<CategoryRule>,
    pub classify_threshold: usize,
    /// Multiplier for keyword hits in the filename.
    pub filename_weight: usize,
    /// Scanned in order; matches are concatenated.
    pub entity_patterns: Vec<EntityPattern>,
    pub max_entities: usize,
    pub max_tags: usize,
    pub summary_sentences: usize,
    pub title_max_chars: usize,
    pub metadata_confidence: f64,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            category_rules: default_category_rules(),
            classify_threshold: DEFAULT_CLASSIFY_THRESHOLD,
            filename_weight: 2,
            entity_patterns: default_entity_patterns(),
            max_entities: 10,
            max_tags: 5,
            summary_sentences: 3,
            title_max_chars: 100,
            metadata_confidence: 0.85,
        }
    }
}

impl ProcessorConfig {
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.classify_threshold = threshold;
        self
    }
}

/// Operations has no rule of its own; add one here to make it reachable.
pub fn default_category_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            DocumentCategory::Finance,
            &["invoice", "payment", "budget", "financial", "cost", "revenue", "accounting", "tax"],
        ),
        CategoryRule::new(
            DocumentCategory::Hr,
            &[
                "employee", "hiring", "recruitment", "performance", "salary", "benefits", "policy",
                "training",
            ],
        ),
        CategoryRule::new(
            DocumentCategory::Legal,
            &["contract", "agreement", "legal", "terms", "conditions", "compliance", "regulation"],
        ),
        CategoryRule::new(
            DocumentCategory::Contracts,
            &["agreement", "contract", "vendor", "supplier", "partnership", "license"],
        ),
        CategoryRule::new(
            DocumentCategory::TechnicalReports,
            &["technical", "analysis", "research", "development", "engineering", "specification"],
        ),
        CategoryRule::new(
            DocumentCategory::Marketing,
            &["campaign", "marketing", "brand", "customer", "promotion", "advertising"],
        ),
    ]
}

pub fn default_entity_patterns() -> Vec<EntityPattern> {
    vec![
        EntityPattern {
            kind: EntityType::Money,
            pattern: MONEY_PATTERN.to_string(),
            confidence: 0.9,
        },
        EntityPattern {
            kind: EntityType::Date,
            pattern: DATE_PATTERN.to_string(),
            confidence: 0.8,
        },
        EntityPattern {
            kind: EntityType::Person,
            pattern: EMAIL_PATTERN.to_string(),
            confidence: 0.7,
        },
    ]
}
