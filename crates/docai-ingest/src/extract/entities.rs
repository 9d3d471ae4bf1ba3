//! Pattern-table entity extraction.

use docai_core::{EntityType, Error, ExtractedEntity, Result};
use regex::Regex;

use crate::config::EntityPattern;

/// An [`EntityPattern`] with its regex compiled.
#[derive(Debug, Clone)]
pub struct EntityMatcher {
    pub kind: EntityType,
    pub regex: Regex,
    pub confidence: f64,
}

impl EntityMatcher {
    pub fn compile(pattern: &EntityPattern) -> Result<Self> {
        let regex = Regex::new(&pattern.pattern).map_err(|e| {
            Error::Config(format!("invalid {:?} entity pattern: {}", pattern.kind, e))
        })?;
        Ok(Self {
            kind: pattern.kind,
            regex,
            confidence: pattern.confidence,
        })
    }
}

/// All matches of each matcher, matcher by matcher, cut to `max`.
pub fn extract_entities(
    text: &str,
    matchers: &[EntityMatcher],
    max: usize,
) -> Vec<ExtractedEntity> {
    matchers
        .iter()
        .flat_map(|m| {
            m.regex.find_iter(text).map(move |found| ExtractedEntity {
                text: found.as_str().to_string(),
                kind: m.kind,
                confidence: m.confidence,
            })
        })
        .take(max)
        .collect()
}
