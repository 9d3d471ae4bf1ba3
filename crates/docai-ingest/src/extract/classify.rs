//! Keyword-weighted category classification.

use docai_core::DocumentCategory;

use crate::config::CategoryRule;

/// Keyword hits for one rule: body occurrences plus weighted filename occurrences.
///
/// Inputs must already be lowercase. Occurrences are non-overlapping substring
/// matches, so `"invoices"` counts as a hit for `"invoice"`.
pub fn rule_score(
    rule: &CategoryRule,
    content_lower: &str,
    filename_lower: &str,
    filename_weight: usize,
) -> usize {
    rule.keywords
        .iter()
        .filter(|kw| !kw.is_empty())
        .map(|kw| {
            content_lower.matches(kw.as_str()).count()
                + filename_lower.matches(kw.as_str()).count() * filename_weight
        })
        .sum()
}

/// First rule (in table order) whose score reaches `threshold`, else `Uncategorized`.
///
/// First-qualifying, not highest-scoring.
pub fn classify(
    content: &str,
    filename: &str,
    rules: &[CategoryRule],
    threshold: usize,
    filename_weight: usize,
) -> DocumentCategory {
    let content_lower = content.to_lowercase();
    let filename_lower = filename.to_lowercase();

    rules
        .iter()
        .find(|rule| {
            rule_score(rule, &content_lower, &filename_lower, filename_weight) >= threshold
        })
        .map(|rule| rule.category)
        .unwrap_or(DocumentCategory::Uncategorized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_category_rules;

    fn classify_default(content: &str, filename: &str) -> DocumentCategory {
        classify(content, filename, &default_category_rules(), 3, 2)
    }

    #[test]
    fn test_invoice_filename_is_finance() {
        let category = classify_default(
            "Invoice #123 payment due. Budget review scheduled. Tax filing reminder.",
            "invoice_march.txt",
        );
        assert_eq!(category, DocumentCategory::Finance);
    }

    #[test]
    fn test_no_keywords_is_uncategorized() {
        assert_eq!(
            classify_default("The quick brown fox jumps.", "notes.txt"),
            DocumentCategory::Uncategorized
        );
    }

    #[test]
    fn test_three_body_hits() {
        assert_eq!(
            classify_default("Campaign launch. Brand refresh. Customer survey.", "q3.txt"),
            DocumentCategory::Marketing
        );
        assert_eq!(
            classify_default("Two mentions: campaign and brand.", "q3.txt"),
            DocumentCategory::Uncategorized
        );
    }

    #[test]
    fn test_first_qualifying_rule_wins() {
        // Legal precedes Contracts in the table, so a contract-heavy text lands in Legal
        // even though Contracts scores higher.
        let text = "contract agreement terms vendor supplier partnership license";
        let rules = default_category_rules();
        let lower = text.to_lowercase();
        let legal = rule_score(&rules[2], &lower, "", 2);
        let contracts = rule_score(&rules[3], &lower, "", 2);
        assert!(contracts > legal);
        assert_eq!(classify_default(text, "x.txt"), DocumentCategory::Legal);
    }

    #[test]
    fn test_filename_weight() {
        // One body hit plus one filename hit weighted x2 reaches the threshold.
        assert_eq!(
            classify_default("Quarterly campaign notes.", "campaign.txt"),
            DocumentCategory::Marketing
        );
    }

    #[test]
    fn test_substring_matches_count() {
        let rules = vec![CategoryRule::new(DocumentCategory::Operations, &["ship"])];
        assert_eq!(
            classify("shipping shipment shipped", "", &rules, 3, 2),
            DocumentCategory::Operations
        );
    }
}
