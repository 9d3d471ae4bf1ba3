//! Category → role lookup.

use docai_core::{DocumentCategory, Role};

/// Roles allowed to see a document of `category`.
pub fn access_level_for(category: DocumentCategory) -> Vec<Role> {
    match category {
        DocumentCategory::Finance => vec![Role::Finance, Role::Admin],
        DocumentCategory::Hr => vec![Role::Hr, Role::Admin],
        DocumentCategory::Legal | DocumentCategory::Contracts => vec![Role::Legal, Role::Admin],
        DocumentCategory::TechnicalReports
        | DocumentCategory::Marketing
        | DocumentCategory::Operations
        | DocumentCategory::Uncategorized => vec![Role::All],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_table() {
        assert_eq!(access_level_for(DocumentCategory::Finance), vec![Role::Finance, Role::Admin]);
        assert_eq!(access_level_for(DocumentCategory::Hr), vec![Role::Hr, Role::Admin]);
        assert_eq!(access_level_for(DocumentCategory::Contracts), vec![Role::Legal, Role::Admin]);
        assert_eq!(access_level_for(DocumentCategory::Uncategorized), vec![Role::All]);
        assert_eq!(access_level_for(DocumentCategory::Operations), vec![Role::All]);
    }
}
