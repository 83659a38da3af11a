//! Case-insensitive substring filter.
//!
//! ## Algorithm
//! 1. Case-fold the query once
//! 2. For each candidate, case-fold each present field
//! 3. Keep the candidate if any field contains the query
//!
//! Folding upper-cases then lower-cases each character, so "ß", "SS" and
//! "ss" all fold to "ss" and a query matches the same candidates as its
//! upper-case form. An empty query keeps everything, and kept candidates
//! stay in their original order.

use crate::traits::Searchable;

/// A compiled query, reusable across many candidate collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilter {
    needle: String,
}

impl QueryFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: fold_case(query),
        }
    }

    /// True when this filter lets every candidate through
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches<T: Searchable + ?Sized>(&self, candidate: &T) -> bool {
        if self.is_empty() {
            return true;
        }
        candidate
            .search_fields()
            .into_iter()
            .flatten()
            .any(|field| fold_case(field).contains(&self.needle))
    }

    /// Borrowing variant, returns references into `candidates`.
    pub fn apply<'a, T: Searchable>(&self, candidates: &'a [T]) -> Vec<&'a T> {
        candidates.iter().filter(|c| self.matches(*c)).collect()
    }

    /// Owning variant, clones the matching candidates.
    pub fn apply_cloned<T: Searchable + Clone>(&self, candidates: &[T]) -> Vec<T> {
        if self.is_empty() {
            return candidates.to_vec();
        }
        candidates
            .iter()
            .filter(|c| self.matches(*c))
            .cloned()
            .collect()
    }
}

/// Per-character full case fold, independent of surrounding text
pub fn fold_case(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Shorthand for `QueryFilter::new(query).apply_cloned(candidates)`.
pub fn filter_candidates<T: Searchable + Clone>(candidates: &[T], query: &str) -> Vec<T> {
    QueryFilter::new(query).apply_cloned(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_core::UserProfile;

    fn pioneers() -> Vec<UserProfile> {
        vec![
            UserProfile::new("u1", "Ada Lovelace").with_title("Engineer"),
            UserProfile::new("u2", "Grace Hopper").with_company("Navy"),
            UserProfile::new("u3", "Alan Turing").with_location("Manchester"),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let users = pioneers();
        assert_eq!(filter_candidates(&users, ""), users);
    }

    #[test]
    fn test_title_match() {
        let result = filter_candidates(&pioneers(), "eng");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Ada Lovelace");
    }

    #[test]
    fn test_case_insensitive() {
        let users = pioneers();
        for query in ["navy", "man", "lovelace", "TURING"] {
            assert_eq!(
                filter_candidates(&users, query),
                filter_candidates(&users, &query.to_uppercase()),
                "query {query}"
            );
        }
        assert_eq!(filter_candidates(&users, "NAVY")[0].name, "Grace Hopper");
    }

    #[test]
    fn test_sharp_s_matches_its_upper_case() {
        let users = vec![UserProfile::new("u1", "Johann Strauß")];
        assert_eq!("ß".to_uppercase(), "SS");
        assert_eq!(filter_candidates(&users, "ß").len(), 1);
        assert_eq!(filter_candidates(&users, "SS"), filter_candidates(&users, "ß"));
        assert_eq!(filter_candidates(&users, "strauss").len(), 1);
    }

    #[test]
    fn test_final_sigma_folds_like_sigma() {
        let users = vec![UserProfile::new("u1", "ΟΔΥΣΣΕΥΣ")];
        assert_eq!(filter_candidates(&users, "σ").len(), 1);
        assert_eq!(filter_candidates(&users, "ς").len(), 1);
    }

    #[test]
    fn test_absent_fields_never_match() {
        // Grace has no title and no location; only name and company can hit
        let users = pioneers();
        let result = filter_candidates(&users, "manchester");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "u3");
    }

    #[test]
    fn test_order_is_preserved() {
        let users = vec![
            UserProfile::new("u1", "Zed Engineer"),
            UserProfile::new("u2", "Amy").with_title("Engineering Manager"),
            UserProfile::new("u3", "Bob"),
            UserProfile::new("u4", "Cat").with_company("Engine Works"),
        ];
        let ids: Vec<_> = filter_candidates(&users, "engine")
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec!["u1", "u2", "u4"]);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        assert!(filter_candidates(&pioneers(), "zzz").is_empty());
    }

    #[test]
    fn test_borrowing_apply_on_strings() {
        let words = ["Teamwork", "Patience", "Empathy"];
        let filter = QueryFilter::new("PAT");
        assert_eq!(filter.apply(&words), vec![&"Patience", &"Empathy"]);
    }
}
