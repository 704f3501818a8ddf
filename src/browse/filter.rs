// SPDX-License-Identifier: PMPL-1.0-or-later

//! Category filtering and title search.

use crate::catalog::Title;

/// A normalized filter token selecting a subset of the catalog.
///
/// A record matches when any of the following hold: one of its genre tags
/// contains the token (case-insensitive substring), its kind answers to the
/// token exactly, or the `arabic`/`foreign` pseudo-tokens agree with its
/// origin flag. `all` (or an empty token) is the identity filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    token: String,
}

impl Filter {
    pub fn all() -> Self {
        Self::parse("all")
    }

    /// Normalize a raw token. Tokens are compared case-insensitively, so
    /// `Drama`, `drama`, and `DRAMA` name the same filter.
    pub fn parse(token: &str) -> Self {
        Self {
            token: token.trim().to_lowercase(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.token.is_empty() || self.token == "all"
    }

    /// The normalized token, for chip highlighting.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn matches(&self, title: &Title) -> bool {
        if self.is_all() {
            return true;
        }
        title
            .genres
            .iter()
            .any(|genre| genre.to_lowercase().contains(&self.token))
            || title.kind.token() == self.token
            || (self.token == "arabic" && title.is_arabic)
            || (self.token == "foreign" && !title.is_arabic)
    }

    /// The matching subset, in input order.
    pub fn apply<'a>(&self, titles: &'a [Title]) -> Vec<&'a Title> {
        titles.iter().filter(|title| self.matches(title)).collect()
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::all()
    }
}

/// Case-insensitive substring search over both title languages. An empty or
/// whitespace-only query matches everything.
pub fn search<'a>(titles: &'a [Title], query: &str) -> Vec<&'a Title> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return titles.iter().collect();
    }
    titles
        .iter()
        .filter(|title| {
            title.title_en.to_lowercase().contains(&needle)
                || title.title_ar.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{demo_catalog, TitleKind};

    #[test]
    fn all_is_the_identity_filter() {
        let catalog = demo_catalog();
        let filtered = Filter::all().apply(&catalog);
        let ids: Vec<&str> = filtered.iter().map(|t| t.id.as_str()).collect();
        let expected: Vec<&str> = catalog.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, expected, "identity filter must preserve order");
    }

    #[test]
    fn genre_match_is_case_insensitive_substring() {
        let catalog = demo_catalog();
        let upper = Filter::parse("DRAMA").apply(&catalog);
        let lower = Filter::parse("drama").apply(&catalog);
        assert!(!upper.is_empty());
        assert_eq!(
            upper.iter().map(|t| &t.id).collect::<Vec<_>>(),
            lower.iter().map(|t| &t.id).collect::<Vec<_>>()
        );
        for title in upper {
            assert!(title
                .genres
                .iter()
                .any(|g| g.to_lowercase().contains("drama")));
        }
        // Substring, not whole-tag: "sci" hits "Sci-Fi".
        assert!(!Filter::parse("sci").apply(&catalog).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = demo_catalog();
        let filter = Filter::parse("thriller");
        let once: Vec<Title> = filter
            .apply(&catalog)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter.apply(&once);
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn kind_tokens_match_exactly() {
        let catalog = demo_catalog();
        for title in Filter::parse("series").apply(&catalog) {
            assert_eq!(title.kind, TitleKind::Series);
        }
        for title in Filter::parse("movie").apply(&catalog) {
            assert_eq!(title.kind, TitleKind::Movie);
        }
    }

    #[test]
    fn arabic_and_foreign_partition_the_catalog() {
        let catalog = demo_catalog();
        let arabic = Filter::parse("arabic").apply(&catalog);
        let foreign = Filter::parse("foreign").apply(&catalog);
        assert_eq!(arabic.len() + foreign.len(), catalog.len());
        assert!(arabic.iter().all(|t| t.is_arabic));
        assert!(foreign.iter().all(|t| !t.is_arabic));
    }

    #[test]
    fn unmatched_token_yields_empty_set() {
        let catalog = demo_catalog();
        assert!(Filter::parse("western").apply(&catalog).is_empty());
    }

    #[test]
    fn search_matches_both_languages_case_insensitively() {
        let catalog = demo_catalog();
        let by_en = search(&catalog, "desert");
        assert_eq!(by_en.len(), 1);
        assert_eq!(by_en[0].id, "1");
        let by_ar = search(&catalog, "القاهرة");
        assert_eq!(by_ar.len(), 1);
        assert_eq!(by_ar[0].id, "2");
    }

    #[test]
    fn blank_search_matches_everything() {
        let catalog = demo_catalog();
        assert_eq!(search(&catalog, "").len(), catalog.len());
        assert_eq!(search(&catalog, "   ").len(), catalog.len());
    }
}
