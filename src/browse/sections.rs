// SPDX-License-Identifier: PMPL-1.0-or-later

//! Home-page section derivation.
//!
//! Everything the landing page shows: a hero fed by featured/trending
//! entries, followed by fixed category rows. Each row carries its own
//! filter chips. A row whose filtered set comes out empty renders the
//! localized `noResults` message — uniformly, in every front-end; rows are
//! never silently dropped.

use super::filter::Filter;
use crate::catalog::{Title, TitleKind};

/// One home-page row: a localized title key, its filter chip tokens, and
/// the catalog subset it shows before chip filtering.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    pub title_key: &'static str,
    pub chips: &'static [&'static str],
    pub titles: Vec<&'a Title>,
}

impl<'a> Section<'a> {
    /// The row's visible set under the given chip filter, in row order.
    pub fn visible(&self, filter: &Filter) -> Vec<&'a Title> {
        self.titles
            .iter()
            .copied()
            .filter(|title| filter.matches(title))
            .collect()
    }
}

/// Entries eligible for the hero carousel, in document order.
pub fn featured(catalog: &[Title]) -> Vec<&Title> {
    catalog
        .iter()
        .filter(|title| title.featured || title.trending)
        .collect()
}

/// The fixed home-page rows, derived fresh from the catalog.
pub fn home_sections(catalog: &[Title]) -> Vec<Section<'_>> {
    let mut latest: Vec<&Title> = catalog.iter().collect();
    // Stable sort: within a year, document order survives.
    latest.sort_by_key(|title| std::cmp::Reverse(title.year));

    vec![
        Section {
            title_key: "latest",
            chips: &["movie", "series", "arabic", "foreign"],
            titles: latest,
        },
        Section {
            title_key: "arabicMovies",
            chips: &["Drama", "Romance", "Comedy", "Action"],
            titles: catalog.iter().filter(|t| t.is_arabic).collect(),
        },
        Section {
            title_key: "foreignMovies",
            chips: &["Action", "Thriller", "Sci-Fi", "Horror"],
            titles: catalog.iter().filter(|t| !t.is_arabic).collect(),
        },
        Section {
            title_key: "topRated",
            chips: &["movie", "series"],
            titles: catalog.iter().filter(|t| t.rating >= 8.5).collect(),
        },
        Section {
            title_key: "tvSeries",
            chips: &["Drama", "Mystery", "Romance", "Historical"],
            titles: catalog
                .iter()
                .filter(|t| t.kind == TitleKind::Series)
                .collect(),
        },
        Section {
            title_key: "allMovies",
            chips: &["Action", "Thriller", "Drama", "Sci-Fi"],
            titles: catalog
                .iter()
                .filter(|t| t.kind == TitleKind::Movie)
                .collect(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;

    #[test]
    fn latest_is_sorted_by_year_descending_and_stable() {
        let catalog = demo_catalog();
        let sections = home_sections(&catalog);
        let latest = &sections[0];
        assert_eq!(latest.title_key, "latest");
        let years: Vec<u16> = latest.titles.iter().map(|t| t.year).collect();
        let mut sorted = years.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(years, sorted);
        // Same-year entries keep document order.
        let same_year_ids: Vec<&str> = latest
            .titles
            .iter()
            .filter(|t| t.year == 2024)
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(same_year_ids, vec!["2", "3", "7", "10"]);
    }

    #[test]
    fn top_rated_applies_the_threshold() {
        let catalog = demo_catalog();
        let sections = home_sections(&catalog);
        let top = sections
            .iter()
            .find(|s| s.title_key == "topRated")
            .unwrap();
        assert!(!top.titles.is_empty());
        assert!(top.titles.iter().all(|t| t.rating >= 8.5));
    }

    #[test]
    fn featured_includes_trending() {
        let catalog = demo_catalog();
        let hero = featured(&catalog);
        assert!(hero.iter().all(|t| t.featured || t.trending));
        assert!(hero.iter().any(|t| t.trending && !t.featured));
    }

    #[test]
    fn section_visible_respects_chip_filter() {
        let catalog = demo_catalog();
        let sections = home_sections(&catalog);
        let series_row = sections
            .iter()
            .find(|s| s.title_key == "tvSeries")
            .unwrap();
        let all = series_row.visible(&Filter::all());
        assert_eq!(all.len(), series_row.titles.len());
        for title in series_row.visible(&Filter::parse("Mystery")) {
            assert!(title
                .genres
                .iter()
                .any(|g| g.to_lowercase().contains("mystery")));
        }
    }
}
