// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end localization behavior over a small catalog

use movix::browse::{featured, Carousel, Filter, ROTATE_INTERVAL};
use movix::catalog::{Quality, Title, TitleKind};
use movix::i18n::{Lang, LocaleSession};
use std::time::Instant;

fn small_catalog() -> Vec<Title> {
    let seed = |id: &str, en: &str, ar: &str| Title {
        id: id.to_string(),
        title_en: en.to_string(),
        title_ar: ar.to_string(),
        kind: TitleKind::Movie,
        year: 2024,
        country: "Egypt".to_string(),
        quality: Quality::Fhd,
        rating: 8.0,
        poster: "/p.jpg".to_string(),
        backdrop: "/b.jpg".to_string(),
        genres: vec!["Drama".to_string()],
        description_en: format!("{en} described"),
        description_ar: format!("وصف {ar}"),
        featured: true,
        trending: false,
        is_arabic: true,
    };
    vec![
        seed("a", "First", "الأول"),
        seed("b", "Second", "الثاني"),
        seed("c", "Third", "الثالث"),
    ]
}

#[test]
fn test_toggle_relabels_every_title_without_touching_view_state() {
    let catalog = small_catalog();
    let mut session = LocaleSession::new(Lang::En);
    let filter = Filter::parse("drama");
    let mut carousel = Carousel::new(featured(&catalog).len(), ROTATE_INTERVAL, Instant::now());
    carousel.jump(1);

    let before: Vec<String> = filter
        .apply(&catalog)
        .iter()
        .map(|t| t.title(session.lang()).to_string())
        .collect();
    assert_eq!(before, vec!["First", "Second", "Third"]);
    assert!(!session.direction().is_rtl());

    session.toggle();

    let after: Vec<String> = filter
        .apply(&catalog)
        .iter()
        .map(|t| t.title(session.lang()).to_string())
        .collect();
    assert_eq!(after, vec!["الأول", "الثاني", "الثالث"]);
    assert!(session.direction().is_rtl());

    // The toggle must not disturb the carousel index or the active filter.
    assert_eq!(carousel.index(), 1);
    assert_eq!(filter.token(), "drama");
    assert_eq!(filter.apply(&catalog).len(), 3);
}

#[test]
fn test_descriptions_follow_the_active_language() {
    let catalog = small_catalog();
    let mut session = LocaleSession::new(Lang::En);
    assert_eq!(catalog[0].description(session.lang()), "First described");
    session.toggle();
    assert_eq!(catalog[0].description(session.lang()), "وصف الأول");
}

#[test]
fn test_shared_keys_localize_in_both_languages() {
    let en = LocaleSession::new(Lang::En);
    let ar = LocaleSession::new(Lang::Ar);
    for key in ["home", "watchNow", "noResults", "pageNotFound", "all"] {
        assert_ne!(en.tr(key), key, "'{key}' must localize under en");
        assert_ne!(ar.tr(key), key, "'{key}' must localize under ar");
        assert_ne!(en.tr(key), ar.tr(key), "'{key}' must differ across languages");
    }
}

#[test]
fn test_unknown_identity_resolves_to_nothing() {
    let catalog = small_catalog();
    assert!(catalog.iter().any(|t| t.id == "b"));
    assert!(!catalog.iter().any(|t| t.id == "zzz"));
}

#[test]
fn test_root_attrs_track_the_toggle() {
    let mut session = LocaleSession::new(Lang::En);
    assert_eq!(session.root_attrs().dir, "ltr");
    let attrs = session.toggle();
    assert_eq!((attrs.lang, attrs.dir), ("ar", "rtl"));
    let attrs = session.toggle();
    assert_eq!((attrs.lang, attrs.dir), ("en", "ltr"));
}
