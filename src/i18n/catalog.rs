// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for movix.
//!
//! Embeds all user-facing strings for both languages as compile-time static
//! tables. Lookup is O(n) on the key list per language, which is fine for
//! the ~30 keys we have — this runs per rendered label, on small bounded
//! tables, not in a hot loop.
//!
//! ## Adding a new key
//!
//! 1. Add the entry to `EN`
//! 2. Add the entry to `AR` — the key sets must stay symmetric (tests
//!    enforce this; an asymmetric key silently degrades lookups to the raw
//!    key on one side)

use serde::{Deserialize, Serialize};

/// Supported interface languages.
///
/// Each variant maps to an ISO 639-1 two-letter code. The enum is used by
/// the CLI `--lang` flag, the localized accessors on catalog records, and
/// every front-end that renders user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ar,
    En,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::Ar => "ar",
            Lang::En => "en",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive (codes must be
    /// lowercase per ISO 639-1).
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "ar" => Some(Lang::Ar),
            "en" => Some(Lang::En),
            _ => None,
        }
    }

    /// Both supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::Ar, Lang::En]
    }

    /// The language's own name for itself, used on the toggle button.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::Ar => "العربية",
            Lang::En => "English",
        }
    }

    /// The other supported language. Toggling is an involution: the state
    /// space is exactly `ar ⇄ en`, fully reversible, no terminal state.
    pub fn toggled(&self) -> Lang {
        match self {
            Lang::Ar => Lang::En,
            Lang::En => Lang::Ar,
        }
    }

    /// Text direction for this language. Derived, never stored: `ar` is the
    /// only right-to-left language we support.
    pub fn direction(&self) -> Direction {
        match self {
            Lang::Ar => Direction::Rtl,
            Lang::En => Direction::Ltr,
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Text layout direction, a pure function of [`Lang`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Direction {
    /// Value for the platform root's `dir` attribute.
    pub fn attr(&self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.attr())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a translation key in the specified language.
///
/// Returns the key string itself when the key is absent from the active
/// table (degrade-to-key design — never panics, never returns empty).
/// There is deliberately no fallback to the other language: symmetric key
/// sets are an invariant of the tables, and a one-sided key surfacing
/// verbatim in the UI is the intended way to notice a violation.
///
/// # Examples
///
/// ```
/// use movix::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "watchNow"), "Watch Now");
/// assert_eq!(t(Lang::Ar, "watchNow"), "شاهد الآن");
/// assert_eq!(t(Lang::En, "nonexistent"), "nonexistent");
/// ```
pub fn t<'a>(lang: Lang, key: &'a str) -> &'a str {
    lookup(table_for(lang), key).unwrap_or(key)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    for &(k, v) in table {
        if k == key {
            return Some(v);
        }
    }
    None
}

fn table_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::Ar => AR,
        Lang::En => EN,
    }
}

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    // Navigation
    ("brand", "Movix"),
    ("home", "Home"),
    ("movies", "Movies"),
    ("series", "Series"),
    ("arabic", "Arabic"),
    ("foreign", "Foreign"),
    ("search", "Search..."),
    ("login", "Login"),
    // Content
    ("featured", "Featured"),
    ("trending", "Trending"),
    ("latest", "Latest"),
    ("topRated", "Top Rated"),
    ("arabicMovies", "Arabic Movies"),
    ("foreignMovies", "Foreign Movies"),
    ("tvSeries", "TV Series"),
    ("allMovies", "Movies"),
    ("watchNow", "Watch Now"),
    ("addToList", "Add to List"),
    ("viewAll", "View All"),
    ("all", "All"),
    ("year", "Year"),
    ("quality", "Quality"),
    ("country", "Country"),
    ("rating", "Rating"),
    ("genres", "Genres"),
    ("kindMovie", "Movie"),
    ("kindSeries", "Series"),
    // UI
    ("back", "Back"),
    ("backHome", "Back to Home"),
    ("pageNotFound", "Page Not Found"),
    ("pageNotFoundBody", "Sorry, the page you are looking for does not exist"),
    ("loading", "Loading..."),
    ("error", "Something went wrong"),
    ("noResults", "No results found"),
];

// ─── Arabic ─────────────────────────────────────────────────────────

const AR: &[(&str, &str)] = &[
    // Navigation
    ("brand", "موفيكس"),
    ("home", "الرئيسية"),
    ("movies", "الأفلام"),
    ("series", "المسلسلات"),
    ("arabic", "عربي"),
    ("foreign", "أجنبي"),
    ("search", "البحث..."),
    ("login", "تسجيل الدخول"),
    // Content
    ("featured", "مميز"),
    ("trending", "الأكثر مشاهدة"),
    ("latest", "الأحدث"),
    ("topRated", "الأعلى تقييماً"),
    ("arabicMovies", "الأفلام العربية"),
    ("foreignMovies", "الأفلام الأجنبية"),
    ("tvSeries", "المسلسلات"),
    ("allMovies", "الأفلام"),
    ("watchNow", "شاهد الآن"),
    ("addToList", "أضف للقائمة"),
    ("viewAll", "عرض المزيد"),
    ("all", "الكل"),
    ("year", "السنة"),
    ("quality", "الجودة"),
    ("country", "البلد"),
    ("rating", "التقييم"),
    ("genres", "الأنواع"),
    ("kindMovie", "فيلم"),
    ("kindSeries", "مسلسل"),
    // UI
    ("back", "العودة"),
    ("backHome", "العودة للرئيسية"),
    ("pageNotFound", "الصفحة غير موجودة"),
    ("pageNotFoundBody", "عذراً، الصفحة التي تبحث عنها غير موجودة"),
    ("loading", "جاري التحميل..."),
    ("error", "حدث خطأ ما"),
    ("noResults", "لا توجد نتائج"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_keys_all_resolve() {
        for &(key, value) in EN {
            assert_eq!(t(Lang::En, key), value, "EN key '{}' should resolve", key);
        }
    }

    #[test]
    fn arabic_keys_all_resolve() {
        for &(key, value) in AR {
            assert_eq!(t(Lang::Ar, key), value, "AR key '{}' should resolve", key);
        }
    }

    #[test]
    fn key_sets_are_symmetric() {
        assert_eq!(AR.len(), EN.len(), "AR catalog key count mismatch");
        for &(key, _) in EN {
            assert!(
                lookup(AR, key).is_some(),
                "key '{}' present in EN but missing in AR",
                key
            );
        }
        for &(key, _) in AR {
            assert!(
                lookup(EN, key).is_some(),
                "key '{}' present in AR but missing in EN",
                key
            );
        }
    }

    #[test]
    fn localized_values_differ_from_raw_key() {
        // Every key must resolve to an actual translation, never echo the
        // raw key back, in both languages.
        for &(key, _) in EN {
            assert_ne!(t(Lang::En, key), key, "EN '{}' echoes the raw key", key);
            assert_ne!(t(Lang::Ar, key), key, "AR '{}' echoes the raw key", key);
        }
    }

    #[test]
    fn missing_key_returns_key_verbatim() {
        assert_eq!(t(Lang::En, "nonexistent.key"), "nonexistent.key");
        assert_eq!(t(Lang::Ar, "nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn direction_is_rtl_iff_arabic() {
        for lang in Lang::all() {
            let rtl = lang.direction().is_rtl();
            assert_eq!(rtl, *lang == Lang::Ar, "{:?} direction mismatch", lang);
        }
    }

    #[test]
    fn toggle_is_an_involution() {
        for lang in Lang::all() {
            assert_eq!(lang.toggled().toggled(), *lang);
            assert_ne!(lang.toggled(), *lang);
        }
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::from_code(lang.code()).expect("should parse");
            assert_eq!(*lang, parsed);
        }
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code("AR"), None, "codes are lowercase only");
    }
}
