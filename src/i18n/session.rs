// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale session: the single owner of the active language.
//!
//! Exactly one `LocaleSession` exists per front-end invocation. Views
//! receive it as a required `&LocaleSession` parameter — passing the handle
//! explicitly replaces ambient context lookup, so "context accessed outside
//! its provider" is a compile error here, not a runtime panic. Only the
//! session owner holds `&mut` and may toggle; every reader sees the change
//! atomically because direction is derived from the language rather than
//! stored alongside it.

use super::catalog::{t, Direction, Lang};

/// Attributes the platform root must carry for the active language.
///
/// Front-ends re-apply these to their own notion of a root after each
/// toggle (the egui layout direction, the terminal banner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootAttrs {
    pub lang: &'static str,
    pub dir: &'static str,
    pub font_class: &'static str,
}

/// Session-wide language state. Initialized once at startup, mutated only
/// via [`LocaleSession::toggle`], dropped with the session — nothing is
/// persisted across runs.
#[derive(Debug, Clone, Default)]
pub struct LocaleSession {
    lang: Lang,
}

impl LocaleSession {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Active text direction, computed from the language at the point of
    /// use. There is no stored direction field to fall out of sync.
    pub fn direction(&self) -> Direction {
        self.lang.direction()
    }

    /// Flip `ar ⇄ en` and hand back the root attributes the caller must
    /// re-apply. Toggling touches nothing but the language: carousel
    /// indices, selected filters, and search text live with their views.
    pub fn toggle(&mut self) -> RootAttrs {
        self.lang = self.lang.toggled();
        self.root_attrs()
    }

    /// Localized string for `key` in the active language; the raw key when
    /// the catalog has no entry for it.
    pub fn tr<'a>(&self, key: &'a str) -> &'a str {
        t(self.lang, key)
    }

    /// Current root-node attributes. Cairo covers both scripts, so the
    /// font class is constant across languages.
    pub fn root_attrs(&self) -> RootAttrs {
        RootAttrs {
            lang: self.lang.code(),
            dir: self.direction().attr(),
            font_class: "font-cairo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english_ltr() {
        let session = LocaleSession::default();
        assert_eq!(session.lang(), Lang::En);
        assert_eq!(session.direction(), Direction::Ltr);
    }

    #[test]
    fn toggle_twice_restores_language_direction_and_attrs() {
        let mut session = LocaleSession::new(Lang::En);
        let before = session.root_attrs();
        session.toggle();
        assert_eq!(session.lang(), Lang::Ar);
        assert_eq!(session.direction(), Direction::Rtl);
        session.toggle();
        assert_eq!(session.lang(), Lang::En);
        assert_eq!(session.root_attrs(), before);
    }

    #[test]
    fn toggle_reports_new_root_attrs() {
        let mut session = LocaleSession::new(Lang::En);
        let attrs = session.toggle();
        assert_eq!(attrs.lang, "ar");
        assert_eq!(attrs.dir, "rtl");
        assert_eq!(attrs.font_class, "font-cairo");
    }

    #[test]
    fn tr_follows_active_language() {
        let mut session = LocaleSession::new(Lang::En);
        assert_eq!(session.tr("home"), "Home");
        session.toggle();
        assert_eq!(session.tr("home"), "الرئيسية");
        assert_eq!(session.tr("no.such.key"), "no.such.key");
    }
}
