// SPDX-License-Identifier: PMPL-1.0-or-later

//! Record types for catalog entries.
//!
//! Wire field names are camelCase (`type`, `genre`, `isArabic`), so
//! catalog files exported by other Movix tooling load unchanged.

use crate::i18n::Lang;
use serde::{Deserialize, Serialize};

/// Category of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleKind {
    Movie,
    Series,
}

impl TitleKind {
    /// Translation key for the localized kind badge ("فيلم" / "Movie").
    pub fn label_key(&self) -> &'static str {
        match self {
            TitleKind::Movie => "kindMovie",
            TitleKind::Series => "kindSeries",
        }
    }

    /// Token this kind answers to in a filter row.
    pub fn token(&self) -> &'static str {
        match self {
            TitleKind::Movie => "movie",
            TitleKind::Series => "series",
        }
    }
}

/// Release quality tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "HD")]
    Hd,
    #[serde(rename = "FHD")]
    Fhd,
    #[serde(rename = "4K")]
    FourK,
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Quality::Hd => "HD",
            Quality::Fhd => "FHD",
            Quality::FourK => "4K",
        };
        write!(f, "{}", tag)
    }
}

/// One movie or series entry, consumed read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub id: String,
    pub title_en: String,
    pub title_ar: String,
    #[serde(rename = "type")]
    pub kind: TitleKind,
    pub year: u16,
    pub country: String,
    pub quality: Quality,
    pub rating: f32,
    pub poster: String,
    pub backdrop: String,
    #[serde(rename = "genre")]
    pub genres: Vec<String>,
    pub description_en: String,
    pub description_ar: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub trending: bool,
    #[serde(rename = "isArabic")]
    pub is_arabic: bool,
}

impl Title {
    /// Title in the requested language.
    pub fn title(&self, lang: Lang) -> &str {
        match lang {
            Lang::Ar => &self.title_ar,
            Lang::En => &self.title_en,
        }
    }

    /// Description in the requested language.
    pub fn description(&self, lang: Lang) -> &str {
        match lang {
            Lang::Ar => &self.description_ar,
            Lang::En => &self.description_en,
        }
    }
}
