// SPDX-License-Identifier: PMPL-1.0-or-later

//! Embedded demo catalog.
//!
//! Stands in for a real content provider: an ordered, mixed set of Arabic
//! and foreign movies and series with enough featured/trending/top-rated
//! entries to populate every home-page section.

use super::record::{Quality, Title, TitleKind};

struct Seed {
    id: &'static str,
    title_en: &'static str,
    title_ar: &'static str,
    kind: TitleKind,
    year: u16,
    country: &'static str,
    quality: Quality,
    rating: f32,
    genres: &'static [&'static str],
    description_en: &'static str,
    description_ar: &'static str,
    featured: bool,
    trending: bool,
    is_arabic: bool,
}

impl Seed {
    fn build(&self) -> Title {
        let slug = self.title_en.to_lowercase().replace(' ', "-");
        Title {
            id: self.id.to_string(),
            title_en: self.title_en.to_string(),
            title_ar: self.title_ar.to_string(),
            kind: self.kind,
            year: self.year,
            country: self.country.to_string(),
            quality: self.quality,
            rating: self.rating,
            poster: format!("/images/posters/{}.jpg", slug),
            backdrop: format!("/images/backdrops/{}.jpg", slug),
            genres: self.genres.iter().map(|g| g.to_string()).collect(),
            description_en: self.description_en.to_string(),
            description_ar: self.description_ar.to_string(),
            featured: self.featured,
            trending: self.trending,
            is_arabic: self.is_arabic,
        }
    }
}

/// The default catalog, in document order.
pub fn demo_catalog() -> Vec<Title> {
    SEEDS.iter().map(Seed::build).collect()
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        title_en: "The Desert Compass",
        title_ar: "بوصلة الصحراء",
        kind: TitleKind::Movie,
        year: 2023,
        country: "Egypt",
        quality: Quality::Fhd,
        rating: 8.7,
        genres: &["Drama", "Adventure"],
        description_en: "A cartographer crosses the Western Desert to settle his late father's debt and finds the map was never about land.",
        description_ar: "يعبر رسام خرائط الصحراء الغربية لسداد دين والده الراحل فيكتشف أن الخريطة لم تكن يوماً عن الأرض.",
        featured: true,
        trending: false,
        is_arabic: true,
    },
    Seed {
        id: "2",
        title_en: "Cairo Nights",
        title_ar: "ليالي القاهرة",
        kind: TitleKind::Series,
        year: 2024,
        country: "Egypt",
        quality: Quality::FourK,
        rating: 9.1,
        genres: &["Drama", "Mystery"],
        description_en: "A night-shift radio host starts taking calls that describe crimes before they happen.",
        description_ar: "مذيعة برنامج ليلي تبدأ بتلقي اتصالات تصف جرائم قبل وقوعها.",
        featured: true,
        trending: true,
        is_arabic: true,
    },
    Seed {
        id: "3",
        title_en: "Steel Horizon",
        title_ar: "أفق الفولاذ",
        kind: TitleKind::Movie,
        year: 2024,
        country: "USA",
        quality: Quality::FourK,
        rating: 8.9,
        genres: &["Action", "Sci-Fi"],
        description_en: "The last orbital shipyard goes dark, and the salvage crew sent up finds it anything but empty.",
        description_ar: "ينقطع الاتصال بآخر حوض سفن مداري، وطاقم الإنقاذ المرسل إليه يجده كل شيء إلا فارغاً.",
        featured: true,
        trending: false,
        is_arabic: false,
    },
    Seed {
        id: "4",
        title_en: "The Last Lighthouse",
        title_ar: "المنارة الأخيرة",
        kind: TitleKind::Movie,
        year: 2022,
        country: "UK",
        quality: Quality::Fhd,
        rating: 8.5,
        genres: &["Thriller", "Mystery"],
        description_en: "Two keepers on a decommissioned light disagree about what keeps signalling back from the sea.",
        description_ar: "حارسان في منارة مهجورة يختلفان حول ما الذي يواصل إرسال الإشارات من البحر.",
        featured: false,
        trending: true,
        is_arabic: false,
    },
    Seed {
        id: "5",
        title_en: "Jasmine Alley",
        title_ar: "زقاق الياسمين",
        kind: TitleKind::Series,
        year: 2023,
        country: "Syria",
        quality: Quality::Hd,
        rating: 8.2,
        genres: &["Drama", "Romance"],
        description_en: "Three families share one Damascus alley and thirty years of carefully kept secrets.",
        description_ar: "ثلاث عائلات تتقاسم زقاقاً دمشقياً واحداً وثلاثين عاماً من الأسرار المحفوظة بعناية.",
        featured: false,
        trending: false,
        is_arabic: true,
    },
    Seed {
        id: "6",
        title_en: "Beirut Central",
        title_ar: "بيروت سنترال",
        kind: TitleKind::Movie,
        year: 2021,
        country: "Lebanon",
        quality: Quality::Fhd,
        rating: 7.8,
        genres: &["Comedy", "Drama"],
        description_en: "A retired tram driver refuses to vacate the depot the city wants to turn into a mall.",
        description_ar: "سائق ترام متقاعد يرفض إخلاء المستودع الذي تريد المدينة تحويله إلى مركز تجاري.",
        featured: false,
        trending: false,
        is_arabic: true,
    },
    Seed {
        id: "7",
        title_en: "Quantum Divide",
        title_ar: "الانقسام الكمي",
        kind: TitleKind::Series,
        year: 2024,
        country: "USA",
        quality: Quality::FourK,
        rating: 9.3,
        genres: &["Sci-Fi", "Thriller"],
        description_en: "A physicist wakes up in a timeline where her experiment worked, and wishes it hadn't.",
        description_ar: "تستيقظ عالمة فيزياء في خط زمني نجحت فيه تجربتها، وتتمنى لو لم تنجح.",
        featured: false,
        trending: true,
        is_arabic: false,
    },
    Seed {
        id: "8",
        title_en: "The Silk Caravan",
        title_ar: "قافلة الحرير",
        kind: TitleKind::Series,
        year: 2022,
        country: "Morocco",
        quality: Quality::Hd,
        rating: 8.6,
        genres: &["Historical", "Drama"],
        description_en: "A merchant family's fortunes rise and fall along the trade routes of the fourteenth century.",
        description_ar: "صعود وهبوط ثروة عائلة تجارية على طول طرق التجارة في القرن الرابع عشر.",
        featured: false,
        trending: false,
        is_arabic: true,
    },
    Seed {
        id: "9",
        title_en: "Northern Frost",
        title_ar: "صقيع الشمال",
        kind: TitleKind::Movie,
        year: 2023,
        country: "Norway",
        quality: Quality::Fhd,
        rating: 7.5,
        genres: &["Horror", "Thriller"],
        description_en: "A research station above the Arctic Circle logs a visitor every night at the same minute.",
        description_ar: "محطة أبحاث فوق الدائرة القطبية تسجل زائراً كل ليلة في الدقيقة نفسها.",
        featured: false,
        trending: false,
        is_arabic: false,
    },
    Seed {
        id: "10",
        title_en: "Alexandria 1954",
        title_ar: "الإسكندرية ١٩٥٤",
        kind: TitleKind::Movie,
        year: 2024,
        country: "Egypt",
        quality: Quality::FourK,
        rating: 9.0,
        genres: &["Historical", "Romance"],
        description_en: "A projectionist and a censor fall in love over the reels they are ordered to cut.",
        description_ar: "عامل عرض سينمائي ورقيبة يقعان في الحب فوق البكرات التي أُمرا بقصّها.",
        featured: true,
        trending: false,
        is_arabic: true,
    },
    Seed {
        id: "11",
        title_en: "Midnight Circuit",
        title_ar: "حلبة منتصف الليل",
        kind: TitleKind::Movie,
        year: 2022,
        country: "Japan",
        quality: Quality::Fhd,
        rating: 8.1,
        genres: &["Action", "Thriller"],
        description_en: "An ex-courier is pulled back for one last run across a city that remembers her.",
        description_ar: "ساعية سابقة تُستدعى لجولة أخيرة عبر مدينة لم تنسها.",
        featured: false,
        trending: false,
        is_arabic: false,
    },
    Seed {
        id: "12",
        title_en: "The Olive Grove",
        title_ar: "حقل الزيتون",
        kind: TitleKind::Series,
        year: 2021,
        country: "Palestine",
        quality: Quality::Hd,
        rating: 8.8,
        genres: &["Drama"],
        description_en: "Four generations tend the same trees while everything around the grove changes hands.",
        description_ar: "أربعة أجيال تعتني بالأشجار نفسها بينما كل ما حول الحقل يتبدل.",
        featured: false,
        trending: true,
        is_arabic: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_is_populated_and_ordered() {
        let catalog = demo_catalog();
        assert!(catalog.len() >= 12);
        // Document order follows the seed table.
        assert_eq!(catalog[0].id, "1");
        assert_eq!(catalog[1].id, "2");
    }

    #[test]
    fn ids_are_unique() {
        let catalog = demo_catalog();
        let mut seen = std::collections::HashSet::new();
        for title in &catalog {
            assert!(seen.insert(title.id.clone()), "duplicate id {}", title.id);
        }
    }

    #[test]
    fn every_home_section_has_content() {
        let catalog = demo_catalog();
        assert!(catalog.iter().any(|t| t.featured || t.trending));
        assert!(catalog.iter().any(|t| t.is_arabic));
        assert!(catalog.iter().any(|t| !t.is_arabic));
        assert!(catalog.iter().any(|t| t.rating >= 8.5));
        assert!(catalog.iter().any(|t| t.kind == TitleKind::Series));
        assert!(catalog.iter().any(|t| t.kind == TitleKind::Movie));
    }
}
