// SPDX-License-Identifier: PMPL-1.0-or-later

//! Desktop browser window.
//!
//! The full browsing experience in one window: header with nav,
//! search, and language toggle; auto-rotating hero; category rows with
//! filter chips; detail and not-found pages. All interaction state lives on
//! the app struct; catalog records are read-only. Clicks are collected as
//! deferred actions and applied after rendering, so record borrows never
//! overlap state mutation.

use crate::browse::{featured, home_sections, search, Carousel, Filter, ROTATE_INTERVAL};
use crate::catalog::Title;
use crate::i18n::{Lang, LocaleSession};
use anyhow::{anyhow, Result};
use eframe::{egui, App, Frame, NativeOptions};
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Header nav items: translation key and the filter token the item selects.
const NAV: &[(&str, &str)] = &[
    ("home", "all"),
    ("movies", "movie"),
    ("series", "series"),
    ("arabic", "arabic"),
    ("foreign", "foreign"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Route {
    Home,
    Details(String),
}

enum CardAction {
    Open(String),
    ToggleWatch(String),
}

enum HeroNav {
    Prev,
    Next,
    Jump(usize),
}

pub struct BrowserGui {
    session: LocaleSession,
    catalog: Vec<Title>,
    route: Route,
    nav_key: &'static str,
    search: String,
    /// Selected chip token per section; empty string means "all".
    section_chips: HashMap<&'static str, String>,
    carousel: Carousel,
    /// Session-only watch list; dropped with the window.
    watch_list: HashSet<String>,
}

impl BrowserGui {
    pub fn run(lang: Lang, catalog: Vec<Title>) -> Result<()> {
        let options = NativeOptions::default();
        let hero_len = featured(&catalog).len();
        let app = Self {
            session: LocaleSession::new(lang),
            catalog,
            route: Route::Home,
            nav_key: "home",
            search: String::new(),
            section_chips: HashMap::new(),
            carousel: Carousel::new(hero_len, ROTATE_INTERVAL, Instant::now()),
            watch_list: HashSet::new(),
        };
        eframe::run_native("movix", options, Box::new(|_cc| Box::new(app)))
            .map_err(|err| anyhow!("failed to launch browser window: {err}"))?;
        Ok(())
    }
}

impl App for BrowserGui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if self.route == Route::Home {
            let now = Instant::now();
            self.carousel.resize(featured(&self.catalog).len());
            self.carousel.tick(now);
            // Wake up exactly when the next rotation is due; the timer dies
            // with the window.
            ctx.request_repaint_after(self.carousel.until_next(now));
        }

        self.header(ctx);

        let route = self.route.clone();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match &route {
                Route::Home => self.render_home(ui),
                Route::Details(id) => self.render_details(ui, id),
            });
        });
    }
}

impl BrowserGui {
    fn header(&mut self, ctx: &egui::Context) {
        let rtl = self.session.direction().is_rtl();
        let brand = self.session.tr("brand").to_string();
        let hint = self.session.tr("search").to_string();
        let toggle_label = self.session.lang().toggled().native_name();
        let nav_labels: Vec<(&'static str, String)> = NAV
            .iter()
            .map(|(key, _)| (*key, self.session.tr(key).to_string()))
            .collect();

        let mut clicked_nav: Option<&'static str> = None;
        let mut toggle_lang = false;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            let layout = if rtl {
                egui::Layout::right_to_left(egui::Align::Center)
            } else {
                egui::Layout::left_to_right(egui::Align::Center)
            };
            ui.with_layout(layout, |ui| {
                ui.heading(egui::RichText::new(&brand).strong());
                ui.separator();
                for (key, label) in &nav_labels {
                    let selected = self.route == Route::Home && self.nav_key == *key;
                    if ui.selectable_label(selected, label).clicked() {
                        clicked_nav = Some(key);
                    }
                }
                ui.separator();
                ui.add(
                    egui::TextEdit::singleline(&mut self.search)
                        .hint_text(&hint)
                        .desired_width(180.0),
                );
                if ui.button(toggle_label).clicked() {
                    toggle_lang = true;
                }
            });
            ui.add_space(4.0);
        });

        if let Some(key) = clicked_nav {
            self.nav_key = key;
            self.route = Route::Home;
        }
        if toggle_lang {
            // The new root attributes (lang, dir, font class) are read back
            // from the session on the next frame; layout direction flips
            // there, carousel index and filters stay untouched.
            self.session.toggle();
        }
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        let mut actions: Vec<CardAction> = Vec::new();

        let query = self.search.trim().to_string();
        if !query.is_empty() {
            let heading = format!("{} — {}", self.session.tr("search"), query);
            let results = search(&self.catalog, &query);
            ui.add_space(8.0);
            ui.heading(heading);
            if results.is_empty() {
                ui.label(egui::RichText::new(self.session.tr("noResults")).weak());
            } else {
                ui.horizontal_wrapped(|ui| {
                    for title in &results {
                        card(
                            ui,
                            &self.session,
                            title,
                            self.watch_list.contains(&title.id),
                            &mut actions,
                        );
                    }
                });
            }
        } else if self.nav_key != "home" {
            let filter = Filter::parse(nav_token(self.nav_key));
            let visible = filter.apply(&self.catalog);
            ui.add_space(8.0);
            ui.heading(self.session.tr(self.nav_key));
            if visible.is_empty() {
                ui.label(egui::RichText::new(self.session.tr("noResults")).weak());
            } else {
                ui.horizontal_wrapped(|ui| {
                    for title in &visible {
                        card(
                            ui,
                            &self.session,
                            title,
                            self.watch_list.contains(&title.id),
                            &mut actions,
                        );
                    }
                });
            }
        } else {
            self.render_hero(ui, &mut actions);

            let sections = home_sections(&self.catalog);
            for section in &sections {
                let chip_token = self
                    .section_chips
                    .get(section.title_key)
                    .cloned()
                    .unwrap_or_default();
                let filter = if chip_token.is_empty() {
                    Filter::all()
                } else {
                    Filter::parse(&chip_token)
                };
                let visible = section.visible(&filter);

                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    ui.heading(self.session.tr(section.title_key));
                    ui.label(
                        egui::RichText::new(format!("({})", visible.len())).weak(),
                    );
                });

                let mut new_chip: Option<String> = None;
                ui.horizontal(|ui| {
                    if ui
                        .selectable_label(filter.is_all(), self.session.tr("all"))
                        .clicked()
                    {
                        new_chip = Some(String::new());
                    }
                    for chip in section.chips {
                        let selected = !filter.is_all()
                            && filter.token() == Filter::parse(chip).token();
                        if ui.selectable_label(selected, *chip).clicked() {
                            new_chip = Some((*chip).to_string());
                        }
                    }
                });
                if let Some(token) = new_chip {
                    self.section_chips.insert(section.title_key, token);
                }

                if visible.is_empty() {
                    ui.label(egui::RichText::new(self.session.tr("noResults")).weak());
                } else {
                    egui::ScrollArea::horizontal()
                        .id_source(section.title_key)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                for title in &visible {
                                    card(
                                        ui,
                                        &self.session,
                                        title,
                                        self.watch_list.contains(&title.id),
                                        &mut actions,
                                    );
                                }
                            });
                        });
                }
            }
        }

        self.apply(actions);
    }

    fn render_hero(&mut self, ui: &mut egui::Ui, actions: &mut Vec<CardAction>) {
        let lang = self.session.lang();
        let rtl = self.session.direction().is_rtl();
        let hero = featured(&self.catalog);
        let Some(current) = hero.get(self.carousel.index()).copied() else {
            return;
        };
        let index = self.carousel.index();
        let watched = self.watch_list.contains(&current.id);
        let mut nav: Option<HeroNav> = None;

        ui.add_space(8.0);
        ui.group(|ui| {
            let halign = if rtl { egui::Align::Max } else { egui::Align::Min };
            ui.with_layout(egui::Layout::top_down(halign), |ui| {
                ui.label(
                    egui::RichText::new(self.session.tr("featured"))
                        .small()
                        .color(egui::Color32::GOLD),
                );
                ui.heading(egui::RichText::new(current.title(lang)).size(26.0));
                meta_row(ui, current, rtl);
                ui.add_space(4.0);
                ui.label(current.description(lang));
                ui.add_space(4.0);
                genre_row(ui, current, rtl);
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button(self.session.tr("watchNow")).clicked() {
                        actions.push(CardAction::Open(current.id.clone()));
                    }
                    if ui
                        .selectable_label(watched, self.session.tr("addToList"))
                        .clicked()
                    {
                        actions.push(CardAction::ToggleWatch(current.id.clone()));
                    }
                });
            });

            if hero.len() > 1 {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("‹").clicked() {
                        nav = Some(HeroNav::Prev);
                    }
                    for dot in 0..hero.len() {
                        if ui.selectable_label(dot == index, "•").clicked() {
                            nav = Some(HeroNav::Jump(dot));
                        }
                    }
                    if ui.button("›").clicked() {
                        nav = Some(HeroNav::Next);
                    }
                });
            }
        });

        // Manual navigation moves the index only; the rotation phase keeps
        // its original deadline.
        match nav {
            Some(HeroNav::Prev) => self.carousel.prev(),
            Some(HeroNav::Next) => self.carousel.next(),
            Some(HeroNav::Jump(dot)) => self.carousel.jump(dot),
            None => {}
        }
    }

    fn render_details(&mut self, ui: &mut egui::Ui, id: &str) {
        let lang = self.session.lang();
        let rtl = self.session.direction().is_rtl();
        let mut go_back = false;
        let mut actions: Vec<CardAction> = Vec::new();

        ui.add_space(8.0);
        match self.catalog.iter().find(|title| title.id == id) {
            Some(title) => {
                if ui.button(self.session.tr("back")).clicked() {
                    go_back = true;
                }
                ui.add_space(8.0);
                let halign = if rtl { egui::Align::Max } else { egui::Align::Min };
                ui.with_layout(egui::Layout::top_down(halign), |ui| {
                    ui.heading(egui::RichText::new(title.title(lang)).size(30.0));
                    meta_row(ui, title, rtl);
                    ui.label(
                        egui::RichText::new(self.session.tr(title.kind.label_key()))
                            .weak(),
                    );
                    ui.separator();
                    ui.label(title.description(lang));
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(self.session.tr("genres")).strong());
                    genre_row(ui, title, rtl);
                    ui.add_space(8.0);
                    let watched = self.watch_list.contains(&title.id);
                    ui.horizontal(|ui| {
                        let _ = ui.button(self.session.tr("watchNow"));
                        if ui
                            .selectable_label(watched, self.session.tr("addToList"))
                            .clicked()
                        {
                            actions.push(CardAction::ToggleWatch(title.id.clone()));
                        }
                    });
                });
            }
            None => {
                // Unknown identity renders a recoverable not-found state,
                // never a failure.
                ui.add_space(32.0);
                ui.vertical_centered(|ui| {
                    ui.heading(
                        egui::RichText::new(self.session.tr("pageNotFound"))
                            .color(egui::Color32::LIGHT_RED),
                    );
                    ui.label(self.session.tr("pageNotFoundBody"));
                    ui.add_space(8.0);
                    if ui.button(self.session.tr("backHome")).clicked() {
                        go_back = true;
                    }
                });
            }
        }

        if go_back {
            self.route = Route::Home;
        }
        self.apply(actions);
    }

    fn apply(&mut self, actions: Vec<CardAction>) {
        for action in actions {
            match action {
                CardAction::Open(id) => {
                    self.route = Route::Details(id);
                }
                CardAction::ToggleWatch(id) => {
                    if !self.watch_list.remove(&id) {
                        self.watch_list.insert(id);
                    }
                }
            }
        }
    }
}

fn nav_token(key: &str) -> &'static str {
    NAV.iter()
        .find(|(nav_key, _)| *nav_key == key)
        .map(|(_, token)| *token)
        .unwrap_or("all")
}

fn card(
    ui: &mut egui::Ui,
    session: &LocaleSession,
    title: &Title,
    watched: bool,
    actions: &mut Vec<CardAction>,
) {
    let lang = session.lang();
    ui.group(|ui| {
        ui.set_width(210.0);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(title.title(lang)).strong());
            ui.horizontal(|ui| {
                ui.label(title.year.to_string());
                ui.label(egui::RichText::new(title.quality.to_string()).weak());
                ui.label(format!("★ {:.1}", title.rating));
            });
            ui.label(
                egui::RichText::new(session.tr(title.kind.label_key()))
                    .small()
                    .weak(),
            );
            ui.label(egui::RichText::new(snippet(title.description(lang), 80)).weak());
            ui.horizontal(|ui| {
                for genre in title.genres.iter().take(2) {
                    ui.label(egui::RichText::new(genre).small().weak());
                }
            });
            ui.horizontal(|ui| {
                if ui.small_button(session.tr("watchNow")).clicked() {
                    actions.push(CardAction::Open(title.id.clone()));
                }
                if ui.selectable_label(watched, "+").clicked() {
                    actions.push(CardAction::ToggleWatch(title.id.clone()));
                }
            });
        });
    });
}

fn meta_row(ui: &mut egui::Ui, title: &Title, rtl: bool) {
    let layout = if rtl {
        egui::Layout::right_to_left(egui::Align::Center)
    } else {
        egui::Layout::left_to_right(egui::Align::Center)
    };
    ui.with_layout(layout, |ui| {
        ui.label(egui::RichText::new(title.year.to_string()).strong());
        ui.label("•");
        ui.label(egui::RichText::new(title.quality.to_string()).weak());
        ui.label("•");
        ui.label(format!("★ {:.1}", title.rating));
        ui.label("•");
        ui.label(&title.country);
    });
}

fn genre_row(ui: &mut egui::Ui, title: &Title, rtl: bool) {
    let layout = if rtl {
        egui::Layout::right_to_left(egui::Align::Center)
    } else {
        egui::Layout::left_to_right(egui::Align::Center)
    };
    ui.with_layout(layout, |ui| {
        for genre in &title.genres {
            ui.label(egui::RichText::new(genre).weak());
        }
    });
}

/// Character-aware truncation; byte slicing would split multi-byte Arabic
/// glyphs.
fn snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_tokens_cover_all_items() {
        assert_eq!(nav_token("home"), "all");
        assert_eq!(nav_token("movies"), "movie");
        assert_eq!(nav_token("series"), "series");
        assert_eq!(nav_token("arabic"), "arabic");
        assert_eq!(nav_token("foreign"), "foreign");
        assert_eq!(nav_token("unknown"), "all");
    }

    #[test]
    fn snippet_is_char_aware() {
        assert_eq!(snippet("short", 80), "short");
        let arabic = "مذيعة برنامج ليلي تبدأ بتلقي اتصالات تصف جرائم قبل وقوعها.";
        let cut = snippet(arabic, 10);
        assert!(cut.ends_with('…'));
        assert_eq!(cut.chars().count(), 11);
    }
}
