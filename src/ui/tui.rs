// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lightweight terminal browser for the catalog.
//!
//! Raw mode is entered for the duration of the loop and always restored,
//! success or error. The hero carousel advances on the poll cadence and
//! dies with the loop — no timer survives teardown.

use crate::browse::{featured, home_sections, Carousel, Filter, Section, ROTATE_INTERVAL};
use crate::catalog::Title;
use crate::i18n::LocaleSession;
use anyhow::Result;
use colored::*;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{self, ClearType},
};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

pub struct BrowseTui;

impl BrowseTui {
    pub fn run(session: &mut LocaleSession, catalog: &[Title]) -> Result<()> {
        terminal::enable_raw_mode()?;
        let result = Self::run_inner(session, catalog);
        terminal::disable_raw_mode()?;
        result
    }

    fn run_inner(session: &mut LocaleSession, catalog: &[Title]) -> Result<()> {
        let mut stdout = stdout();
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        let hero = featured(catalog);
        let sections = home_sections(catalog);
        let mut carousel = Carousel::new(hero.len(), ROTATE_INTERVAL, Instant::now());
        let mut selected = 0usize;
        let mut expanded = vec![false; sections.len()];
        // Chip 0 is "all"; 1.. index into the section's own chip row.
        let mut chip: Vec<usize> = vec![0; sections.len()];

        loop {
            carousel.tick(Instant::now());
            Self::render(
                &mut stdout,
                session,
                &hero,
                &carousel,
                &sections,
                selected,
                &expanded,
                &chip,
            )?;

            if event::poll(Duration::from_millis(200))? {
                if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                    match code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => {
                            selected = (selected + 1) % sections.len();
                        }
                        KeyCode::BackTab | KeyCode::Char('k') | KeyCode::Up => {
                            selected = (selected + sections.len() - 1) % sections.len();
                        }
                        KeyCode::Char(' ') | KeyCode::Enter => {
                            if let Some(flag) = expanded.get_mut(selected) {
                                *flag = !*flag;
                            }
                        }
                        KeyCode::Char('f') => {
                            // Cycle the selected section's filter chip.
                            let row = &sections[selected];
                            chip[selected] = (chip[selected] + 1) % (row.chips.len() + 1);
                        }
                        KeyCode::Char('l') => {
                            session.toggle();
                        }
                        KeyCode::Left => carousel.prev(),
                        KeyCode::Right => carousel.next(),
                        _ => {}
                    }
                }
            }
        }

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn render(
        stdout: &mut impl Write,
        session: &LocaleSession,
        hero: &[&Title],
        carousel: &Carousel,
        sections: &[Section<'_>],
        selected: usize,
        expanded: &[bool],
        chip: &[usize],
    ) -> Result<()> {
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        let lang = session.lang();
        let attrs = session.root_attrs();
        writeln!(
            stdout,
            "{} {}",
            session.tr("brand").bold().cyan(),
            format!("[{} · {}]", attrs.lang, attrs.dir).dimmed()
        )?;
        writeln!(stdout)?;

        if let Some(current) = hero.get(carousel.index()) {
            writeln!(
                stdout,
                "{} {} ({}) {}",
                session.tr("featured").bold().yellow(),
                current.title(lang).bold(),
                current.year,
                format!("{}/{}", carousel.index() + 1, hero.len()).dimmed()
            )?;
            writeln!(stdout)?;
        }

        for (idx, section) in sections.iter().enumerate() {
            let indicator = if idx == selected {
                "➤".green()
            } else {
                " ".normal()
            };
            let filter = Self::section_filter(section, chip[idx]);
            let visible = section.visible(&filter);
            let chip_label = if filter.is_all() {
                session.tr("all").to_string()
            } else {
                filter.token().to_string()
            };
            writeln!(
                stdout,
                "{} {} {} {}",
                indicator,
                session.tr(section.title_key).bold(),
                format!("({})", visible.len()).dimmed(),
                format!("[{}]", chip_label).dimmed()
            )?;
            if expanded.get(idx).copied().unwrap_or(false) {
                if visible.is_empty() {
                    writeln!(stdout, "     {}", session.tr("noResults").dimmed())?;
                }
                for title in &visible {
                    writeln!(
                        stdout,
                        "     {} ({}) {} ★{:.1}  {}",
                        title.title(lang),
                        title.year,
                        title.quality.to_string().blue(),
                        title.rating,
                        title.genres.join(", ").dimmed()
                    )?;
                }
            }
        }

        writeln!(stdout)?;
        writeln!(
            stdout,
            "{}",
            "Tab/j/k select · Space expand · f filter · ←/→ hero · l language · q quit".dimmed()
        )?;
        stdout.flush()?;
        Ok(())
    }

    fn section_filter(section: &Section<'_>, chip: usize) -> Filter {
        if chip == 0 {
            Filter::all()
        } else {
            Filter::parse(section.chips[chip - 1])
        }
    }
}
