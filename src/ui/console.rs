// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console output for `movix list` and `movix show`.

use crate::browse::{search, Filter};
use crate::catalog::Title;
use crate::i18n::LocaleSession;
use colored::*;

/// Print the catalog, filtered and optionally searched, as a localized
/// table.
pub fn print_list(
    session: &LocaleSession,
    catalog: &[Title],
    filter: &Filter,
    query: Option<&str>,
) {
    print_banner(session);

    let searched: Vec<&Title> = match query {
        Some(q) => search(catalog, q),
        None => catalog.iter().collect(),
    };
    let visible: Vec<&Title> = searched
        .into_iter()
        .filter(|title| filter.matches(title))
        .collect();

    if visible.is_empty() {
        println!("  {}", session.tr("noResults").dimmed());
        println!();
        return;
    }

    for title in &visible {
        print_row(session, title);
    }
    println!();
    println!(
        "  {}",
        format!("{} / {}", visible.len(), catalog.len()).dimmed()
    );
    println!();
}

/// Print one entry in full.
pub fn print_title(session: &LocaleSession, title: &Title) {
    let lang = session.lang();
    print_banner(session);

    println!("  {}", title.title(lang).bold());
    println!(
        "  {} · {} · {} {} · {}",
        title.year.to_string().bold(),
        title.quality.to_string().blue(),
        "★".yellow(),
        rating_colored(title.rating),
        title.country
    );
    println!(
        "  {}",
        session.tr(title.kind.label_key()).on_bright_black().white()
    );
    println!();
    println!("  {}", title.description(lang));
    println!();
    println!(
        "  {}: {}",
        session.tr("genres").bold(),
        title.genres.join(", ").dimmed()
    );
    println!();
}

/// Localized not-found presentation for an unknown id. Recoverable by
/// design: the caller still exits successfully.
pub fn print_not_found(session: &LocaleSession, id: &str) {
    print_banner(session);
    println!("  {}", session.tr("pageNotFound").bold().red());
    println!("  {}", session.tr("pageNotFoundBody"));
    println!();
    println!("  {} {}", "id:".dimmed(), id.dimmed());
    println!("  {}", "movix list".dimmed());
    println!();
}

fn print_banner(session: &LocaleSession) {
    let attrs = session.root_attrs();
    println!();
    println!(
        "{} {}",
        session.tr("brand").bold().cyan(),
        format!("[{} · {}]", attrs.lang, attrs.dir).dimmed()
    );
    println!();
}

fn print_row(session: &LocaleSession, title: &Title) {
    let lang = session.lang();
    println!(
        "  {:>3}  {} ({}) {} {} {}  {}",
        title.id.bold(),
        title.title(lang),
        title.year,
        title.quality.to_string().blue(),
        rating_colored(title.rating),
        session.tr(title.kind.label_key()).dimmed(),
        title.genres.join(", ").dimmed()
    );
}

fn rating_colored(rating: f32) -> ColoredString {
    let text = format!("{:.1}", rating);
    if rating >= 8.5 {
        text.green()
    } else if rating >= 7.0 {
        text.yellow()
    } else {
        text.red()
    }
}
