// SPDX-License-Identifier: PMPL-1.0-or-later

//! movix: bilingual Arabic/English movie and series browser
//!
//! Browses an in-memory catalog (embedded demo data or a JSON/YAML file)
//! through a desktop window, a terminal UI, or plain console output, with
//! a runtime-switchable Arabic/English interface.

use anyhow::Result;
use clap::{Parser, Subcommand};
use movix::browse::Filter;
use movix::catalog::{self, CatalogFormat, Title};
use movix::i18n::{Lang, LocaleSession};
use movix::ui;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "movix")]
#[command(version)]
#[command(about = "Bilingual Arabic/English movie and series browser")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the desktop browser window
    Gui {
        /// Interface language
        #[arg(short, long, value_enum, default_value = "en")]
        lang: LangArg,

        /// Catalog file (JSON or YAML) replacing the embedded demo data
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Browse the catalog in the terminal
    Tui {
        /// Interface language
        #[arg(short, long, value_enum, default_value = "en")]
        lang: LangArg,

        /// Catalog file (JSON or YAML) replacing the embedded demo data
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Print the catalog to the console
    List {
        /// Interface language
        #[arg(short, long, value_enum, default_value = "en")]
        lang: LangArg,

        /// Catalog file (JSON or YAML) replacing the embedded demo data
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Filter token: all, movie, series, arabic, foreign, or a genre
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Search query matched against both title languages
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one catalog entry in full
    Show {
        /// Entry identity
        #[arg(value_name = "ID")]
        id: String,

        /// Interface language
        #[arg(short, long, value_enum, default_value = "en")]
        lang: LangArg,

        /// Catalog file (JSON or YAML) replacing the embedded demo data
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Serialize the active catalog
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: CatalogFormat,

        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Catalog file (JSON or YAML) replacing the embedded demo data
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    Ar,
    En,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::Ar => Lang::Ar,
            LangArg::En => Lang::En,
        }
    }
}

fn active_catalog(path: Option<&Path>) -> Result<Vec<Title>> {
    match path {
        Some(path) => catalog::load(path),
        None => Ok(catalog::demo_catalog()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gui { lang, catalog } => {
            let titles = active_catalog(catalog.as_deref())?;
            ui::gui::BrowserGui::run(lang.into(), titles)?;
        }

        Commands::Tui { lang, catalog } => {
            let titles = active_catalog(catalog.as_deref())?;
            let mut session = LocaleSession::new(lang.into());
            ui::tui::BrowseTui::run(&mut session, &titles)?;
        }

        Commands::List {
            lang,
            catalog,
            filter,
            search,
        } => {
            let titles = active_catalog(catalog.as_deref())?;
            let session = LocaleSession::new(lang.into());
            ui::console::print_list(
                &session,
                &titles,
                &Filter::parse(&filter),
                search.as_deref(),
            );
        }

        Commands::Show { id, lang, catalog } => {
            let titles = active_catalog(catalog.as_deref())?;
            let session = LocaleSession::new(lang.into());
            match titles.iter().find(|title| title.id == id) {
                Some(title) => ui::console::print_title(&session, title),
                // Unknown id is a user-visible not-found state, not an
                // error exit.
                None => ui::console::print_not_found(&session, &id),
            }
        }

        Commands::Export {
            format,
            output,
            catalog,
        } => {
            let titles = active_catalog(catalog.as_deref())?;
            let payload = format.serialize(&titles)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, payload)?;
                    println!("Catalog saved to: {}", path.display());
                }
                None => println!("{payload}"),
            }
        }
    }

    Ok(())
}
