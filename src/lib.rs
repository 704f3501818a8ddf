// SPDX-License-Identifier: PMPL-1.0-or-later

//! Movix — bilingual Arabic/English movie and series browser.
//!
//! This crate provides the core for a local-only content browser: an
//! embedded bilingual translation catalog, a read-only movie/series
//! catalog, and pure browsing logic (filters, search, home-page sections,
//! hero carousel) shared by three front-ends (console, terminal, desktop).
//!
//! CORE PIECES:
//! 1. **i18n**: compile-time translation tables and the locale session
//!    that owns the active language; text direction is always derived
//!    from the language, never stored.
//! 2. **catalog**: record types with a stable wire shape, an
//!    embedded demo dataset, and JSON/YAML loading for external catalogs.
//! 3. **browse**: side-effect-free filtering/search/section derivation,
//!    plus the clock-injected hero carousel.
//! 4. **ui**: the console, crossterm, and eframe front-ends.

pub mod browse;
pub mod catalog;
pub mod i18n;
pub mod ui;
