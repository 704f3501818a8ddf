// SPDX-License-Identifier: PMPL-1.0-or-later

//! Front-ends: console printing, terminal browser, desktop window.
//!
//! Every view takes the locale session and a catalog slice explicitly;
//! none of them owns data beyond its own transient interaction state
//! (selection, expansion, carousel index, search text).

pub mod console;
pub mod gui;
pub mod tui;
