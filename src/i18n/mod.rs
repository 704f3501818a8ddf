// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for movix.
//!
//! Provides the bilingual translation catalog and the locale session that
//! owns the active language for the lifetime of the process.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name | Direction |
//! |------|----------|-------------|-----------|
//! | ar   | Arabic   | العربية      | rtl       |
//! | en   | English  | English     | ltr       |
//!
//! ## Design
//!
//! Translation keys are flat (`"home"`, `"watchNow"`, `"noResults"`) and the
//! key set is identical across both languages. Lookups that miss return the
//! key string itself — a deliberate degrade-to-key policy, not an error
//! condition. There is no cross-language fallback: a key absent from the
//! active table yields the raw key even when the other table defines it.
//!
//! Text direction is never stored. It is derived from the active language at
//! the point of use (`ar → rtl`, else `ltr`), so no reader can observe a
//! language/direction pair that disagrees.
//!
//! The catalog is embedded at compile time as static data — no file I/O,
//! no async, no allocator pressure during translation lookups.

mod catalog;
mod session;

pub use catalog::{t, Direction, Lang};
pub use session::{LocaleSession, RootAttrs};
