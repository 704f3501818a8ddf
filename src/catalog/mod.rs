// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog module: the movie/series records the front-ends browse.
//!
//! Records are external, read-only data. The embedded demo catalog is the
//! default provider; `--catalog <file>` swaps in a JSON or YAML file of the
//! same shape. No invariant enforcement happens here — malformed records
//! are the data provider's responsibility.

mod demo;
mod loader;
mod record;

pub use demo::demo_catalog;
pub use loader::{load, CatalogFormat};
pub use record::{Quality, Title, TitleKind};
