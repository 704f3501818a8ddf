// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pure browsing logic shared by every front-end.
//!
//! Filtering, search, and home-page section derivation are side-effect
//! free functions over a catalog slice, recomputed on every selection
//! change — the data sizes are small and bounded, so nothing is cached.
//! The carousel is the one stateful piece, and its clock is injected so
//! the rotation sequence is testable without sleeping.

mod carousel;
mod filter;
mod sections;

pub use carousel::{Carousel, ROTATE_INTERVAL};
pub use filter::{search, Filter};
pub use sections::{featured, home_sections, Section};
