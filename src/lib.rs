//! War Thunder wiki scraper: ground-vehicle pages to structured records.
//!
//! The crate has two halves:
//! - [`fetch`] discovers nations and vehicle listings and retrieves raw
//!   page HTML over blocking HTTP.
//! - [`parse`] turns one page's HTML into a [`Vehicle`] record via a strict
//!   sequence of extraction passes (identity, classification, economy,
//!   mobility, armaments, ammunition tables, feature flags).
//!
//! Pages missing identity-critical markup fail with a [`ScrapeError`];
//! optional figures degrade to -1 sentinels instead.

pub mod error;
pub mod fetch;
pub mod model;
pub mod parse;
pub mod table;
pub mod text;

pub use error::{ScrapeError, ScrapeResult};
pub use fetch::Terrain;
pub use model::{Ammunition, Armament, Vehicle};
pub use parse::parse_ground_vehicle;
