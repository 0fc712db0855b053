//! Domain records produced by the extraction pipeline.
//!
//! Every mapping in the source data ranges over a closed, fixed key set
//! (game modes, crew skill tiers, armor facings, standoff distances), so the
//! records are fixed-schema structs with explicit sentinel defaults rather
//! than string-keyed maps. A sentinel (-1 / -1.0) always means "not present
//! in the source", never "zero observed".

pub(crate) mod ammunition;
mod armament;
mod vehicle;

pub use ammunition::{Ammunition, Penetration, Ricochet};
pub use armament::{Armament, Stabilizer, VerticalGuidance};
pub use vehicle::{Armour, Gears, Vehicle, VehicleClass};

use serde::Serialize;

/// One value per matchmaking mode (arcade / realistic / simulator).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModeValues<T> {
    pub arcade: T,
    pub realistic: T,
    pub simulator: T,
}

impl<T: Copy> ModeValues<T> {
    pub fn splat(v: T) -> Self {
        ModeValues {
            arcade: v,
            realistic: v,
            simulator: v,
        }
    }
}

/// Arcade/realistic pair for mobility figures the wiki only reports twice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModePair<T> {
    pub arcade: T,
    pub realistic: T,
}

impl<T: Copy> ModePair<T> {
    pub fn splat(v: T) -> Self {
        ModePair {
            arcade: v,
            realistic: v,
        }
    }
}

/// Stock-to-upgraded progression of a single figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progression<T> {
    pub stock: T,
    pub upgraded: T,
}

impl<T: Copy> Progression<T> {
    pub fn splat(v: T) -> Self {
        Progression {
            stock: v,
            upgraded: v,
        }
    }
}

/// Crew-skill range. Canonical two-key schema: the source's four-tier
/// revisions only ever carry data at the endpoints (stock maps to `basic`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrewRange<T> {
    pub basic: T,
    pub aces: T,
}

impl<T: Copy> CrewRange<T> {
    pub fn splat(v: T) -> Self {
        CrewRange { basic: v, aces: v }
    }
}
