//! One weapon and the rounds it fires.

use serde::Serialize;

use super::{Ammunition, CrewRange, ModePair};

/// Gun stabilization, as advertised in the armament's feature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Stabilizer {
    #[default]
    None,
    Vertical,
    Shoulder,
    TwoPlane,
}

/// Elevation limits in degrees. The source models "no guidance" as a zero
/// range, so zero (not a sentinel) is the default here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VerticalGuidance {
    pub positive: i32,
    pub negative: i32,
}

/// A vehicle weapon. Attributes are filled incrementally by distinct
/// extraction passes; the ammunition list is assigned as a unit once the
/// matching data tables have been parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Armament {
    /// Matched against data-table captions by containment, not equality;
    /// captions may append caliber or model suffixes.
    pub name: String,
    /// Caliber in mm, when derivable from the name.
    pub diameter: f64,
    /// Shots per minute.
    pub fire_rate: i32,
    pub capacity: i32,
    pub belt_capacity: i32,
    /// First-order ammo stowage.
    pub first_stowage: i32,
    pub vertical_guidance: VerticalGuidance,
    /// Seconds; reload improves with crew skill, so `basic >= aces`.
    pub reload_time: CrewRange<f64>,
    /// Turret traverse, degrees per second, per mode and crew skill.
    pub rotation_speed: ModePair<CrewRange<f64>>,
    pub stabilizer: Stabilizer,
    pub autoloader: bool,
    pub fire_while_moving: bool,
    pub is_secondary: bool,
    pub ammo_types: Vec<Ammunition>,
}

impl Armament {
    pub fn new(name: String) -> Self {
        Armament {
            name,
            diameter: -1.0,
            fire_rate: -1,
            capacity: -1,
            belt_capacity: -1,
            first_stowage: -1,
            vertical_guidance: VerticalGuidance::default(),
            reload_time: CrewRange::splat(-1.0),
            rotation_speed: ModePair::splat(CrewRange::splat(-1.0)),
            stabilizer: Stabilizer::None,
            autoloader: false,
            fire_while_moving: false,
            is_secondary: false,
            ammo_types: Vec::new(),
        }
    }
}
