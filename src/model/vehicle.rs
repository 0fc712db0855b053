//! The fully assembled ground vehicle record.

use serde::Serialize;

use super::{Armament, ModePair, ModeValues, Progression};

/// Vehicle classification as shown on the page. The site introduces new
/// categories faster than parsers are updated, so unknown labels keep
/// `Default` (with a warning) instead of failing the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum VehicleClass {
    #[default]
    Default,
    Light,
    Medium,
    Heavy,
    TankDestroyer,
    Spaa,
}

/// Armor thickness in mm for one section, front/side/back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Armour {
    pub front: i32,
    pub side: i32,
    pub back: i32,
}

impl Default for Armour {
    fn default() -> Self {
        Armour {
            front: -1,
            side: -1,
            back: -1,
        }
    }
}

/// Gearbox gear counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gears {
    pub forward: i32,
    pub back: i32,
}

impl Default for Gears {
    fn default() -> Self {
        Gears {
            forward: -1,
            back: -1,
        }
    }
}

/// One ground vehicle, assembled by the orchestrator's sequential passes.
/// Economy sentinels stay at -1 when a field does not apply to the vehicle's
/// acquisition path (free premium vehicles get zero research by convention).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    pub name: String,
    pub vehicle_class: VehicleClass,
    pub nation: String,
    /// 1..=10, decoded from the page's roman-numeral label.
    pub rank: u8,
    pub battle_rating: ModeValues<f64>,
    pub is_premium: bool,
    pub is_squadron: bool,

    // Economy
    /// Purchase price, Silver Lions (or Golden Eagles for premiums).
    pub cost: i64,
    /// Research points to unlock.
    pub research: i64,
    pub repair_cost_stock: ModeValues<i64>,
    pub repair_cost_upgraded: ModeValues<i64>,
    pub crew_training: ModeValues<i64>,
    /// Battle reward multiplier, percent.
    pub battle_reward: ModeValues<i64>,

    // Armor & crew
    pub armour_hull: Armour,
    pub armour_turret: Armour,
    pub crew: i32,
    /// Visibility, percent.
    pub visibility: i32,

    // Mobility
    /// Combat weight, tonnes.
    pub weight: f64,
    pub gears: Gears,
    pub max_speed_forward: ModePair<Progression<f64>>,
    pub max_speed_reverse: ModePair<Progression<f64>>,
    pub engine_power: ModePair<Progression<i32>>,
    pub power_to_weight: ModePair<Progression<f64>>,

    // Equipment flags
    pub is_amphibious: bool,
    pub era: bool,
    pub reverse_gearbox: bool,
    pub controlled_suspension: bool,
    pub smokes: bool,
    pub ess: bool,
    pub artillery: bool,
    pub dozer_blade: bool,
    pub scouting: bool,
    pub night_vision: bool,
    pub thermal_vision: bool,
    pub rangefinder: bool,
    pub laser_rangefinder: bool,
    pub laser_warning_rangefinder: bool,

    pub armaments: Vec<Armament>,
}

impl Vehicle {
    pub fn new(name: String) -> Self {
        Vehicle {
            name,
            vehicle_class: VehicleClass::Default,
            nation: String::new(),
            rank: 0,
            battle_rating: ModeValues::splat(-1.0),
            is_premium: false,
            is_squadron: false,
            cost: -1,
            research: -1,
            repair_cost_stock: ModeValues::splat(-1),
            repair_cost_upgraded: ModeValues::splat(-1),
            crew_training: ModeValues::splat(-1),
            battle_reward: ModeValues::splat(-1),
            armour_hull: Armour::default(),
            armour_turret: Armour::default(),
            crew: -1,
            visibility: -1,
            weight: -1.0,
            gears: Gears::default(),
            max_speed_forward: ModePair::splat(Progression::splat(-1.0)),
            max_speed_reverse: ModePair::splat(Progression::splat(-1.0)),
            engine_power: ModePair::splat(Progression::splat(-1)),
            power_to_weight: ModePair::splat(Progression::splat(-1.0)),
            is_amphibious: false,
            era: false,
            reverse_gearbox: false,
            controlled_suspension: false,
            smokes: false,
            ess: false,
            artillery: false,
            dozer_blade: false,
            scouting: false,
            night_vision: false,
            thermal_vision: false,
            rangefinder: false,
            laser_rangefinder: false,
            laser_warning_rangefinder: false,
            armaments: Vec::new(),
        }
    }
}
