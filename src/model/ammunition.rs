//! One firable round and its ballistic attributes.

use serde::Serialize;

/// Armor penetration (mm) at the wiki's fixed standoff distances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Penetration {
    pub at_10m: i32,
    pub at_100m: i32,
    pub at_500m: i32,
    pub at_1000m: i32,
    pub at_1500m: i32,
    pub at_2000m: i32,
}

/// The closed distance set, in table column order.
pub(crate) const DISTANCES: [u16; 6] = [10, 100, 500, 1000, 1500, 2000];

impl Penetration {
    /// Penetration at one of the fixed distances; `None` for any other value.
    pub fn at(&self, metres: u16) -> Option<i32> {
        match metres {
            10 => Some(self.at_10m),
            100 => Some(self.at_100m),
            500 => Some(self.at_500m),
            1000 => Some(self.at_1000m),
            1500 => Some(self.at_1500m),
            2000 => Some(self.at_2000m),
            _ => None,
        }
    }

    pub(crate) fn set(&mut self, metres: u16, value: i32) {
        match metres {
            10 => self.at_10m = value,
            100 => self.at_100m = value,
            500 => self.at_500m = value,
            1000 => self.at_1000m = value,
            1500 => self.at_1500m = value,
            2000 => self.at_2000m = value,
            _ => {}
        }
    }
}

impl Default for Penetration {
    fn default() -> Self {
        Penetration {
            at_10m: -1,
            at_100m: -1,
            at_500m: -1,
            at_1000m: -1,
            at_1500m: -1,
            at_2000m: -1,
        }
    }
}

/// Ricochet angle (degrees) at the three fixed probability thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ricochet {
    pub at_0pct: i32,
    pub at_50pct: i32,
    pub at_100pct: i32,
}

impl Default for Ricochet {
    fn default() -> Self {
        Ricochet {
            at_0pct: -1,
            at_50pct: -1,
            at_100pct: -1,
        }
    }
}

/// A round as listed in an armament's penetration and shell-details tables.
///
/// Created once per penetration row, then mutated in place by the
/// detail-table pass that matches rows by `name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ammunition {
    pub name: String,
    /// Category tag as printed (AP, HE, APDS, ATGM, ...).
    pub ammo_type: String,
    pub pen_at_distance: Penetration,
    pub ricochet: Ricochet,
    /// Muzzle velocity, m/s.
    pub velocity: i32,
    pub projectile_mass: f64,
    pub explosive_mass: f64,
    pub fuse_delay: f64,
    pub fuse_sensitivity: f64,
    /// Flight range in metres; reported for guided munitions only.
    pub range: i32,
}

impl Ammunition {
    pub fn new(name: String, ammo_type: String, pen_at_distance: Penetration) -> Self {
        Ammunition {
            name,
            ammo_type,
            pen_at_distance,
            ricochet: Ricochet::default(),
            velocity: -1,
            projectile_mass: -1.0,
            explosive_mass: -1.0,
            fuse_delay: -1.0,
            fuse_sensitivity: -1.0,
            range: -1,
        }
    }

    /// Guided rounds carry an extra leading range column in both data tables.
    pub fn is_guided(&self) -> bool {
        self.ammo_type.contains("ATGM")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_round_is_all_sentinels() {
        let ammo = Ammunition::new("APDS".into(), "APDS".into(), Penetration::default());
        assert_eq!(ammo.velocity, -1);
        assert_eq!(ammo.fuse_delay, -1.0);
        assert_eq!(ammo.pen_at_distance.at(500), Some(-1));
        assert_eq!(ammo.ricochet.at_50pct, -1);
        assert_eq!(ammo.range, -1);
    }

    #[test]
    fn penetration_rejects_ad_hoc_distances() {
        let pen = Penetration::default();
        assert_eq!(pen.at(750), None);
    }

    #[test]
    fn guided_marker_is_substring_based() {
        let mut ammo = Ammunition::new("9M113".into(), "ATGM".into(), Penetration::default());
        assert!(ammo.is_guided());
        ammo.ammo_type = "HEAT-FS".into();
        assert!(!ammo.is_guided());
    }
}
