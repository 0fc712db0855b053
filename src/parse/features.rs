//! Vehicle feature and modification flags.
//!
//! Features are free-floating `.feature_name` labels; modifications live in
//! the modification tree as `.specs_mod_name`. Several capabilities appear
//! in both places, so the feature pass skips labels the modification pass
//! owns, and stabilizer/autoloader labels belong to the armament pass.

use scraper::{Html, Selector};
use tracing::warn;

use crate::model::Vehicle;

use super::text_of;

/// Labels already handled by the modification or armament passes.
const HANDLED_ELSEWHERE: [&str; 4] = [
    "Smoke grenades",
    "ESS",
    "Laser rangefinder",
    "Night vision device",
];

pub fn parse_features(doc: &Html, tank: &mut Vehicle) {
    let selector = Selector::parse(".mw-parser-output .feature_name").unwrap();
    for feature in doc.select(&selector) {
        let label = text_of(feature);
        match label.as_str() {
            "Amphibious" => tank.is_amphibious = true,
            "ERA" => tank.era = true,
            "Reverse gearbox" => tank.reverse_gearbox = true,
            "Controlled suspension" => tank.controlled_suspension = true,
            _ if label.contains("stabilizer") || label == "Autoloader" => {}
            _ if HANDLED_ELSEWHERE.contains(&label.as_str()) => {}
            other => warn!(feature = other, vehicle = %tank.name, "unrecognized feature"),
        }
    }
}

pub fn parse_modifications(doc: &Html, tank: &mut Vehicle) {
    let selector = Selector::parse(".mw-parser-output .specs_mod_name").unwrap();
    for modification in doc.select(&selector) {
        match text_of(modification).as_str() {
            "Smoke grenade" => tank.smokes = true,
            "ESS" => tank.ess = true,
            "Artillery Support" => tank.artillery = true,
            "Dozer Blade" => tank.dozer_blade = true,
            "Improved optics" => tank.scouting = true,
            // Visuals
            "NVD" => tank.night_vision = true,
            "TVD" => tank.thermal_vision = true,
            // Rangefinding
            "Rangefinder" => tank.rangefinder = true,
            "LR" => tank.laser_rangefinder = true,
            "LWS/LR" => tank.laser_warning_rangefinder = true,
            _ => {}
        }
    }
}
