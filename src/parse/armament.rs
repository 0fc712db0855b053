//! Armament extraction: one `.specs_info` weapon block becomes one
//! [`Armament`].
//!
//! The wiki is not sure itself whether a weapon name belongs inside an
//! `<a>` tag, and whether reload figures sit on the block or on an indented
//! sub-line; both variants appear across vehicle entries and both are
//! handled here.

use scraper::ElementRef;
use tracing::warn;

use crate::error::{ScrapeError, ScrapeResult};
use crate::model::{Armament, CrewRange, Stabilizer, VerticalGuidance};
use crate::text::{is_not_available, parse_float, parse_int, split_ordered_pair};

use super::{block_label, block_value, char_blocks, first_element_in, indent_lines, link_or_text, text_of};

/// Parse one weapon block. The name is a mandatory anchor: a weapon without
/// identity poisons every later caption association, so the page is rejected.
pub fn parse_armament(block: ElementRef<'_>) -> ScrapeResult<Armament> {
    let name = armament_name(block)?;
    let mut armament = Armament::new(name);
    armament.diameter = diameter_from_name(&armament.name);

    for stat in char_blocks(block) {
        match block_label(stat).as_str() {
            "Ammunition" => {
                if let Some(v) = block_value(stat) {
                    armament.capacity = parse_int(&v, &[" rounds"], "capacity")? as i32;
                }
            }
            "Belt capacity" => {
                if let Some(v) = block_value(stat) {
                    armament.belt_capacity = parse_int(&v, &[" rounds"], "belt capacity")? as i32;
                }
            }
            "Fire rate" => {
                if let Some(v) = block_value(stat) {
                    armament.fire_rate = parse_int(&v, &[" shots"], "fire rate")? as i32;
                }
            }
            "First-order" => {
                if let Some(v) = block_value(stat) {
                    armament.first_stowage = parse_int(&v, &[" rounds"], "first stowage")? as i32;
                }
            }
            "Vertical guidance" => {
                if let Some(v) = block_value(stat) {
                    armament.vertical_guidance = parse_guidance(&v)?;
                }
            }
            "Reload" => parse_reload(stat, &mut armament)?,
            "Rotation speed" => parse_rotation(stat, &mut armament)?,
            "Fire on the move" => armament.fire_while_moving = true,
            _ => {}
        }
    }

    parse_weapon_features(block, &mut armament);
    Ok(armament)
}

/// Name resolution: prefer the nested hyperlink's text, fall back to the
/// container's direct text, reject the page when both are empty.
pub fn armament_name(block: ElementRef<'_>) -> ScrapeResult<String> {
    let container = first_element_in(block, ".specs_name_weapon")
        .ok_or(ScrapeError::MissingField("armament name"))?;
    link_or_text(container).ok_or(ScrapeError::MissingField("armament name"))
}

/// "105 mm Cannon M68" carries its caliber in the name; the spec blocks
/// never repeat it.
fn diameter_from_name(name: &str) -> f64 {
    let mut words = name.split_whitespace();
    match (words.next(), words.next()) {
        (Some(first), Some("mm")) => first.parse().unwrap_or(-1.0),
        _ => -1.0,
    }
}

/// "-10° / 20°" in either order becomes {positive: 20, negative: -10}.
/// The literal "N/A" means the weapon has no guidance range at all, which
/// the source models as zero, not as a missing value.
fn parse_guidance(value: &str) -> ScrapeResult<VerticalGuidance> {
    if is_not_available(value) {
        return Ok(VerticalGuidance::default());
    }
    let (a, b) = split_ordered_pair(value, "/", &["°"], "vertical guidance")?;
    Ok(VerticalGuidance {
        positive: a.max(b) as i32,
        negative: a.min(b) as i32,
    })
}

/// Reload improves with crew skill, so of an arrow-separated pair the larger
/// figure is basic and the smaller is aces. A single figure means the gun is
/// autoloaded: the mechanism reloads at one speed regardless of crew.
fn parse_reload(stat: ElementRef<'_>, armament: &mut Armament) -> ScrapeResult<()> {
    // Some revisions indent the reload figure one line down.
    let value = first_element_in(stat, ".specs_char_line.indent .value")
        .map(text_of)
        .or_else(|| block_value(stat));
    let Some(value) = value.filter(|v| !is_not_available(v)) else {
        return Ok(());
    };

    if value.contains(" → ") {
        let (a, b) = split_ordered_pair(&value, " → ", &[" s"], "reload")?;
        armament.reload_time = CrewRange {
            basic: a.max(b),
            aces: a.min(b),
        };
    } else {
        let v = parse_float(&value, &[" s"], "reload")?;
        armament.autoloader = true;
        armament.reload_time = CrewRange::splat(v);
    }
    Ok(())
}

/// Rotation speed: AB/RB indent lines, "basic → aces °/s" in source order
/// (traverse improves with skill, so the pair is an improvement sequence and
/// keeps left-to-right order, unlike the guidance range above).
fn parse_rotation(stat: ElementRef<'_>, armament: &mut Armament) -> ScrapeResult<()> {
    for (mode, value) in indent_lines(stat) {
        if is_not_available(&value) {
            continue;
        }
        let range = if value.contains(" → ") {
            let (basic, aces) = split_ordered_pair(&value, " → ", &["°/s"], "rotation speed")?;
            CrewRange { basic, aces }
        } else {
            CrewRange::splat(parse_float(&value, &["°/s"], "rotation speed")?)
        };
        match mode.as_str() {
            "AB" => armament.rotation_speed.arcade = range,
            "RB" => armament.rotation_speed.realistic = range,
            _ => {}
        }
    }
    Ok(())
}

/// Stabilizers are advertised as features of the armament. "Autoloader"
/// shows up here too but is already derived from the reload shape.
fn parse_weapon_features(block: ElementRef<'_>, armament: &mut Armament) {
    let selector = scraper::Selector::parse(".feature_name").unwrap();
    for feature in block.select(&selector) {
        match text_of(feature).as_str() {
            "Two-plane stabilizer" => armament.stabilizer = Stabilizer::TwoPlane,
            "Vertical stabilizer" => armament.stabilizer = Stabilizer::Vertical,
            "Shoulder stabilizer" => armament.stabilizer = Stabilizer::Shoulder,
            "Autoloader" => {}
            other => warn!(feature = other, weapon = %armament.name, "unrecognized weapon feature"),
        }
    }
}
