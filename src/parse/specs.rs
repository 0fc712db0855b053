//! Hull, turret and mobility extraction: armor layout, crew, visibility,
//! weight, gears, speed, engine power and power-to-weight.

use scraper::{ElementRef, Html};

use crate::error::{ScrapeError, ScrapeResult};
use crate::model::{Armour, ModePair, Progression, Vehicle};
use crate::text::{is_not_available, parse_float, parse_int, split_ordered_pair};

use super::{block_label, block_value, char_blocks, indent_lines, spec_groups};

/// Walk the vehicle-level spec groups and fill armor and mobility figures.
/// Every block here is optional markup; absent blocks keep their sentinels.
pub fn parse_specs(doc: &Html, tank: &mut Vehicle) -> ScrapeResult<()> {
    for group in spec_groups(doc) {
        for block in char_blocks(group) {
            match block_label(block).as_str() {
                "Armour" => parse_armour_block(block, tank)?,
                "Crew" => {
                    if let Some(v) = present(block_value(block)) {
                        tank.crew = parse_int(&v, &[" people"], "crew")? as i32;
                    }
                }
                "Visibility" => {
                    if let Some(v) = present(block_value(block)) {
                        tank.visibility = parse_int(&v, &[" %", "%"], "visibility")? as i32;
                    }
                }
                "Weight" => {
                    if let Some(v) = present(block_value(block)) {
                        tank.weight = parse_float(&v, &[" t"], "weight")?;
                    }
                }
                "Number of gears" => {
                    if let Some(v) = present(block_value(block)) {
                        let (f, b) = split_ordered_pair(&v, " / ", &[], "gears")?;
                        tank.gears.forward = f as i32;
                        tank.gears.back = b as i32;
                    }
                }
                "Max speed forward" => {
                    parse_mode_progression(block, &mut tank.max_speed_forward, &[" km/h"], "max speed forward")?
                }
                "Max speed reverse" => {
                    parse_mode_progression(block, &mut tank.max_speed_reverse, &[" km/h"], "max speed reverse")?
                }
                "Engine power" => {
                    let mut hp = ModePair::splat(Progression::splat(-1.0));
                    parse_mode_progression(block, &mut hp, &[" hp"], "engine power")?;
                    tank.engine_power = ModePair {
                        arcade: Progression {
                            stock: hp.arcade.stock as i32,
                            upgraded: hp.arcade.upgraded as i32,
                        },
                        realistic: Progression {
                            stock: hp.realistic.stock as i32,
                            upgraded: hp.realistic.upgraded as i32,
                        },
                    };
                }
                "Power-to-weight" => {
                    parse_mode_progression(block, &mut tank.power_to_weight, &[" hp/t"], "power-to-weight")?
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !is_not_available(v))
}

/// Armour block: "Hull" and "Turret" indent lines, each "front / side / back".
fn parse_armour_block(block: ElementRef<'_>, tank: &mut Vehicle) -> ScrapeResult<()> {
    for (section, value) in indent_lines(block) {
        if is_not_available(&value) {
            continue;
        }
        let parsed = parse_armour(&value)?;
        match section.as_str() {
            "Hull" => tank.armour_hull = parsed,
            "Turret" => tank.armour_turret = parsed,
            _ => {}
        }
    }
    Ok(())
}

fn parse_armour(value: &str) -> ScrapeResult<Armour> {
    let mut parts = value.split(" / ");
    let mut next = |field| -> ScrapeResult<i32> {
        let part = parts
            .next()
            .ok_or_else(|| ScrapeError::invalid_number(field, value))?;
        Ok(parse_int(part, &[" mm"], field)? as i32)
    };
    Ok(Armour {
        front: next("armour front")?,
        side: next("armour side")?,
        back: next("armour back")?,
    })
}

/// AB/RB indent lines, each "stock → upgraded" (left-to-right improvement
/// order) or a single figure when the vehicle has no performance mods.
fn parse_mode_progression(
    block: ElementRef<'_>,
    out: &mut ModePair<Progression<f64>>,
    suffixes: &[&str],
    field: &'static str,
) -> ScrapeResult<()> {
    for (mode, value) in indent_lines(block) {
        if is_not_available(&value) {
            continue;
        }
        let parsed = if value.contains(" → ") {
            let (stock, upgraded) = split_ordered_pair(&value, " → ", suffixes, field)?;
            Progression { stock, upgraded }
        } else {
            Progression::splat(parse_float(&value, suffixes, field)?)
        };
        match mode.as_str() {
            "AB" => out.arcade = parsed,
            "RB" => out.realistic = parsed,
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vehicle;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!(r#"<div class="mw-parser-output">{body}</div>"#))
    }

    const MOBILITY: &str = r#"
        <div class="specs_info">
            <div class="specs_char_block">
                <span class="name">Armour</span>
                <div class="specs_char_line indent"><span class="name">Hull</span><span class="value">100 / 85 / 60 mm</span></div>
                <div class="specs_char_line indent"><span class="name">Turret</span><span class="value">110 / 75 / 50 mm</span></div>
            </div>
            <div class="specs_char_block"><span class="name">Crew</span><span class="value">5 people</span></div>
            <div class="specs_char_block"><span class="name">Visibility</span><span class="value">95 %</span></div>
        </div>
        <div class="specs_info">
            <div class="specs_char_block">
                <span class="name">Max speed forward</span>
                <div class="specs_char_line indent"><span class="name">AB</span><span class="value">48 → 52 km/h</span></div>
                <div class="specs_char_line indent"><span class="name">RB</span><span class="value">43 → 48 km/h</span></div>
            </div>
            <div class="specs_char_block">
                <span class="name">Max speed reverse</span>
                <div class="specs_char_line indent"><span class="name">AB</span><span class="value">9 km/h</span></div>
                <div class="specs_char_line indent"><span class="name">RB</span><span class="value">8 km/h</span></div>
            </div>
            <div class="specs_char_block"><span class="name">Number of gears</span><span class="value">8 / 4</span></div>
            <div class="specs_char_block"><span class="name">Weight</span><span class="value">46.3 t</span></div>
            <div class="specs_char_block">
                <span class="name">Engine power</span>
                <div class="specs_char_line indent"><span class="name">AB</span><span class="value">1,648 → 2,050 hp</span></div>
                <div class="specs_char_line indent"><span class="name">RB</span><span class="value">940 → 1,100 hp</span></div>
            </div>
            <div class="specs_char_block">
                <span class="name">Power-to-weight</span>
                <div class="specs_char_line indent"><span class="name">AB</span><span class="value">35.6 → 44.3 hp/t</span></div>
                <div class="specs_char_line indent"><span class="name">RB</span><span class="value">20.3 → 23.8 hp/t</span></div>
            </div>
        </div>
    "#;

    #[test]
    fn armour_crew_visibility() {
        let d = doc(MOBILITY);
        let mut tank = Vehicle::new("T-44".into());
        parse_specs(&d, &mut tank).unwrap();
        assert_eq!(
            tank.armour_hull,
            Armour { front: 100, side: 85, back: 60 }
        );
        assert_eq!(tank.armour_turret.front, 110);
        assert_eq!(tank.crew, 5);
        assert_eq!(tank.visibility, 95);
    }

    #[test]
    fn mobility_splits_by_mode_and_progression() {
        let d = doc(MOBILITY);
        let mut tank = Vehicle::new("T-44".into());
        parse_specs(&d, &mut tank).unwrap();
        assert_eq!(tank.max_speed_forward.arcade.stock, 48.0);
        assert_eq!(tank.max_speed_forward.arcade.upgraded, 52.0);
        assert_eq!(tank.max_speed_forward.realistic.upgraded, 48.0);
        // Single-value line means no progression: both tiers equal.
        assert_eq!(tank.max_speed_reverse.realistic.stock, 8.0);
        assert_eq!(tank.max_speed_reverse.realistic.upgraded, 8.0);
        assert_eq!(tank.gears.forward, 8);
        assert_eq!(tank.gears.back, 4);
        assert_eq!(tank.weight, 46.3);
        assert_eq!(tank.engine_power.arcade.upgraded, 2050);
        assert_eq!(tank.engine_power.realistic.stock, 940);
        assert_eq!(tank.power_to_weight.realistic.upgraded, 23.8);
    }

    #[test]
    fn absent_blocks_keep_sentinels() {
        let d = doc(r#"<div class="specs_info"><div class="specs_char_block"><span class="name">Crew</span><span class="value">3 people</span></div></div>"#);
        let mut tank = Vehicle::new("X".into());
        parse_specs(&d, &mut tank).unwrap();
        assert_eq!(tank.crew, 3);
        assert_eq!(tank.weight, -1.0);
        assert_eq!(tank.armour_hull.front, -1);
    }
}
