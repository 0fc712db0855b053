//! Economy extraction: research/purchase price and the per-mode repair,
//! crew-training and battle-reward figures.

use scraper::Html;

use crate::error::ScrapeResult;
use crate::model::{ModeValues, Vehicle};
use crate::text::{is_not_available, parse_int, split_ordered_pair};

use super::{char_blocks, first_element, indent_lines, block_label, block_value, spec_groups};

const PRICE_UNITS: [&str; 3] = [" SL", " GE", " RP"];

/// Cost and research from the price box, repair/training/reward from the
/// economy spec group. Every field is optional; premium acquisition changes
/// which fields the page reports.
pub fn parse_economy(doc: &Html, tank: &mut Vehicle) -> ScrapeResult<()> {
    parse_price(doc, tank)?;

    for group in spec_groups(doc) {
        for block in char_blocks(group) {
            match block_label(block).as_str() {
                "Repair cost" => parse_repair(block, tank)?,
                "Crew training" => {
                    parse_mode_block(block, &mut tank.crew_training, "crew training")?
                }
                "Battle reward" => {
                    parse_mode_block(block, &mut tank.battle_reward, "battle reward")?
                }
                _ => {}
            }
        }
    }
    Ok(())
}

fn parse_price(doc: &Html, tank: &mut Vehicle) -> ScrapeResult<()> {
    let Some(price) = first_element(doc, ".mw-parser-output .general_info_price") else {
        // Free premium vehicles have no price box; research is zero by
        // convention, not "unreported".
        if tank.is_premium {
            tank.research = 0;
        }
        return Ok(());
    };

    let mut saw_research = false;
    for block in char_blocks(price) {
        let value = block_value(block);
        let Some(value) = value.filter(|v| !is_not_available(v)) else {
            continue;
        };
        match block_label(block).as_str() {
            "Research" => {
                tank.research = parse_int(&value, &PRICE_UNITS, "research")?;
                saw_research = true;
            }
            "Purchase" => tank.cost = parse_int(&value, &PRICE_UNITS, "purchase cost")?,
            _ => {}
        }
    }
    if tank.is_premium && !saw_research {
        tank.research = 0;
    }
    Ok(())
}

/// Repair cost is a true branch, not an optional field. Premium vehicles
/// report a single (upgraded) figure and their stock cost is defined as
/// zero, since modifications cannot be removed from them; everything else
/// reports "stock → upgraded".
fn parse_repair(block: scraper::ElementRef<'_>, tank: &mut Vehicle) -> ScrapeResult<()> {
    for (mode, value) in indent_lines(block) {
        if is_not_available(&value) {
            continue;
        }
        let (stock, upgraded) = if tank.is_premium {
            (0, parse_int(&value, &PRICE_UNITS, "repair cost")?)
        } else if value.contains(" → ") {
            let (s, u) = split_ordered_pair(&value, " → ", &PRICE_UNITS, "repair cost")?;
            (s as i64, u as i64)
        } else {
            let v = parse_int(&value, &PRICE_UNITS, "repair cost")?;
            (v, v)
        };
        if let Some((stock_slot, upgraded_slot)) = mode_slots(
            &mode,
            &mut tank.repair_cost_stock,
            &mut tank.repair_cost_upgraded,
        ) {
            *stock_slot = stock;
            *upgraded_slot = upgraded;
        }
    }
    Ok(())
}

/// A per-mode block: AB/RB/SB indent lines, or one value for all modes.
fn parse_mode_block(
    block: scraper::ElementRef<'_>,
    out: &mut ModeValues<i64>,
    field: &'static str,
) -> ScrapeResult<()> {
    let lines = indent_lines(block);
    if lines.is_empty() {
        if let Some(value) = block_value(block).filter(|v| !is_not_available(v)) {
            *out = ModeValues::splat(parse_int(&value, &[" SL", " %"], field)?);
        }
        return Ok(());
    }
    for (mode, value) in lines {
        if is_not_available(&value) {
            continue;
        }
        let parsed = parse_int(&value, &[" SL", " %"], field)?;
        match mode.as_str() {
            "AB" => out.arcade = parsed,
            "RB" => out.realistic = parsed,
            "SB" => out.simulator = parsed,
            _ => {}
        }
    }
    Ok(())
}

fn mode_slots<'a>(
    mode: &str,
    stock: &'a mut ModeValues<i64>,
    upgraded: &'a mut ModeValues<i64>,
) -> Option<(&'a mut i64, &'a mut i64)> {
    match mode {
        "AB" => Some((&mut stock.arcade, &mut upgraded.arcade)),
        "RB" => Some((&mut stock.realistic, &mut upgraded.realistic)),
        "SB" => Some((&mut stock.simulator, &mut upgraded.simulator)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vehicle;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!(r#"<div class="mw-parser-output">{body}</div>"#))
    }

    fn economy_group(repair_lines: &str) -> String {
        format!(
            r#"<div class="specs_info">
                <div class="specs_char_block">
                    <span class="name">Repair cost</span>
                    {repair_lines}
                </div>
                <div class="specs_char_block">
                    <span class="name">Crew training</span>
                    <span class="value">10,000 SL</span>
                </div>
                <div class="specs_char_block">
                    <span class="name">Battle reward</span>
                    <div class="specs_char_line indent"><span class="name">AB</span><span class="value">130 %</span></div>
                    <div class="specs_char_line indent"><span class="name">RB</span><span class="value">160 %</span></div>
                    <div class="specs_char_line indent"><span class="name">SB</span><span class="value">190 %</span></div>
                </div>
            </div>"#
        )
    }

    #[test]
    fn non_premium_repair_reports_stock_and_upgraded() {
        let d = doc(&economy_group(
            r#"<div class="specs_char_line indent"><span class="name">AB</span><span class="value">1,300 → 1,720 SL</span></div>
               <div class="specs_char_line indent"><span class="name">RB</span><span class="value">1,500 → 1,980 SL</span></div>"#,
        ));
        let mut tank = Vehicle::new("T-44".into());
        parse_economy(&d, &mut tank).unwrap();
        assert_eq!(tank.repair_cost_stock.arcade, 1300);
        assert_eq!(tank.repair_cost_upgraded.arcade, 1720);
        assert_eq!(tank.repair_cost_stock.realistic, 1500);
        assert_eq!(tank.repair_cost_upgraded.realistic, 1980);
        // SB line absent: sentinel, not zero.
        assert_eq!(tank.repair_cost_stock.simulator, -1);
        assert_eq!(tank.crew_training.realistic, 10_000);
        assert_eq!(tank.battle_reward.simulator, 190);
    }

    #[test]
    fn premium_repair_zero_fills_stock() {
        let d = doc(&economy_group(
            r#"<div class="specs_char_line indent"><span class="name">AB</span><span class="value">1,720 SL</span></div>
               <div class="specs_char_line indent"><span class="name">RB</span><span class="value">1,980 SL</span></div>
               <div class="specs_char_line indent"><span class="name">SB</span><span class="value">2,400 SL</span></div>"#,
        ));
        let mut tank = Vehicle::new("Magach 3".into());
        tank.is_premium = true;
        parse_economy(&d, &mut tank).unwrap();
        assert_eq!(tank.repair_cost_stock, ModeValues::splat(0));
        assert_eq!(tank.repair_cost_upgraded.arcade, 1720);
        assert_eq!(tank.repair_cost_upgraded.simulator, 2400);
    }

    #[test]
    fn price_box_and_free_premium_convention() {
        let d = doc(
            r#"<div class="general_info_price">
                <div class="specs_char_block"><span class="name">Research</span><span class="value">63,000 RP</span></div>
                <div class="specs_char_block"><span class="name">Purchase</span><span class="value">230,000 SL</span></div>
            </div>"#,
        );
        let mut tank = Vehicle::new("T-44".into());
        parse_economy(&d, &mut tank).unwrap();
        assert_eq!(tank.research, 63_000);
        assert_eq!(tank.cost, 230_000);

        // No price box at all: premium research is zero by convention.
        let empty = doc("");
        let mut premium = Vehicle::new("Magach 3".into());
        premium.is_premium = true;
        parse_economy(&empty, &mut premium).unwrap();
        assert_eq!(premium.research, 0);
        assert_eq!(premium.cost, -1);
    }
}
