//! General-info extraction: identity, classification, rank, battle rating
//! and the premium/squadron badges.

use scraper::{Html, Selector};
use tracing::warn;

use crate::error::{ScrapeError, ScrapeResult};
use crate::model::{Vehicle, VehicleClass};
use crate::table::Grid;
use crate::text::{parse_float, roman_rank};

use super::{first_element, link_or_text, text_of};

/// Vehicle name. Identity-critical: a page without one is unparsable.
pub fn vehicle_name(doc: &Html) -> ScrapeResult<String> {
    first_element(doc, ".mw-parser-output .general_info_name")
        .map(text_of)
        .filter(|s| !s.is_empty())
        .ok_or(ScrapeError::MissingField("vehicle name"))
}

/// Badge detection and removal. The premium/squadron badge shifts the
/// position of the cost blocks that follow it, so it is excised from the
/// tree before any later pass runs.
pub fn parse_badges(doc: &mut Html, tank: &mut Vehicle) {
    tank.is_premium = detach_all(doc, ".mw-parser-output .general_info_premium") > 0;
    tank.is_squadron = detach_all(doc, ".mw-parser-output .general_info_squadron") > 0;
}

/// Detach every node matching `css`; returns how many were removed.
fn detach_all(doc: &mut Html, css: &str) -> usize {
    let selector = Selector::parse(css).unwrap();
    let ids: Vec<_> = doc.select(&selector).map(|el| el.id()).collect();
    for id in &ids {
        if let Some(mut node) = doc.tree.get_mut(*id) {
            node.detach();
        }
    }
    ids.len()
}

/// Classification, nation, rank and battle rating.
///
/// Class and rank are mandatory anchors; nation and battle rating degrade
/// to defaults when their markup is absent.
pub fn parse_classification(doc: &Html, tank: &mut Vehicle) -> ScrapeResult<()> {
    let class_text = first_element(doc, ".mw-parser-output .general_info_class")
        .map(text_of)
        .filter(|s| !s.is_empty())
        .ok_or(ScrapeError::MissingField("vehicle class"))?;
    tank.vehicle_class = decode_class(&class_text);

    if let Some(el) = first_element(doc, ".mw-parser-output .general_info_nation") {
        if let Some(nation) = link_or_text(el) {
            tank.nation = nation;
        }
    }

    let rank_text = first_element(doc, ".mw-parser-output .general_info_rank")
        .map(text_of)
        .filter(|s| !s.is_empty())
        .ok_or(ScrapeError::MissingField("vehicle rank"))?;
    tank.rank = roman_rank(rank_text.replace("Rank", "").trim())?;

    parse_battle_rating(doc, tank)?;
    Ok(())
}

/// Unknown class labels are tolerated: the site adds categories faster than
/// the parser is updated.
fn decode_class(label: &str) -> VehicleClass {
    let lower = label.to_lowercase();
    if lower.contains("light") {
        VehicleClass::Light
    } else if lower.contains("medium") {
        VehicleClass::Medium
    } else if lower.contains("heavy") {
        VehicleClass::Heavy
    } else if lower.contains("tank destroyer") {
        VehicleClass::TankDestroyer
    } else if lower.contains("spaa") || lower.contains("anti-air") {
        VehicleClass::Spaa
    } else {
        warn!(label, "unrecognized vehicle class");
        VehicleClass::Default
    }
}

/// The battle-rating table has an AB/RB/SB header row and one value row.
fn parse_battle_rating(doc: &Html, tank: &mut Vehicle) -> ScrapeResult<()> {
    let Some(table) = first_element(doc, ".mw-parser-output .general_info_br table") else {
        return Ok(());
    };
    let grid = Grid::from_table(table);
    let Some(row) = grid.data_rows().first() else {
        return Ok(());
    };

    for (mode, slot) in [
        ("AB", &mut tank.battle_rating.arcade),
        ("RB", &mut tank.battle_rating.realistic),
        ("SB", &mut tank.battle_rating.simulator),
    ] {
        if let Some(cell) = grid.column(mode).and_then(|i| row.get(i)) {
            *slot = parse_float(cell, &[], "battle rating")?;
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

    #[test]
    fn name_is_mandatory() {
        let d = doc(r#"<div class="general_info_name">Maus</div>"#);
        assert_eq!(vehicle_name(&d).unwrap(), "Maus");

        let empty = doc("<p>nothing</p>");
        assert!(matches!(
            vehicle_name(&empty),
            Err(ScrapeError::MissingField("vehicle name"))
        ));
    }

    #[test]
    fn classification_decodes_rank_and_br() {
        let d = doc(
            r#"
            <div class="general_info_class">Medium tank</div>
            <div class="general_info_nation"><a href="/USA">USA</a></div>
            <div class="general_info_rank">IV Rank</div>
            <div class="general_info_br"><table>
                <tr><th>AB</th><th>RB</th><th>SB</th></tr>
                <tr><td>6.3</td><td>6.0</td><td>6.0</td></tr>
            </table></div>
        "#,
        );
        let mut tank = Vehicle::new("M47".into());
        parse_classification(&d, &mut tank).unwrap();
        assert_eq!(tank.vehicle_class, VehicleClass::Medium);
        assert_eq!(tank.nation, "USA");
        assert_eq!(tank.rank, 4);
        assert_eq!(tank.battle_rating.arcade, 6.3);
        assert_eq!(tank.battle_rating.simulator, 6.0);
    }

    #[test]
    fn unknown_class_keeps_default() {
        assert_eq!(decode_class("Hovertank"), VehicleClass::Default);
        assert_eq!(decode_class("Tank destroyer"), VehicleClass::TankDestroyer);
    }

    #[test]
    fn bad_rank_token_is_fatal() {
        let d = doc(
            r#"
            <div class="general_info_class">Light tank</div>
            <div class="general_info_rank">Rank 4</div>
        "#,
        );
        let mut tank = Vehicle::new("X".into());
        assert!(matches!(
            parse_classification(&d, &mut tank),
            Err(ScrapeError::InvalidRank(_))
        ));
    }

    #[test]
    fn badges_are_read_then_excised() {
        let mut d = doc(
            r#"
            <div class="general_info_premium">Premium</div>
            <div class="general_info_name">Magach 3</div>
        "#,
        );
        let mut tank = Vehicle::new("Magach 3".into());
        parse_badges(&mut d, &mut tank);
        assert!(tank.is_premium);
        assert!(!tank.is_squadron);
        // Gone from the tree for every later pass.
        assert!(first_element(&d, ".general_info_premium").is_none());
        assert!(first_element(&d, ".general_info_name").is_some());
    }
}
