//! Ground-vehicle page extraction.
//!
//! The orchestrator runs a strict linear sequence over one page's markup:
//! identity → classification/rank/battle-rating → cost → hull/mobility →
//! armament blocks → ammunition tables → features → modifications. Each
//! stage may assume every previous stage completed; a stage whose markup
//! section is absent is a no-op. The terminal state is a fully populated
//! [`Vehicle`] or an extraction error, never a partial record.

mod ammunition;
mod armament;
mod economy;
mod features;
mod general;
mod specs;

pub use ammunition::{parse_penetration, parse_shell_details};
pub use armament::parse_armament;

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::error::{ScrapeError, ScrapeResult};
use crate::model::{Ammunition, Armament, Vehicle};
use crate::table::Grid;
use crate::text::normalize_ws;

/// Parse the wiki entry of one ground vehicle.
///
/// The input is the raw, unparsed HTML of the page; the caller owns fetch,
/// caching and storage. No I/O happens here beyond `tracing` diagnostics.
pub fn parse_ground_vehicle(html: &str) -> ScrapeResult<Vehicle> {
    let mut doc = Html::parse_document(html);

    let mut tank = Vehicle::new(general::vehicle_name(&doc)?);
    // Badges shift the position of everything after them; read and excise
    // them before any other pass.
    general::parse_badges(&mut doc, &mut tank);
    general::parse_classification(&doc, &mut tank)?;
    economy::parse_economy(&doc, &mut tank)?;
    specs::parse_specs(&doc, &mut tank)?;

    for (block, secondary) in weapon_blocks(&doc) {
        let mut gun = armament::parse_armament(block)?;
        gun.is_secondary = secondary;
        tank.armaments.push(gun);
    }

    parse_ammunition_tables(&doc, &mut tank)?;
    features::parse_features(&doc, &mut tank);
    features::parse_modifications(&doc, &mut tank);
    Ok(tank)
}

/// Walk the wikitables in document order. A table with one extra class is a
/// data table; its kind sits in its first header cell, and its owning
/// armament's caption travels in the nearest preceding plain wikitable
/// (so a "Shell details" table directly after its "Penetration statistics"
/// sibling still belongs to the same weapon).
fn parse_ammunition_tables(doc: &Html, tank: &mut Vehicle) -> ScrapeResult<()> {
    let selector = Selector::parse(".mw-parser-output .wikitable").unwrap();
    let tables: Vec<_> = doc.select(&selector).collect();

    let mut caption: Option<String> = None;
    let mut rounds: Vec<Ammunition> = Vec::new();

    for (i, table) in tables.iter().enumerate() {
        if table.value().classes().count() != 2 {
            continue;
        }
        if let Some(prev) = i.checked_sub(1).map(|p| tables[p]) {
            if prev.value().classes().count() == 1 {
                caption = Some(caption_of(prev)?);
            }
        }

        let grid = Grid::from_table(*table);
        match grid.first_header() {
            Some("Penetration statistics") => rounds = ammunition::parse_penetration(&grid)?,
            Some("Shell details") if !rounds.is_empty() => {
                ammunition::parse_shell_details(&grid, &mut rounds)?
            }
            _ => {}
        }

        if rounds.is_empty() {
            continue;
        }
        let caption = caption
            .as_deref()
            .ok_or(ScrapeError::MissingField("armament name"))?;
        assign_ammunition(&mut tank.armaments, caption, &rounds)?;
    }
    Ok(())
}

/// The caption cell follows the armament-name rule: prefer a nested link's
/// text, fall back to the cell's own text, reject the page when both are
/// missing.
fn caption_of(table: ElementRef<'_>) -> ScrapeResult<String> {
    first_element_in(table, "tr th")
        .and_then(link_or_text)
        .ok_or(ScrapeError::MissingField("armament name"))
}

/// Associate a round list with the armament whose name contains the caption.
/// An exact name match wins outright; otherwise the containment candidate
/// must be unique — two armaments sharing a caption prefix is ambiguous and
/// rejected rather than silently resolved by iteration order.
fn assign_ammunition(
    armaments: &mut [Armament],
    caption: &str,
    rounds: &[Ammunition],
) -> ScrapeResult<()> {
    if let Some(gun) = armaments.iter_mut().find(|a| a.name == caption) {
        gun.ammo_types = rounds.to_vec();
        return Ok(());
    }

    let mut candidates: Vec<&mut Armament> = armaments
        .iter_mut()
        .filter(|a| a.name.contains(caption))
        .collect();
    match candidates.len() {
        0 => {
            warn!(caption, "data table caption matches no armament");
            Ok(())
        }
        1 => {
            candidates[0].ammo_types = rounds.to_vec();
            Ok(())
        }
        _ => Err(ScrapeError::AmbiguousArmament(caption.to_string())),
    }
}

/* ---------- shared selector helpers ---------- */

pub(crate) fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub(crate) fn first_element<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).unwrap();
    doc.select(&selector).next()
}

pub(crate) fn first_element_in<'a>(el: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).unwrap();
    el.select(&selector).next()
}

/// Prefer the text of a nested hyperlink; fall back to the element's own
/// text. Empty results are `None`.
pub(crate) fn link_or_text(el: ElementRef<'_>) -> Option<String> {
    let a = Selector::parse("a").unwrap();
    let text = match el.select(&a).next() {
        Some(link) => text_of(link),
        None => text_of(el),
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Vehicle-level spec groups: `.specs_info` with no extra class.
pub(crate) fn spec_groups(doc: &Html) -> Vec<ElementRef<'_>> {
    let selector = Selector::parse(".mw-parser-output .specs_info").unwrap();
    doc.select(&selector)
        .filter(|el| el.value().classes().count() == 1)
        .collect()
}

/// Armament blocks: `.specs_info` with a weapon marker class. The marker
/// also tells primary from secondary mounts.
pub(crate) fn weapon_blocks(doc: &Html) -> Vec<(ElementRef<'_>, bool)> {
    let selector = Selector::parse(".mw-parser-output .specs_info").unwrap();
    doc.select(&selector)
        .filter(|el| el.value().classes().count() >= 2)
        .map(|el| {
            let secondary = el.value().classes().any(|c| c.contains("secondary"));
            (el, secondary)
        })
        .collect()
}

pub(crate) fn char_blocks(el: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let selector = Selector::parse(".specs_char_block").unwrap();
    el.select(&selector).collect()
}

/// The block's own label: its first `.name` descendant (indent-line names
/// come later in document order).
pub(crate) fn block_label(block: ElementRef<'_>) -> String {
    first_element_in(block, ".name").map(text_of).unwrap_or_default()
}

pub(crate) fn block_value(block: ElementRef<'_>) -> Option<String> {
    first_element_in(block, ".value").map(text_of)
}

/// Indented sub-lines of a char block, as (label, value) pairs.
pub(crate) fn indent_lines(block: ElementRef<'_>) -> Vec<(String, String)> {
    let selector = Selector::parse(".specs_char_line.indent").unwrap();
    block
        .select(&selector)
        .filter_map(|line| {
            let label = first_element_in(line, ".name").map(text_of)?;
            let value = first_element_in(line, ".value").map(text_of)?;
            Some((label, value))
        })
        .collect()
}
