//! Ammunition table extraction.
//!
//! Each armament's rounds are described by two wikitables: "Penetration
//! statistics" creates one [`Ammunition`] per row, and a later "Shell
//! details" table enriches those rounds in place, matched by name. Guided
//! munitions (type cell containing "ATGM") carry one extra leading column
//! for flight range; every subsequent positional index shifts by one for
//! that row only.

use crate::error::{ScrapeError, ScrapeResult};
use crate::model::{Ammunition, Penetration, Ricochet};
use crate::table::Grid;
use crate::text::{is_not_available, parse_float, parse_int};

use crate::model::ammunition::DISTANCES;

/// The literal marker distinguishing guided rounds.
const GUIDED_MARKER: &str = "ATGM";

/// Build one round per data row of a penetration table.
pub fn parse_penetration(grid: &Grid) -> ScrapeResult<Vec<Ammunition>> {
    let name_col = grid.column("Ammunition").unwrap_or(0);
    let type_col = grid.column("warhead").unwrap_or(name_col + 1);

    let mut rounds = Vec::new();
    for (i, row) in grid.data_rows().iter().enumerate() {
        if row.iter().all(|c| c.is_empty()) {
            continue;
        }
        if row.len() <= type_col {
            return Err(ScrapeError::MalformedTable {
                table: "penetration",
                row: i,
                cells: row.len(),
                needed: type_col + 1,
            });
        }

        let name = row[name_col].clone();
        let ammo_type = row[type_col].clone();
        let mut ammo = Ammunition::new(name, ammo_type, Penetration::default());

        let mut next = type_col + 1;
        if ammo.is_guided() {
            if let Some(cell) = row.get(next).filter(|c| !is_not_available(c)) {
                ammo.range = parse_int(cell, &[" m"], "range")? as i32;
            }
            next += 1;
        }

        for distance in DISTANCES {
            // Distance columns past the end of a short row stay at the
            // sentinel; the source omits long-range figures for some rounds.
            let Some(cell) = row.get(next) else { break };
            if !cell.is_empty() && !is_not_available(cell) {
                let pen = parse_int(cell, &[" mm"], "penetration")? as i32;
                ammo.pen_at_distance.set(distance, pen);
            }
            next += 1;
        }
        rounds.push(ammo);
    }
    Ok(rounds)
}

/// Merge a shell-details table into previously created rounds, matching
/// rows by name. Rows naming unknown rounds are ignored; known rounds keep
/// sentinels for any cell the table marks "N/A".
pub fn parse_shell_details(grid: &Grid, rounds: &mut [Ammunition]) -> ScrapeResult<()> {
    let name_col = grid.column("Ammunition").unwrap_or(0);
    let type_col = grid.column("warhead").unwrap_or(name_col + 1);

    for (i, row) in grid.data_rows().iter().enumerate() {
        if row.iter().all(|c| c.is_empty()) {
            continue;
        }
        if row.len() <= type_col {
            return Err(ScrapeError::MalformedTable {
                table: "shell details",
                row: i,
                cells: row.len(),
                needed: type_col + 1,
            });
        }

        let Some(ammo) = rounds.iter_mut().find(|a| a.name == row[name_col]) else {
            continue;
        };

        // Per-row offset: a guided round's range column pushes everything
        // after the type cell one position right.
        let mut offset = 0usize;
        if row[type_col].contains(GUIDED_MARKER) {
            if let Some(cell) = row.get(type_col + 1).filter(|c| !is_not_available(c)) {
                ammo.range = parse_int(cell, &[" m"], "range")? as i32;
            }
            offset = 1;
        }

        let velocity_col = type_col + 1 + offset;
        if let Some(cell) = row.get(velocity_col).filter(|c| !is_not_available(c)) {
            ammo.velocity = parse_int(cell, &[" m/s"], "velocity")? as i32;
        }
        if let Some(cell) = row.get(velocity_col + 1).filter(|c| !is_not_available(c)) {
            ammo.projectile_mass = parse_float(cell, &[" kg"], "projectile mass")?;
        }
        if let Some(cell) = row.get(velocity_col + 2).filter(|c| !is_not_available(c)) {
            ammo.fuse_delay = parse_float(cell, &[" m", " s"], "fuse delay")?;
        }
        if let Some(cell) = row.get(velocity_col + 3).filter(|c| !is_not_available(c)) {
            ammo.fuse_sensitivity = parse_float(cell, &[" mm"], "fuse sensitivity")?;
        }
        if let Some(cell) = row.get(velocity_col + 4).filter(|c| !is_not_available(c)) {
            ammo.explosive_mass = parse_float(cell, &[" g", " kg"], "explosive mass")?;
        }

        let mut ricochet = Ricochet::default();
        let angle_base = velocity_col + 5;
        for (slot, idx) in [
            (&mut ricochet.at_0pct, angle_base),
            (&mut ricochet.at_50pct, angle_base + 1),
            (&mut ricochet.at_100pct, angle_base + 2),
        ] {
            if let Some(cell) = row.get(idx).filter(|c| !is_not_available(c)) {
                *slot = parse_int(cell, &["°"], "ricochet angle")? as i32;
            }
        }
        ammo.ricochet = ricochet;
    }
    Ok(())
}
