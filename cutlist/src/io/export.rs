use std::time::Duration;

use itertools::Itertools;

use crate::entities::{NestingResult, PlacedPart, Sheet};
use crate::io::ext_repr::{ExtPlacedPart, ExtSheetLayout, ExtSolution};

/// Exports a nesting result out of the library
pub fn export(result: &NestingResult, run_time: Duration) -> ExtSolution {
    ExtSolution {
        sheets: result.sheets.iter().map(export_sheet).collect(),
        total_sheets: result.total_sheets,
        total_parts: result.total_parts,
        placed_parts: result.placed_parts,
        unplaced_part_ids: result.unplaced.iter().map(|p| p.id.clone()).collect_vec(),
        material_waste: result.material_waste,
        material_efficiency: result.material_efficiency,
        sort_strategy: result.sort_strategy,
        run_time_ms: run_time.as_millis() as u64,
    }
}

pub fn export_sheet(sheet: &Sheet) -> ExtSheetLayout {
    ExtSheetLayout {
        index: sheet.index,
        width: sheet.size.width,
        height: sheet.size.height,
        efficiency: sheet.efficiency() * 100.0,
        placed_parts: sheet.placed_parts.iter().map(export_placed_part).collect(),
    }
}

pub fn export_placed_part(pp: &PlacedPart) -> ExtPlacedPart {
    ExtPlacedPart {
        part_id: pp.part.id.clone(),
        material: pp.part.material.clone(),
        label: pp.part.label.clone(),
        notes: pp.part.notes.clone(),
        grain_direction: pp.part.grain,
        x: pp.x,
        y: pp.y,
        width: pp.width,
        height: pp.height,
        rotation: pp.rotation,
        nominal_width: pp.part.width,
        nominal_height: pp.part.height,
    }
}
