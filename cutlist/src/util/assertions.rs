use itertools::Itertools;
use log::error;

use crate::entities::{NestingResult, Sheet, Skyline};
use crate::util::FPA;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

/// Segments are sorted, start at 0, end at the skyline's width, leave no gaps, do not overlap
/// and adjacent segments differ in height.
pub fn skyline_is_valid(skyline: &Skyline) -> bool {
    let segments = skyline.segments();
    let (Some(first), Some(last)) = (segments.first(), segments.last()) else {
        error!("skyline has no segments");
        return false;
    };
    if FPA(first.x) != FPA(0.0) || FPA(last.x_max()) != FPA(skyline.width()) {
        error!(
            "skyline spans [{}, {}) instead of [0, {})",
            first.x,
            last.x_max(),
            skyline.width()
        );
        return false;
    }
    if let Some(s) = segments.iter().find(|s| FPA(s.width) <= FPA(0.0)) {
        error!("skyline contains a degenerate segment: {s:?}");
        return false;
    }
    for (a, b) in segments.iter().tuple_windows() {
        if FPA(a.x_max()) != FPA(b.x) {
            error!("gap or overlap between skyline segments {a:?} and {b:?}");
            return false;
        }
        if FPA(a.y) == FPA(b.y) {
            error!("adjacent skyline segments {a:?} and {b:?} share the same height");
            return false;
        }
    }
    true
}

/// All parts on the sheet lie within its usable area and keep the clearance between each other:
/// their footprints, inflated by half the clearance on every side, do not intersect.
pub fn sheet_is_valid(sheet: &Sheet) -> bool {
    let usable = match sheet.bbox().resize_by(-sheet.edge_margin, -sheet.edge_margin) {
        Some(usable) => usable,
        None => {
            error!("sheet {} has no usable area", sheet.index);
            return false;
        }
    };
    for pp in &sheet.placed_parts {
        if pp.sheet_index != sheet.index {
            error!("part {} on sheet {} is tagged with sheet {}", pp.part.id, sheet.index, pp.sheet_index);
            return false;
        }
        if !usable.contains(&pp.bbox()) {
            error!("part {} at {:?} exceeds the usable area {usable:?}", pp.part.id, pp.bbox());
            return false;
        }
    }
    let half_spacing = sheet.spacing / 2.0;
    for (a, b) in sheet.placed_parts.iter().tuple_combinations() {
        let inflated_a = a.bbox().resize_by(half_spacing, half_spacing);
        let inflated_b = b.bbox().resize_by(half_spacing, half_spacing);
        if let (Some(ia), Some(ib)) = (inflated_a, inflated_b) {
            if ia.collides_with(&ib) {
                error!(
                    "parts {} {:?} and {} {:?} violate the clearance of {}",
                    a.part.id,
                    a.bbox(),
                    b.part.id,
                    b.bbox(),
                    sheet.spacing
                );
                return false;
            }
        }
    }
    skyline_is_valid(sheet.skyline())
}

/// The flat list of placed parts matches the sheets and the statistics add up.
pub fn result_is_consistent(result: &NestingResult) -> bool {
    let n_on_sheets = result.sheets.iter().map(|s| s.placed_parts.len()).sum::<usize>();
    if n_on_sheets != result.placed.len() || result.placed_parts != result.placed.len() {
        error!(
            "{} parts placed on sheets, but {} ({}) in the result",
            n_on_sheets,
            result.placed.len(),
            result.placed_parts
        );
        return false;
    }
    if result.placed_parts + result.unplaced.len() != result.total_parts {
        error!("placed and unplaced parts do not add up to the total");
        return false;
    }
    if result.total_sheets != result.sheets.len() {
        error!("sheet count does not match the number of sheets");
        return false;
    }
    let all_on_their_sheet = result.placed.iter().all(|pp| {
        result
            .sheets
            .get(pp.sheet_index)
            .is_some_and(|s| s.placed_parts.contains(pp))
    });
    if !all_on_their_sheet {
        error!("a placed part is not present on the sheet it is tagged with");
        return false;
    }
    if !(0.0..=100.0).contains(&result.material_efficiency) || result.material_waste < 0.0 {
        error!(
            "invalid statistics, efficiency: {}%, waste: {}",
            result.material_efficiency, result.material_waste
        );
        return false;
    }
    result.sheets.iter().enumerate().all(|(i, s)| s.index == i)
}
