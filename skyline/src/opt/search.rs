use cutlist::entities::{Part, Sheet};
use cutlist::geometry::{OrientedRect, oriented_dimensions, rotation_priority};
use cutlist::util::NestingConfig;
use log::debug;

/// Encapsulates all required information to place a [`Part`] on an existing [`Sheet`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetPlacement {
    /// Index of the sheet to place the part on
    pub sheet_index: usize,
    /// Footprint of the part in the chosen orientation
    pub footprint: OrientedRect,
    pub position: (f32, f32),
}

/// Searches a single sheet for a position of `part`, trying its allowed rotations in order of preference.
/// The first rotation for which a position exists wins.
pub fn search_sheet(
    sheet: &Sheet,
    part: &Part,
    config: &NestingConfig,
) -> Option<(OrientedRect, (f32, f32))> {
    rotation_priority(part, config)
        .into_iter()
        .find_map(|rotation| {
            let footprint = oriented_dimensions(part.width, part.height, rotation);
            sheet
                .find_position(&footprint)
                .map(|position| (footprint, position))
        })
}

/// Searches the sheets in the order they were opened until one can accommodate `part`.
pub fn search_sheets(
    sheets: &[Sheet],
    part: &Part,
    config: &NestingConfig,
) -> Option<SheetPlacement> {
    sheets.iter().find_map(|sheet| {
        debug!("searching sheet {} for part {}", sheet.index, part.id);
        search_sheet(sheet, part, config).map(|(footprint, position)| SheetPlacement {
            sheet_index: sheet.index,
            footprint,
            position,
        })
    })
}
