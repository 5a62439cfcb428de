use crate::entities::{Part, PlacedPart, Sheet};
use crate::util::SortStrategy;
use crate::util::assertions;

/// Outcome of a nesting run: the opened sheets with their parts and summary statistics.
#[derive(Clone, Debug)]
pub struct NestingResult {
    /// Sheets in the order they were opened
    pub sheets: Vec<Sheet>,
    /// All placed parts, in the order they were placed
    pub placed: Vec<PlacedPart>,
    /// Parts which could not be placed on any sheet
    pub unplaced: Vec<Part>,
    /// Number of parts supplied to the run
    pub total_parts: usize,
    /// Number of parts that were placed
    pub placed_parts: usize,
    pub total_sheets: usize,
    /// Area of all opened sheets not covered by a part
    pub material_waste: f32,
    /// Percentage of the area of all opened sheets covered by parts
    pub material_efficiency: f32,
    /// The part ordering the run used
    pub sort_strategy: SortStrategy,
}

impl NestingResult {
    pub fn new(
        sheets: Vec<Sheet>,
        placed: Vec<PlacedPart>,
        unplaced: Vec<Part>,
        sort_strategy: SortStrategy,
    ) -> Self {
        let total_sheet_area = sheets.iter().map(|s| s.area()).sum::<f32>();
        let used_area = placed.iter().map(|pp| pp.area()).sum::<f32>();

        let material_efficiency = match total_sheet_area > 0.0 {
            true => used_area / total_sheet_area * 100.0,
            false => 0.0,
        };

        let result = NestingResult {
            total_parts: placed.len() + unplaced.len(),
            placed_parts: placed.len(),
            total_sheets: sheets.len(),
            material_waste: f32::max(total_sheet_area - used_area, 0.0),
            material_efficiency,
            sheets,
            placed,
            unplaced,
            sort_strategy,
        };

        debug_assert!(assertions::result_is_consistent(&result));

        result
    }

    /// True if every supplied part was placed
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    pub fn total_sheet_area(&self) -> f32 {
        self.sheets.iter().map(|s| s.area()).sum()
    }

    pub fn used_area(&self) -> f32 {
        self.placed.iter().map(|pp| pp.area()).sum()
    }
}
