use serde::{Deserialize, Serialize};

use crate::entities::{GrainDirection, Material};
use crate::geometry::Rotation;
use crate::util::SortStrategy;

/// A list of parts to be cut from one type of sheet material
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// The sheet stock the parts are cut from
    pub sheet: ExtSheet,
    /// Set of parts to be produced
    pub parts: Vec<ExtPart>,
}

/// External representation of the sheet stock
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSheet {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub grain_direction: GrainDirection,
}

/// External representation of a [`Part`](crate::entities::Part).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPart {
    /// Unique identifier of the part
    pub id: String,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub grain_direction: GrainDirection,
    #[serde(default)]
    pub material: Material,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
    /// Number of identical copies to produce
    #[serde(default = "default_quantity")]
    pub quantity: usize,
}

fn default_quantity() -> usize {
    1
}

/// External representation of a [`NestingResult`](crate::entities::NestingResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Sheets used, in the order they were opened
    pub sheets: Vec<ExtSheetLayout>,
    pub total_sheets: usize,
    pub total_parts: usize,
    pub placed_parts: usize,
    /// Ids of the parts which did not fit on any sheet
    pub unplaced_part_ids: Vec<String>,
    /// Sheet area not covered by parts
    pub material_waste: f32,
    /// Percentage of the sheet area covered by parts
    pub material_efficiency: f32,
    pub sort_strategy: SortStrategy,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
}

/// External representation of a [`Sheet`](crate::entities::Sheet) and the parts placed on it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSheetLayout {
    pub index: usize,
    pub width: f32,
    pub height: f32,
    /// Percentage of this sheet's area covered by parts
    pub efficiency: f32,
    pub placed_parts: Vec<ExtPlacedPart>,
}

/// External representation of a [`PlacedPart`](crate::entities::PlacedPart).
/// Carries both the footprint on the sheet ("as cut") and the nominal dimensions ("as designed").
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedPart {
    pub part_id: String,
    pub material: Material,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
    /// Grain of the part itself, the sheet's grain is part of the instance
    #[serde(default)]
    pub grain_direction: GrainDirection,
    pub x: f32,
    pub y: f32,
    /// Width of the footprint on the sheet
    pub width: f32,
    /// Height of the footprint on the sheet
    pub height: f32,
    /// Rotation in degrees
    pub rotation: Rotation,
    pub nominal_width: f32,
    pub nominal_height: f32,
}
