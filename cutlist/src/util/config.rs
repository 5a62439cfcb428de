use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::entities::GrainDirection;

/// Dimensions shared by every sheet opened during a nesting run
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SheetSize {
    pub width: f32,
    pub height: f32,
}

impl Default for SheetSize {
    /// A full-size 8 x 4 ft board in millimeters
    fn default() -> Self {
        Self {
            width: 2440.0,
            height: 1220.0,
        }
    }
}

/// Key by which parts are ordered (descending) before they are placed
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Nominal height of the part
    #[default]
    ByHeight,
    /// Longest side of the part
    ByMaxSide,
    /// Area of the part
    ByArea,
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 3] = [
        SortStrategy::ByHeight,
        SortStrategy::ByMaxSide,
        SortStrategy::ByArea,
    ];
}

///Configuration of a nesting run
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct NestingConfig {
    ///Dimensions of every sheet
    pub sheet_size: SheetSize,
    ///Master switch for rotating parts
    pub allow_rotation: bool,
    ///Grain direction of the sheet stock, restricts parts to half turns if set
    pub grain_direction: GrainDirection,
    ///Order in which parts are placed
    pub sort_strategy: SortStrategy,
    ///Clearance kept between any two placed parts (width of the saw blade)
    pub cutting_tools_thick: f32,
    ///Band along the sheet boundary that is kept free of parts
    pub edge_margin: f32,
}

impl Default for NestingConfig {
    fn default() -> Self {
        Self {
            sheet_size: SheetSize::default(),
            allow_rotation: true,
            grain_direction: GrainDirection::None,
            sort_strategy: SortStrategy::ByHeight,
            cutting_tools_thick: 10.0,
            edge_margin: 0.0,
        }
    }
}

impl NestingConfig {
    /// Rejects configurations which would lead to degenerate sheets or negative clearances.
    pub fn validate(&self) -> Result<()> {
        let SheetSize { width, height } = self.sheet_size;
        ensure!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            "sheet dimensions must be positive, got {width} x {height}"
        );
        ensure!(
            self.cutting_tools_thick.is_finite() && self.cutting_tools_thick >= 0.0,
            "cutting tool thickness must be non-negative, got {}",
            self.cutting_tools_thick
        );
        ensure!(
            self.edge_margin.is_finite() && self.edge_margin >= 0.0,
            "edge margin must be non-negative, got {}",
            self.edge_margin
        );
        ensure!(
            2.0 * self.edge_margin < width.min(height),
            "edge margin of {} leaves no usable area on a {width} x {height} sheet",
            self.edge_margin
        );
        Ok(())
    }
}
