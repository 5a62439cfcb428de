use log::debug;

use crate::entities::{Part, PlacedPart, Skyline};
use crate::geometry::{OrientedRect, Rect};
use crate::util::assertions;
use crate::util::{NestingConfig, SheetSize};

/// A sheet of stock material on which [`Part`]s are placed.
/// Maintains a [`Skyline`] of the occupied area, which is used to search for new positions.
#[derive(Clone, Debug)]
pub struct Sheet {
    /// Position of the sheet in the order sheets were opened
    pub index: usize,
    pub size: SheetSize,
    /// Clearance kept between parts
    pub spacing: f32,
    /// Band along the boundary kept free of parts
    pub edge_margin: f32,
    /// Parts placed on this sheet, in the order they were placed
    pub placed_parts: Vec<PlacedPart>,
    skyline: Skyline,
}

impl Sheet {
    /// Opens a new, empty sheet with the dimensions and clearances of `config`
    pub fn new(index: usize, config: &NestingConfig) -> Self {
        let size = config.sheet_size;
        Sheet {
            index,
            size,
            spacing: config.cutting_tools_thick,
            edge_margin: config.edge_margin,
            placed_parts: vec![],
            skyline: Skyline::new(size.width, size.height),
        }
    }

    pub fn skyline(&self) -> &Skyline {
        &self.skyline
    }

    /// Bottom-left position for the footprint on this sheet, if it fits anywhere.
    pub fn find_position(&self, footprint: &OrientedRect) -> Option<(f32, f32)> {
        self.skyline.find_position(
            footprint.width,
            footprint.height,
            self.spacing,
            self.edge_margin,
        )
    }

    /// Places `part` with the given footprint at `(x, y)`, raising the skyline accordingly.
    /// The position should originate from [`Sheet::find_position`] for the same footprint.
    pub fn place(&mut self, part: &Part, footprint: OrientedRect, (x, y): (f32, f32)) -> &PlacedPart {
        self.skyline
            .commit_placement(x, footprint.width, y, footprint.height, self.spacing);
        self.placed_parts
            .push(PlacedPart::new(part, self.index, footprint, x, y));

        debug!(
            "[SHEET {}] placed part {} ({} x {} at {}) at ({:.3}, {:.3}), skyline has {} segments",
            self.index,
            part.id,
            footprint.width,
            footprint.height,
            footprint.rotation,
            x,
            y,
            self.skyline.segments().len()
        );
        debug_assert!(assertions::sheet_is_valid(self));

        self.placed_parts.last().expect("part was just placed")
    }

    /// Height of the tallest column of the skyline, clearance included
    pub fn top(&self) -> f32 {
        self.skyline.top()
    }

    pub fn is_empty(&self) -> bool {
        self.placed_parts.is_empty()
    }

    /// The rectangle of the sheet itself
    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.size.width,
            y_max: self.size.height,
        }
    }

    pub fn area(&self) -> f32 {
        self.bbox().area()
    }

    /// The sum of the footprint areas of all placed parts
    pub fn used_area(&self) -> f32 {
        self.placed_parts.iter().map(|pp| pp.area()).sum()
    }

    /// Fraction of the sheet's area covered by parts
    pub fn efficiency(&self) -> f32 {
        self.used_area() / self.area()
    }
}
