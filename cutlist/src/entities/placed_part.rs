use crate::entities::Part;
use crate::geometry::{OrientedRect, Rect, Rotation};

/// A [`Part`] that has been placed on a [`Sheet`](crate::entities::Sheet).
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedPart {
    /// The part as it was supplied, with its nominal dimensions
    pub part: Part,
    /// Index of the sheet the part was placed on
    pub sheet_index: usize,
    pub x: f32,
    pub y: f32,
    /// Width of the footprint on the sheet (after rotation)
    pub width: f32,
    /// Height of the footprint on the sheet (after rotation)
    pub height: f32,
    pub rotation: Rotation,
}

impl PlacedPart {
    pub fn new(part: &Part, sheet_index: usize, footprint: OrientedRect, x: f32, y: f32) -> Self {
        PlacedPart {
            part: part.clone(),
            sheet_index,
            x,
            y,
            width: footprint.width,
            height: footprint.height,
            rotation: footprint.rotation,
        }
    }

    /// Area occupied on the sheet
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// The rectangle occupied on the sheet
    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + self.width,
            y_max: self.y + self.height,
        }
    }
}
