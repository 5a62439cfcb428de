use std::fmt::{Display, Formatter};

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Quarter-turn rotation applied to a part before it is placed on a sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// All rotations in the order they are preferred during placement
    pub const PRIORITY: [Rotation; 4] = [Rotation::R0, Rotation::R180, Rotation::R90, Rotation::R270];

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    pub fn from_degrees(degrees: u16) -> Result<Self> {
        match degrees {
            0 => Ok(Rotation::R0),
            90 => Ok(Rotation::R90),
            180 => Ok(Rotation::R180),
            270 => Ok(Rotation::R270),
            _ => bail!("unsupported rotation: {degrees}°, expected one of 0, 90, 180 or 270"),
        }
    }

    /// True if the rotation swaps the width and height of a rectangle
    pub fn is_quarter_turn(self) -> bool {
        matches!(self, Rotation::R90 | Rotation::R270)
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> Self {
        r.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = anyhow::Error;

    fn try_from(degrees: u16) -> Result<Self> {
        Rotation::from_degrees(degrees)
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// The footprint a rectangle occupies on a sheet under a specific [`Rotation`].
/// Produced once and shared between the position search and the commit of a placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedRect {
    pub width: f32,
    pub height: f32,
    pub rotation: Rotation,
}

/// Width and height of a `width` x `height` rectangle after applying `rotation`.
pub fn oriented_dimensions(width: f32, height: f32, rotation: Rotation) -> OrientedRect {
    let (width, height) = match rotation.is_quarter_turn() {
        true => (height, width),
        false => (width, height),
    };
    OrientedRect {
        width,
        height,
        rotation,
    }
}
