use itertools::Itertools;

use crate::entities::{GrainDirection, Part};
use crate::geometry::Rotation;
use crate::util::NestingConfig;

/// Whether `part` may be placed under `rotation` given the run's configuration.
///
/// Grain (of either the sheet stock or the part itself) pins the part to the half turns,
/// which keep the grain aligned. Quarter turns are only available for grainless parts on grainless stock.
pub fn is_rotation_allowed(part: &Part, rotation: Rotation, config: &NestingConfig) -> bool {
    if !config.allow_rotation {
        rotation == Rotation::R0
    } else if config.grain_direction != GrainDirection::None {
        !rotation.is_quarter_turn()
    } else if part.grain != GrainDirection::None {
        !rotation.is_quarter_turn()
    } else {
        true
    }
}

/// The rotations to try for `part`, in order of preference: 0°, 180°, 90°, 270°.
/// Never empty: 0° is always attempted as a last resort.
pub fn rotation_priority(part: &Part, config: &NestingConfig) -> Vec<Rotation> {
    let rotations = Rotation::PRIORITY
        .into_iter()
        .filter(|r| is_rotation_allowed(part, *r, config))
        .collect_vec();

    match rotations.is_empty() {
        true => vec![Rotation::R0],
        false => rotations,
    }
}
