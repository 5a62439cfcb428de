use anyhow::{Context, Result, ensure};
use itertools::Itertools;

use crate::entities::Part;
use crate::io::ext_repr::{ExtInstance, ExtPart};
use crate::util::{NestingConfig, SheetSize};

/// Imports an instance into the library.
/// Returns its parts, and `config` with the sheet dimensions and grain of the instance applied.
pub fn import(ext_instance: &ExtInstance, config: &NestingConfig) -> Result<(Vec<Part>, NestingConfig)> {
    let config = NestingConfig {
        sheet_size: SheetSize {
            width: ext_instance.sheet.width,
            height: ext_instance.sheet.height,
        },
        grain_direction: ext_instance.sheet.grain_direction,
        ..*config
    };
    config
        .validate()
        .with_context(|| format!("invalid sheet in instance {}", ext_instance.name))?;

    let parts = ext_instance
        .parts
        .iter()
        .map(import_part)
        .flatten_ok()
        .collect::<Result<Vec<Part>>>()?;

    let duplicates = parts.iter().map(|p| &p.id).duplicates().collect_vec();
    ensure!(
        duplicates.is_empty(),
        "all parts should have unique ids, duplicates: {duplicates:?}"
    );

    Ok((parts, config))
}

/// Imports a part, expanding it into `quantity` copies.
/// Copies are distinguished by a `#n` suffix on their id.
pub fn import_part(ext_part: &ExtPart) -> Result<Vec<Part>> {
    ensure!(
        ext_part.quantity > 0,
        "part {} has a quantity of zero",
        ext_part.id
    );
    let part = Part {
        id: ext_part.id.clone(),
        width: ext_part.width,
        height: ext_part.height,
        grain: ext_part.grain_direction,
        material: ext_part.material.clone(),
        label: ext_part.label.clone(),
        notes: ext_part.notes.clone(),
    };
    part.validate()?;

    let copies = match ext_part.quantity {
        1 => vec![part],
        qty => (1..=qty)
            .map(|n| Part {
                id: format!("{}#{n}", ext_part.id),
                ..part.clone()
            })
            .collect_vec(),
    };
    Ok(copies)
}
