use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Direction of the fibers or pattern of a material.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum GrainDirection {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Identity of the sheet material a part is cut from.
/// Opaque to the nesting algorithm, passed through to the output.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Material {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Rectangular part to be cut from a sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    /// Unique identifier within a nesting run
    pub id: String,
    /// Nominal (un-rotated) width
    pub width: f32,
    /// Nominal (un-rotated) height
    pub height: f32,
    pub grain: GrainDirection,
    pub material: Material,
    /// Free-form annotations for downstream display
    pub label: Option<String>,
    pub notes: Option<String>,
}

impl Part {
    pub fn new(id: impl Into<String>, width: f32, height: f32) -> Self {
        Part {
            id: id.into(),
            width,
            height,
            grain: GrainDirection::None,
            material: Material::default(),
            label: None,
            notes: None,
        }
    }

    pub fn with_grain(mut self, grain: GrainDirection) -> Self {
        self.grain = grain;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Parts need finite, positive dimensions to be placed.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0,
            "part {} has invalid dimensions: {} x {}",
            self.id,
            self.width,
            self.height
        );
        Ok(())
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn max_side(&self) -> f32 {
        f32::max(self.width, self.height)
    }
}
