use serde::{Deserialize, Serialize};

use cutlist::io::svg::SvgDrawOptions;
use cutlist::util::NestingConfig;

/// Configuration for the skyline optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct SkylineConfig {
    /// Parameters of the nesting run. Sheet dimensions and grain are taken from the instance.
    #[serde(default)]
    pub nesting_config: NestingConfig,
    /// Run every sort strategy and keep the best result, instead of only the configured one
    #[serde(default)]
    pub best_of_strategies: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
