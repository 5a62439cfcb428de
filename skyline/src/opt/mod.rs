mod best_of;
pub mod order;
pub mod search;
pub mod skyline_optimizer;

use anyhow::Result;
use cutlist::entities::{NestingResult, Part};
use cutlist::util::NestingConfig;

use crate::opt::skyline_optimizer::SkylineOptimizer;

#[doc(inline)]
pub use best_of::nest_best_of;

/// Nests `parts` on as few sheets as the skyline heuristic manages.
/// Fails only if `config` or one of the parts is malformed; parts that fit on no sheet are reported as unplaced.
pub fn nest(parts: &[Part], config: &NestingConfig) -> Result<NestingResult> {
    let optimizer = SkylineOptimizer::new(parts.to_vec(), *config)?;
    Ok(optimizer.solve())
}
