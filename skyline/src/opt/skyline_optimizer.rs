use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use cutlist::entities::{NestingResult, Part, PlacedPart, Sheet};
use cutlist::util::NestingConfig;
use itertools::Itertools;
use log::{debug, info, warn};
use thousands::Separable;

use crate::opt::order::part_placement_order;
use crate::opt::search::{search_sheet, search_sheets};

/// Skyline bottom-left optimizer for cutting rectangular parts from identical sheets.
/// Parts are placed one by one, on the first opened sheet with room, opening a new sheet when none has.
pub struct SkylineOptimizer {
    pub parts: Vec<Part>,
    pub config: NestingConfig,
    pub sheets: Vec<Sheet>,
    pub placed: Vec<PlacedPart>,
    pub unplaced: Vec<Part>,
    /// Checked between parts, stops the run when set
    cancel: Option<Arc<AtomicBool>>,
}

impl SkylineOptimizer {
    pub fn new(parts: Vec<Part>, config: NestingConfig) -> Result<Self> {
        config.validate().context("invalid nesting configuration")?;
        for part in &parts {
            part.validate()?;
        }
        let duplicates = parts.iter().map(|p| &p.id).duplicates().collect_vec();
        ensure!(duplicates.is_empty(), "duplicate part ids: {duplicates:?}");

        Ok(Self {
            parts,
            config,
            sheets: vec![],
            placed: vec![],
            unplaced: vec![],
            cancel: None,
        })
    }

    /// Registers a flag which aborts the run when raised.
    /// Parts that were not yet processed at that moment are reported as unplaced.
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|c| c.load(Ordering::Relaxed))
    }

    pub fn solve(mut self) -> NestingResult {
        let start = Instant::now();
        let order = part_placement_order(&self.parts, self.config.sort_strategy);
        let n_parts = self.parts.len();

        for (n, &part_idx) in order.iter().enumerate() {
            if self.is_cancelled() {
                warn!(
                    "[SKY] run cancelled, {} parts remain unprocessed",
                    n_parts - n
                );
                self.unplaced
                    .extend(order[n..].iter().map(|&i| self.parts[i].clone()));
                break;
            }
            let part = self.parts[part_idx].clone();
            match self.place(&part) {
                Some(pp) => info!(
                    "[SKY] placing part {}/{} with id {} ({} x {}, {}) at ({}, {}) on sheet {}",
                    n + 1,
                    n_parts,
                    part.id,
                    pp.width,
                    pp.height,
                    pp.rotation,
                    pp.x,
                    pp.y,
                    pp.sheet_index
                ),
                None => {
                    warn!(
                        "[SKY] part {} ({} x {}) does not fit on an empty sheet",
                        part.id, part.width, part.height
                    );
                    self.unplaced.push(part);
                }
            }
        }

        let result = NestingResult::new(
            self.sheets,
            self.placed,
            self.unplaced,
            self.config.sort_strategy,
        );

        info!(
            "[SKY] optimization finished in {:.3}ms ({} parts, strategy {:?})",
            start.elapsed().as_secs_f64() * 1000.0,
            n_parts.separate_with_commas(),
            result.sort_strategy
        );
        info!(
            "[SKY] solution places {}/{} parts on {} sheets with an efficiency of {:.3}% (waste: {})",
            result.placed_parts,
            result.total_parts,
            result.total_sheets,
            result.material_efficiency,
            (result.material_waste.round() as u64).separate_with_commas()
        );
        result
    }

    /// Places `part` on the first sheet with room, or on a freshly opened one.
    /// Returns [`None`] if the part does not even fit on an empty sheet.
    fn place(&mut self, part: &Part) -> Option<PlacedPart> {
        let (sheet_index, footprint, position) =
            match search_sheets(&self.sheets, part, &self.config) {
                Some(sp) => (sp.sheet_index, sp.footprint, sp.position),
                None => {
                    //trial sheet, only kept if the part fits on it
                    let sheet = Sheet::new(self.sheets.len(), &self.config);
                    let (footprint, position) = search_sheet(&sheet, part, &self.config)?;
                    debug!("[SKY] opening sheet {} for part {}", sheet.index, part.id);
                    self.sheets.push(sheet);
                    (self.sheets.len() - 1, footprint, position)
                }
            };
        let pp = self.sheets[sheet_index]
            .place(part, footprint, position)
            .clone();
        self.placed.push(pp.clone());
        Some(pp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutlist::util::SheetSize;

    fn config(width: f32, height: f32) -> NestingConfig {
        NestingConfig {
            sheet_size: SheetSize { width, height },
            cutting_tools_thick: 0.0,
            ..NestingConfig::default()
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let parts = vec![Part::new("a", 10.0, 10.0), Part::new("a", 20.0, 20.0)];
        assert!(SkylineOptimizer::new(parts, config(100.0, 100.0)).is_err());
    }

    #[test]
    fn rejects_degenerate_parts() {
        let parts = vec![Part::new("a", 0.0, 10.0)];
        assert!(SkylineOptimizer::new(parts, config(100.0, 100.0)).is_err());
        let parts = vec![Part::new("a", f32::NAN, 10.0)];
        assert!(SkylineOptimizer::new(parts, config(100.0, 100.0)).is_err());
    }

    #[test]
    fn oversized_part_opens_no_sheet() {
        let parts = vec![Part::new("huge", 500.0, 500.0), Part::new("small", 50.0, 50.0)];
        let result = SkylineOptimizer::new(parts, config(100.0, 100.0))
            .unwrap()
            .solve();
        assert_eq!(result.total_sheets, 1);
        assert_eq!(result.placed_parts, 1);
        assert_eq!(result.unplaced.len(), 1);
        assert_eq!(result.unplaced[0].id, "huge");
    }

    #[test]
    fn raised_cancel_flag_leaves_everything_unplaced() {
        let parts = (0..5)
            .map(|i| Part::new(format!("p{i}"), 10.0, 10.0))
            .collect_vec();
        let cancel = Arc::new(AtomicBool::new(true));
        let result = SkylineOptimizer::new(parts, config(100.0, 100.0))
            .unwrap()
            .with_cancel(cancel)
            .solve();
        assert_eq!(result.total_parts, 5);
        assert_eq!(result.placed_parts, 0);
        assert_eq!(result.total_sheets, 0);
        assert_eq!(result.material_efficiency, 0.0);
    }

    #[test]
    fn placed_parts_are_tagged_with_their_sheet() {
        let parts = (0..3)
            .map(|i| Part::new(format!("p{i}"), 80.0, 80.0))
            .collect_vec();
        let result = SkylineOptimizer::new(parts, config(100.0, 100.0))
            .unwrap()
            .solve();
        assert_eq!(result.total_sheets, 3);
        for (i, pp) in result.placed.iter().enumerate() {
            assert_eq!(pp.sheet_index, i);
            assert_eq!((pp.x, pp.y), (0.0, 0.0));
        }
    }
}
