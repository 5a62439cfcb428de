use std::cmp::Reverse;

use anyhow::{Context, Result, ensure};
use cutlist::entities::{NestingResult, Part};
use cutlist::util::{NestingConfig, SortStrategy};
use log::info;
use ordered_float::OrderedFloat;
use rayon::prelude::*;

use crate::opt::nest;

/// Runs [`nest`] once per sort strategy, in parallel, and keeps the best result.
/// Results are ranked by the number of placed parts, then the number of sheets, then efficiency.
/// Remaining ties go to the strategy listed first.
pub fn nest_best_of(
    parts: &[Part],
    config: &NestingConfig,
    strategies: &[SortStrategy],
) -> Result<NestingResult> {
    ensure!(!strategies.is_empty(), "no sort strategies to compare");

    let results: Vec<NestingResult> = strategies
        .par_iter()
        .map(|&sort_strategy| {
            let config = NestingConfig {
                sort_strategy,
                ..*config
            };
            nest(parts, &config)
        })
        .collect::<Result<_>>()?;

    for r in &results {
        info!(
            "[BEST-OF] {:?}: {}/{} parts on {} sheets ({:.3}%)",
            r.sort_strategy, r.placed_parts, r.total_parts, r.total_sheets, r.material_efficiency
        );
    }

    let (_, best) = results
        .into_iter()
        .enumerate()
        .min_by_key(|(i, r)| {
            (
                Reverse(r.placed_parts),
                r.total_sheets,
                Reverse(OrderedFloat(r.material_efficiency)),
                *i,
            )
        })
        .context("no nesting results to compare")?;

    info!("[BEST-OF] selected {:?}", best.sort_strategy);
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutlist::util::SheetSize;

    #[test]
    fn empty_strategy_list_is_rejected() {
        let parts = vec![Part::new("a", 10.0, 10.0)];
        assert!(nest_best_of(&parts, &NestingConfig::default(), &[]).is_err());
    }

    #[test]
    fn best_result_is_never_worse_than_any_single_strategy() {
        let config = NestingConfig {
            sheet_size: SheetSize {
                width: 1000.0,
                height: 600.0,
            },
            ..NestingConfig::default()
        };
        let parts = [(600.0, 150.0), (300.0, 300.0), (200.0, 450.0), (900.0, 100.0), (250.0, 250.0)]
            .into_iter()
            .enumerate()
            .map(|(i, (w, h))| Part::new(format!("p{i}"), w, h))
            .collect::<Vec<_>>();

        let best = nest_best_of(&parts, &config, &SortStrategy::ALL).unwrap();
        for strategy in SortStrategy::ALL {
            let single = nest(
                &parts,
                &NestingConfig {
                    sort_strategy: strategy,
                    ..config
                },
            )
            .unwrap();
            assert!(best.placed_parts >= single.placed_parts);
            if best.placed_parts == single.placed_parts {
                assert!(best.total_sheets <= single.total_sheets);
            }
        }
    }
}
