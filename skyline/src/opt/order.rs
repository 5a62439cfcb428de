use std::cmp::Reverse;

use cutlist::entities::Part;
use cutlist::util::SortStrategy;
use itertools::Itertools;
use ordered_float::OrderedFloat;

/// Indices of `parts` in the order they are placed: descending by the strategy's key, ties in input order.
pub fn part_placement_order(parts: &[Part], strategy: SortStrategy) -> Vec<usize> {
    (0..parts.len())
        .sorted_by_cached_key(|&i| {
            let key = sort_key(&parts[i], strategy);
            (Reverse(OrderedFloat(key)), i)
        })
        .collect_vec()
}

pub fn sort_key(part: &Part, strategy: SortStrategy) -> f32 {
    match strategy {
        SortStrategy::ByHeight => part.height,
        SortStrategy::ByMaxSide => part.max_side(),
        SortStrategy::ByArea => part.area(),
    }
}
