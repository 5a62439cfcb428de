use itertools::Itertools;
use log::trace;

use crate::util::FPA;
use crate::util::assertions;

/// Horizontal piece of a [`Skyline`]: everything below `y` over `[x, x + width)` is considered occupied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

impl Segment {
    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }
}

/// Upper boundary of the material already occupied on a sheet, as seen from directly above.
///
/// The segments are sorted by `x`, span `[0, width)` without gaps or overlaps
/// and adjacent segments never share the same height.
/// Heights include the cutting clearance of the part below them, so searches never need to add it again vertically.
#[derive(Clone, Debug)]
pub struct Skyline {
    width: f32,
    height: f32,
    segments: Vec<Segment>,
}

impl Skyline {
    /// A flat skyline for an empty `width` x `height` sheet
    pub fn new(width: f32, height: f32) -> Self {
        Skyline {
            width,
            height,
            segments: vec![Segment {
                x: 0.0,
                y: 0.0,
                width,
            }],
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Height of the tallest point of the skyline
    pub fn top(&self) -> f32 {
        self.segments.iter().map(|s| s.y).fold(0.0, f32::max)
    }

    /// Searches the bottom-left position for a `rect_width` x `rect_height` rectangle:
    /// the lowest `y` and, among equally low positions, the leftmost `x`.
    ///
    /// Every segment is tried as a left anchor. The rectangle rests on the highest segment below its
    /// clearance span `[x, x + rect_width + spacing)`, which keeps it `spacing` away from parts to its right.
    /// The rectangle itself must stay within the sheet minus `margin` on every side.
    pub fn find_position(
        &self,
        rect_width: f32,
        rect_height: f32,
        spacing: f32,
        margin: f32,
    ) -> Option<(f32, f32)> {
        let x_limit = self.width - margin;
        let y_limit = self.height - margin;

        if self.segments.is_empty() {
            //nothing is occupied
            let fits = FPA(margin + rect_width) <= FPA(x_limit)
                && FPA(margin + rect_height) <= FPA(y_limit);
            return fits.then_some((margin, margin));
        }

        let mut best: Option<(f32, f32)> = None;

        for (i, anchor) in self.segments.iter().enumerate() {
            let x_start = f32::max(anchor.x, margin);
            if FPA(x_start + rect_width) > FPA(x_limit) {
                //anchors are sorted by x, none of the remaining ones can fit either
                break;
            }
            let span_end = f32::min(x_start + rect_width + spacing, self.width);
            let Some(floor) = self.floor_below(i, x_start, span_end) else {
                continue;
            };
            let y = f32::max(floor, margin);
            if FPA(y + rect_height) > FPA(y_limit) {
                continue;
            }
            trace!("anchor {i} yields candidate ({x_start:.3}, {y:.3})");
            best = match best {
                Some((_, best_y)) if FPA(y) >= FPA(best_y) => best,
                _ => Some((x_start, y)),
            };
        }
        best
    }

    /// Highest segment below `[x_start, span_end)`, walking forward from segment `first`.
    /// Returns `None` if the segments do not cover the entire span.
    fn floor_below(&self, first: usize, x_start: f32, span_end: f32) -> Option<f32> {
        let span_width = span_end - x_start;
        let mut covered = 0.0;
        let mut floor = f32::NEG_INFINITY;

        for seg in &self.segments[first..] {
            //segments touching the span only within tolerance neither cover nor support it
            if FPA(seg.x_max()) <= FPA(x_start) {
                continue;
            }
            if FPA(seg.x) >= FPA(span_end) {
                break;
            }
            covered += f32::min(seg.x_max(), span_end) - f32::max(seg.x, x_start);
            floor = f32::max(floor, seg.y);
            if FPA(covered) >= FPA(span_width) {
                return Some(floor);
            }
        }
        None
    }

    /// Raises the skyline over a `width` x `height` rectangle placed at `(x, y)`.
    ///
    /// The raised part (the shadow) extends `spacing` past the rectangle on the right, and its new height
    /// includes `spacing` on top, so that the clearance is baked into the frontier.
    pub fn commit_placement(&mut self, x: f32, width: f32, y: f32, height: f32, spacing: f32) {
        debug_assert!(
            x >= 0.0 && FPA(x + width) <= FPA(self.width),
            "placement exceeds the skyline"
        );

        let shadow_end = f32::min(x + width + spacing, self.width);
        let mut segments = Vec::with_capacity(self.segments.len() + 2);

        for seg in self.segments.drain(..) {
            if seg.x_max() <= x || seg.x >= shadow_end {
                //untouched by the shadow
                segments.push(seg);
                continue;
            }
            if FPA(seg.x) < FPA(x) {
                segments.push(Segment {
                    x: seg.x,
                    y: seg.y,
                    width: x - seg.x,
                });
            }
            if FPA(seg.x_max()) > FPA(shadow_end) {
                segments.push(Segment {
                    x: shadow_end,
                    y: seg.y,
                    width: seg.x_max() - shadow_end,
                });
            }
        }

        segments.push(Segment {
            x,
            y: y + height + spacing,
            width: shadow_end - x,
        });

        self.segments = segments
            .into_iter()
            .sorted_by(|a, b| a.x.total_cmp(&b.x))
            .coalesce(|a, b| match FPA(a.y) == FPA(b.y) {
                true => Ok(Segment {
                    x: a.x,
                    y: a.y,
                    width: b.x_max() - a.x,
                }),
                false => Err((a, b)),
            })
            .collect_vec();

        debug_assert!(assertions::skyline_is_valid(self));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn levels(skyline: &Skyline) -> Vec<(f32, f32, f32)> {
        skyline
            .segments()
            .iter()
            .map(|s| (s.x, s.y, s.width))
            .collect()
    }

    #[test]
    fn fresh_skyline_is_one_flat_segment() {
        let skyline = Skyline::new(1000.0, 500.0);
        assert_eq!(levels(&skyline), vec![(0.0, 0.0, 1000.0)]);
        assert_eq!(skyline.top(), 0.0);
    }

    #[test]
    fn first_rectangle_goes_to_the_origin() {
        let skyline = Skyline::new(1000.0, 1000.0);
        assert_eq!(skyline.find_position(300.0, 200.0, 0.0, 0.0), Some((0.0, 0.0)));
        assert_eq!(skyline.find_position(300.0, 200.0, 10.0, 0.0), Some((0.0, 0.0)));
        assert_eq!(skyline.find_position(300.0, 200.0, 0.0, 15.0), Some((15.0, 15.0)));
    }

    #[test]
    fn oversized_rectangles_are_rejected() {
        let skyline = Skyline::new(1000.0, 1000.0);
        assert_eq!(skyline.find_position(1200.0, 50.0, 0.0, 0.0), None);
        assert_eq!(skyline.find_position(50.0, 1200.0, 0.0, 0.0), None);
        assert_eq!(skyline.find_position(1000.0, 1000.0, 0.0, 1.0), None);
        assert_eq!(skyline.find_position(1000.0, 1000.0, 0.0, 0.0), Some((0.0, 0.0)));
    }

    #[test]
    fn commit_splits_and_raises_the_covered_segment() {
        let mut skyline = Skyline::new(1000.0, 1000.0);
        skyline.commit_placement(0.0, 300.0, 0.0, 200.0, 10.0);
        assert_eq!(
            levels(&skyline),
            vec![(0.0, 210.0, 310.0), (310.0, 0.0, 690.0)]
        );
        assert_eq!(skyline.top(), 210.0);
    }

    #[test]
    fn commit_merges_segments_of_equal_height() {
        let mut skyline = Skyline::new(600.0, 1000.0);
        skyline.commit_placement(0.0, 200.0, 0.0, 100.0, 0.0);
        skyline.commit_placement(400.0, 200.0, 0.0, 100.0, 0.0);
        assert_eq!(
            levels(&skyline),
            vec![(0.0, 100.0, 200.0), (200.0, 0.0, 200.0), (400.0, 100.0, 200.0)]
        );
        //filling the gap levels the whole skyline
        skyline.commit_placement(200.0, 200.0, 0.0, 100.0, 0.0);
        assert_eq!(levels(&skyline), vec![(0.0, 100.0, 600.0)]);
    }

    #[test]
    fn shadow_is_clamped_to_the_sheet() {
        let mut skyline = Skyline::new(210.0, 100.0);
        skyline.commit_placement(110.0, 100.0, 0.0, 100.0, 10.0);
        assert_eq!(levels(&skyline), vec![(0.0, 0.0, 110.0), (110.0, 110.0, 100.0)]);
    }

    #[test]
    fn search_prefers_lowest_then_leftmost() {
        let mut skyline = Skyline::new(1000.0, 1000.0);
        skyline.commit_placement(0.0, 400.0, 0.0, 300.0, 0.0);
        skyline.commit_placement(400.0, 200.0, 0.0, 100.0, 0.0);
        //[0,400)@300, [400,600)@100, [600,1000)@0
        assert_eq!(skyline.find_position(300.0, 100.0, 0.0, 0.0), Some((600.0, 0.0)));
        //too wide for the free strip on the right, rests on the medium part
        assert_eq!(skyline.find_position(500.0, 100.0, 0.0, 0.0), Some((400.0, 100.0)));
        //spans everything, rests on the tallest part
        assert_eq!(skyline.find_position(1000.0, 100.0, 0.0, 0.0), Some((0.0, 300.0)));
    }

    #[test]
    fn clearance_span_lifts_rectangles_next_to_taller_parts() {
        let mut skyline = Skyline::new(300.0, 1000.0);
        //a tall part on the right
        skyline.commit_placement(200.0, 100.0, 0.0, 500.0, 10.0);
        //[0,200)@0, [200,300)@510
        //fits left of the tall part with a gap of exactly 10
        assert_eq!(skyline.find_position(190.0, 100.0, 10.0, 0.0), Some((0.0, 0.0)));
        //would come closer than 10 to the tall part, so it must go on top
        assert_eq!(skyline.find_position(195.0, 100.0, 10.0, 0.0), Some((0.0, 510.0)));
    }

    #[test]
    fn empty_skyline_is_treated_as_free_sheet() {
        let mut skyline = Skyline::new(500.0, 500.0);
        skyline.segments.clear();
        assert_eq!(skyline.find_position(100.0, 100.0, 10.0, 5.0), Some((5.0, 5.0)));
        assert_eq!(skyline.find_position(495.0, 100.0, 10.0, 5.0), None);
    }

    #[test_case(564.3, 3.7, 2; "two panels")]
    #[test_case(0.1, 0.2, 3; "three slivers")]
    #[test_case(0.1, 0.2, 6; "six slivers")]
    #[test_case(0.1, 0.2, 7; "seven slivers")]
    fn fractional_exact_fits_are_accepted(size: f32, spacing: f32, n: usize) {
        //n rectangles and the clearances between them fill the sheet exactly
        let length = n as f32 * size + (n - 1) as f32 * spacing;

        let mut row = Skyline::new(length, 100.0);
        for i in 0..n {
            let (x, y) = row
                .find_position(size, 100.0, spacing, 0.0)
                .unwrap_or_else(|| panic!("rectangle {i} does not fit in the row"));
            assert_eq!(y, 0.0);
            row.commit_placement(x, size, y, 100.0, spacing);
        }

        let mut column = Skyline::new(100.0, length);
        for i in 0..n {
            let (x, y) = column
                .find_position(100.0, size, spacing, 0.0)
                .unwrap_or_else(|| panic!("rectangle {i} does not fit in the column"));
            assert_eq!(x, 0.0);
            column.commit_placement(x, 100.0, y, size, spacing);
        }
    }

    #[test]
    fn sliver_overlap_does_not_lift_the_rectangle() {
        let mut skyline = Skyline::new(1000.0, 1000.0);
        //tall segment ending a rounding error past the margin
        skyline.commit_placement(0.0, 5.00003, 0.0, 900.0, 0.0);
        assert_eq!(skyline.find_position(100.0, 50.0, 0.0, 5.0), Some((5.0, 5.0)));
    }
}
