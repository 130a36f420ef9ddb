use glam::DVec2;

use crate::types::Point2D;

/// Dashes along a segment, as `(from, to)` pairs for a line-drawing routine.
///
/// The segment is cut into `floor(len / (2 * dash_length))` pieces of
/// `dash_length`, the first one starting one dash length after `start`. Only
/// every other piece (even indices) is yielded. The iterator is cheap to
/// clone and restart.
#[derive(Debug, Clone, PartialEq)]
pub struct DashedSegments {
    start: Point2D,
    /// Unit direction scaled by the dash length.
    stride: DVec2,
    steps: usize,
    index: usize,
}

impl DashedSegments {
    pub fn new(start: Point2D, end: Point2D, dash_length: f64) -> Self {
        let distance = start.distance(end);
        let valid = start.is_finite()
            && end.is_finite()
            && dash_length.is_finite()
            && dash_length > 0.0
            && distance > 0.0;

        if !valid {
            return Self::empty(start);
        }

        let dir = (end - start) / distance;
        let steps = (distance / (2.0 * dash_length)).floor() as usize;

        Self {
            start,
            stride: dir * dash_length,
            steps,
            index: 0,
        }
    }

    fn empty(start: Point2D) -> Self {
        Self {
            start,
            stride: DVec2::ZERO,
            steps: 0,
            index: 0,
        }
    }

    /// Number of pieces the segment was cut into, drawn or not.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Iterator for DashedSegments {
    type Item = (Point2D, Point2D);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.steps {
            return None;
        }

        let i = self.index as f64;
        self.index += 2;

        let from = self.start + self.stride * (i + 1.0);
        let to = self.start + self.stride * (i + 2.0);
        Some((from, to))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps.saturating_sub(self.index).div_ceil(2);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DashedSegments {}

/// Dashed rendition of the segment `start -> end`.
pub fn dashed_segments(start: Point2D, end: Point2D, dash_length: f64) -> DashedSegments {
    DashedSegments::new(start, end, dash_length)
}
