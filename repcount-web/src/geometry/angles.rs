//! Joint angle calculation
//!
//! Calculates the angle at a vertex joint from the two rays that leave it,
//! e.g. elbow→shoulder (upper arm) and elbow→wrist (forearm).

use nalgebra::Point2;

/// Rays shorter than this (pixels) count as coincident points
const MIN_RAY_LENGTH: f32 = 0.0001;

/// Calculate the angle at `vertex` between rays vertex→a and vertex→c
///
/// Uses the two-argument arctangent: θ = atan2(|v1 × v2|, v1 · v2)
///
/// Returns angle in degrees within [0, 180]:
/// - 0° = both rays point the same way (fully folded)
/// - 180° = rays point in opposite directions (straight line)
///
/// Returns `None` when either ray is degenerate.
pub fn angle_at(a: Point2<f32>, vertex: Point2<f32>, c: Point2<f32>) -> Option<f32> {
    let v1 = a - vertex;
    let v2 = c - vertex;

    if v1.norm() < MIN_RAY_LENGTH || v2.norm() < MIN_RAY_LENGTH {
        return None;
    }

    let dot = v1.dot(&v2);
    let cross = v1.perp(&v2);

    Some(cross.abs().atan2(dot).to_degrees())
}

/// Three joints whose middle one is the vertex of the measured angle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointTriple {
    pub a: Point2<f32>,
    pub vertex: Point2<f32>,
    pub c: Point2<f32>,
}

impl JointTriple {
    pub fn new(a: Point2<f32>, vertex: Point2<f32>, c: Point2<f32>) -> Self {
        Self { a, vertex, c }
    }

    /// Angle at the vertex in degrees, `None` if degenerate
    pub fn angle(&self) -> Option<f32> {
        angle_at(self.a, self.vertex, self.c)
    }
}
