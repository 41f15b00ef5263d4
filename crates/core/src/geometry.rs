//! Polygon geometry types.
//!
//! Two coordinate domains live here: real-valued input polygons as given
//! by the caller, and the quantized integer domain the convolution and
//! boolean set operations run in.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D polygon with optional interior holes, in input coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    /// Outer boundary of the polygon.
    outer: Vec<(f64, f64)>,

    /// Interior holes (if any).
    holes: Vec<Vec<(f64, f64)>>,
}

impl Polygon {
    /// Creates a polygon from its outer boundary vertices.
    pub fn new(outer: Vec<(f64, f64)>) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Adds an interior hole.
    pub fn with_hole(mut self, hole: Vec<(f64, f64)>) -> Self {
        self.holes.push(hole);
        self
    }

    /// Creates an axis-aligned rectangle with its lower-left corner at the origin.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::new(vec![
            (0.0, 0.0),
            (width, 0.0),
            (width, height),
            (0.0, height),
        ])
    }

    /// Creates an L-shaped polygon.
    pub fn l_shape(width: f64, height: f64, notch_width: f64, notch_height: f64) -> Self {
        Self::new(vec![
            (0.0, 0.0),
            (width, 0.0),
            (width, notch_height),
            (notch_width, notch_height),
            (notch_width, height),
            (0.0, height),
        ])
    }

    /// Returns the outer boundary vertices.
    pub fn outer(&self) -> &[(f64, f64)] {
        &self.outer
    }

    /// Returns the interior holes.
    pub fn holes(&self) -> &[Vec<(f64, f64)>] {
        &self.holes
    }

    /// Returns a copy of this polygon translated by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            outer: self.outer.iter().map(|&(x, y)| (x + dx, y + dy)).collect(),
            holes: self
                .holes
                .iter()
                .map(|h| h.iter().map(|&(x, y)| (x + dx, y + dy)).collect())
                .collect(),
        }
    }
}

/// A point in the quantized integer domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntPoint {
    pub x: i64,
    pub y: i64,
}

impl IntPoint {
    /// Creates a new point.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns this point translated by another point's coordinates.
    pub fn translated(self, by: IntPoint) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }
}

/// An ordered vertex loop in the integer domain.
///
/// The closing edge (last vertex back to the first) is implicit and never
/// stored as a vertex; [`Contour::edges`] yields it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contour {
    points: Vec<IntPoint>,
}

impl Contour {
    /// Creates a contour from a vertex list.
    pub fn new(points: Vec<IntPoint>) -> Self {
        Self { points }
    }

    /// Returns the vertices.
    pub fn points(&self) -> &[IntPoint] {
        &self.points
    }

    /// Returns the number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the contour has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first vertex, if any.
    pub fn first(&self) -> Option<IntPoint> {
        self.points.first().copied()
    }

    /// Iterates over the directed edges, including the implicit closing edge.
    ///
    /// Empty for contours with fewer than 2 vertices.
    pub fn edges(&self) -> impl Iterator<Item = (IntPoint, IntPoint)> + '_ {
        let n = self.points.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Twice the signed area, exact.
    ///
    /// Positive for counter-clockwise winding, negative for clockwise.
    pub fn signed_area2(&self) -> i128 {
        let n = self.points.len();
        let mut acc = 0i128;
        for i in 0..n {
            let j = (i + 1) % n;
            let pi = self.points[i];
            let pj = self.points[j];
            acc += pi.x as i128 * pj.y as i128 - pj.x as i128 * pi.y as i128;
        }
        acc
    }

    /// Returns this contour wound counter-clockwise.
    pub fn into_ccw(self) -> Self {
        if self.signed_area2() < 0 {
            self.reversed()
        } else {
            self
        }
    }

    /// Returns this contour wound clockwise.
    pub fn into_cw(self) -> Self {
        if self.signed_area2() > 0 {
            self.reversed()
        } else {
            self
        }
    }

    /// Returns this contour with the vertex order reversed.
    pub fn reversed(mut self) -> Self {
        self.points.reverse();
        self
    }

    /// Returns a copy translated by `by`.
    pub fn translated(&self, by: IntPoint) -> Self {
        Self::new(self.points.iter().map(|p| p.translated(by)).collect())
    }
}

impl From<Vec<IntPoint>> for Contour {
    fn from(points: Vec<IntPoint>) -> Self {
        Self::new(points)
    }
}

/// A polygon with holes in the integer domain: one outer contour plus
/// zero or more hole contours.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntPolygon {
    pub outer: Contour,
    pub holes: Vec<Contour>,
}

impl IntPolygon {
    /// Creates a polygon from an outer contour with no holes.
    pub fn from_outer(outer: Contour) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Iterates over all boundary rings: the outer contour, then each hole.
    pub fn rings(&self) -> impl Iterator<Item = &Contour> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }

    /// Returns a copy translated by `by`.
    pub fn translated(&self, by: IntPoint) -> Self {
        Self {
            outer: self.outer.translated(by),
            holes: self.holes.iter().map(|h| h.translated(by)).collect(),
        }
    }
}
