//! Boolean polygon-set composition.
//!
//! [`PolygonSet`] is a normalized planar region: a collection of polygons
//! with holes supporting union (insert) and difference (subtract)
//! composition. The boolean resolution itself (a planar sweep with
//! self-intersection handling) is bound to `i_overlay` rather than
//! reimplemented here.
//!
//! Inserts accumulate in a pending list and are merged in a single union
//! overlay when the set is read or subtracted from. The convolution stage
//! inserts O(edgesA x edgesB) quads per contour pair, so deferring the
//! merge to one sweep over the whole batch is what keeps the composition
//! cost off the hot path.

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;

use crate::geometry::{Contour, IntPoint, IntPolygon};

/// A normalized collection of integer polygons with holes.
///
/// Invariant: after any composition, the stored polygons are simple and
/// non-overlapping within the set (maintained by the overlay engine).
/// Outer contours are wound counter-clockwise and holes clockwise, so a
/// nonzero fill rule reads holes as subtracted area.
#[derive(Debug, Clone, Default)]
pub struct PolygonSet {
    /// Normalized polygons, produced by the last overlay.
    shapes: Vec<IntPolygon>,

    /// Inserted contours awaiting a merge.
    pending: Vec<Contour>,
}

impl PolygonSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the set holds no area contributions.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.pending.is_empty()
    }

    /// Inserts (unions) a single contour.
    ///
    /// Contours with fewer than 3 vertices or zero area are empty
    /// contributions and are dropped.
    pub fn insert_contour(&mut self, contour: Contour) {
        self.push_pending(contour, true);
    }

    /// Inserts (unions) a whole polygon, holes included.
    pub fn insert_polygon(&mut self, polygon: &IntPolygon) {
        self.push_pending(polygon.outer.clone(), true);
        for hole in &polygon.holes {
            self.push_pending(hole.clone(), false);
        }
    }

    /// Subtracts (differences) a single contour from the set.
    pub fn subtract_contour(&mut self, contour: Contour) {
        if contour.len() < 3 || contour.signed_area2() == 0 {
            return;
        }
        self.flush();
        if self.shapes.is_empty() {
            return;
        }

        let subject = contours_to_float(&self.shapes);
        let clip = vec![contour_to_float(&contour.into_ccw())];
        let shapes = subject.overlay(&clip, OverlayRule::Difference, FillRule::NonZero);
        self.shapes = polygons_from_float(shapes);
    }

    /// Returns the normalized polygons, merging any pending inserts first.
    pub fn polygons(&mut self) -> &[IntPolygon] {
        self.flush();
        &self.shapes
    }

    /// Consumes the set, returning its normalized polygons.
    pub fn into_polygons(mut self) -> Vec<IntPolygon> {
        self.flush();
        self.shapes
    }

    fn push_pending(&mut self, contour: Contour, is_outer: bool) {
        if contour.len() < 3 || contour.signed_area2() == 0 {
            return;
        }
        let oriented = if is_outer {
            contour.into_ccw()
        } else {
            contour.into_cw()
        };
        self.pending.push(oriented);
    }

    /// Merges pending contours into the normalized shape list with one
    /// union overlay.
    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let mut pending = std::mem::take(&mut self.pending);

        // A single contour in an otherwise empty set needs no sweep.
        if self.shapes.is_empty() && pending.len() == 1 {
            if let Some(outer) = pending.pop() {
                self.shapes = vec![IntPolygon::from_outer(outer)];
            }
            return;
        }

        let mut subject = contours_to_float(&self.shapes);
        let mut clip: Vec<Vec<[f64; 2]>> = pending.iter().map(contour_to_float).collect();
        if subject.is_empty() {
            subject.push(clip.remove(0));
        }

        let shapes = subject.overlay(&clip, OverlayRule::Union, FillRule::NonZero);
        self.shapes = polygons_from_float(shapes);
    }
}

fn contour_to_float(contour: &Contour) -> Vec<[f64; 2]> {
    contour
        .points()
        .iter()
        .map(|p| [p.x as f64, p.y as f64])
        .collect()
}

fn contour_from_float(contour: &[[f64; 2]]) -> Contour {
    Contour::new(
        contour
            .iter()
            .map(|&[x, y]| IntPoint::new(x.round() as i64, y.round() as i64))
            .collect(),
    )
}

/// Flattens normalized polygons into a contour list for an overlay call.
fn contours_to_float(polygons: &[IntPolygon]) -> Vec<Vec<[f64; 2]>> {
    let mut out = Vec::new();
    for polygon in polygons {
        for ring in polygon.rings() {
            out.push(contour_to_float(ring));
        }
    }
    out
}

/// Rebuilds normalized polygons from overlay output. Within each output
/// shape the first contour is the outer boundary and the rest are holes.
fn polygons_from_float(shapes: Vec<Vec<Vec<[f64; 2]>>>) -> Vec<IntPolygon> {
    let mut polygons = Vec::with_capacity(shapes.len());
    for shape in shapes {
        let mut rings = shape.iter();
        let outer = match rings.next() {
            Some(ring) if ring.len() >= 3 => contour_from_float(ring).into_ccw(),
            _ => continue,
        };
        let holes = rings
            .filter(|ring| ring.len() >= 3)
            .map(|ring| contour_from_float(ring).into_cw())
            .collect();
        polygons.push(IntPolygon { outer, holes });
    }
    polygons
}
