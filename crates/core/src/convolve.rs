//! Edge convolution of polygon boundaries.
//!
//! The Minkowski sum boundary of two regions is covered by the union of
//! the quads swept by each edge of one boundary along each edge of the
//! other, plus a translated copy of each polygon per counterpart polygon.
//! The quad construction and the two translation terms encode
//! edge/vertex-touching correctness fixes inherited from the reference
//! algorithm; they are reproduced exactly, not re-derived.

use crate::geometry::{Contour, IntPoint};
use crate::set::PolygonSet;

/// Convolves one directed edge of A with one directed edge of B.
///
/// The vertex interleaving `[a0+b1, a0+b0, a1+b0, a1+b1]` is load-bearing
/// for the winding of the contributed quad.
pub fn convolve_edge_pair(a: (IntPoint, IntPoint), b: (IntPoint, IntPoint)) -> Contour {
    let (a0, a1) = a;
    let (b0, b1) = b;
    Contour::new(vec![
        a0.translated(b1),
        a0.translated(b0),
        a1.translated(b0),
        a1.translated(b1),
    ])
}

/// Convolves every edge of contour `a` with every edge of contour `b`,
/// unioning each quad into `result`.
///
/// Both contours contribute their implicit closing edge. No-op if either
/// has fewer than 2 vertices. O(edgesA x edgesB), the dominant cost of
/// the whole pipeline; callers bound latency by bounding vertex counts.
pub fn convolve_contours(result: &mut PolygonSet, a: &Contour, b: &Contour) {
    if a.len() < 2 || b.len() < 2 {
        return;
    }
    for ea in a.edges() {
        for eb in b.edges() {
            result.insert_contour(convolve_edge_pair(ea, eb));
        }
    }
}

/// Convolves two polygon sets, accumulating every contribution into one
/// result set.
///
/// For every polygon pair (Pa, Pb): each boundary ring of Pa (outer and
/// holes) is convolved against each ring of Pb, then a copy of Pa
/// translated by Pb's first outer vertex and a copy of Pb translated by
/// Pa's first outer vertex are inserted. A single deterministic pass.
pub fn convolve_sets(a: &mut PolygonSet, b: &mut PolygonSet) -> PolygonSet {
    let mut result = PolygonSet::new();
    let a_polygons = a.polygons().to_vec();
    let b_polygons = b.polygons().to_vec();

    for pa in &a_polygons {
        for ring_a in pa.rings() {
            for pb in &b_polygons {
                for ring_b in pb.rings() {
                    convolve_contours(&mut result, ring_a, ring_b);
                }
            }
        }
        for pb in &b_polygons {
            // Degenerate polygons without a first vertex contribute no
            // translation term.
            if let (Some(a0), Some(b0)) = (pa.outer.first(), pb.outer.first()) {
                result.insert_polygon(&pa.translated(b0));
                result.insert_polygon(&pb.translated(a0));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: i64, y: i64) -> IntPoint {
        IntPoint::new(x, y)
    }

    #[test]
    fn test_kernel_interleaving_exact() {
        let a = (pt(0, 0), pt(10, 0));
        let b = (pt(2, 3), pt(5, 7));

        let quad = convolve_edge_pair(a, b);
        assert_eq!(
            quad.points(),
            &[pt(5, 7), pt(2, 3), pt(12, 3), pt(15, 7)],
            "quad must be [a0+b1, a0+b0, a1+b0, a1+b1]"
        );
    }

    #[test]
    fn test_kernel_quad_is_swept_parallelogram() {
        // Horizontal edge swept along a vertical edge: axis-aligned rect.
        let a = (pt(0, 0), pt(4, 0));
        let b = (pt(0, 0), pt(0, 3));

        let quad = convolve_edge_pair(a, b).into_ccw();
        assert_eq!(quad.signed_area2(), 2 * 12);
    }

    #[test]
    fn test_short_sequences_are_noops() {
        let square = Contour::new(vec![pt(0, 0), pt(10, 0), pt(10, 10), pt(0, 10)]);
        let point = Contour::new(vec![pt(1, 1)]);
        let empty = Contour::default();

        let mut result = PolygonSet::new();
        convolve_contours(&mut result, &square, &point);
        convolve_contours(&mut result, &point, &square);
        convolve_contours(&mut result, &empty, &square);
        assert!(result.is_empty());
    }

    #[test]
    fn test_convolve_squares_covers_sum() {
        let mut a = PolygonSet::new();
        a.insert_contour(Contour::new(vec![
            pt(0, 0),
            pt(100, 0),
            pt(100, 100),
            pt(0, 100),
        ]));
        let mut b = PolygonSet::new();
        b.insert_contour(Contour::new(vec![
            pt(0, 0),
            pt(-20, 0),
            pt(-20, -20),
            pt(0, -20),
        ]));

        let mut result = convolve_sets(&mut a, &mut b);
        let polys = result.polygons().to_vec();
        assert_eq!(polys.len(), 1);
        assert!(polys[0].holes.is_empty());

        // [-20, 100]^2: area 120^2.
        let area2: i128 = polys[0].outer.signed_area2();
        assert_eq!(area2, 2 * 120 * 120);
    }

    #[test]
    fn test_empty_sets_convolve_to_empty() {
        let mut a = PolygonSet::new();
        let mut b = PolygonSet::new();
        let mut result = convolve_sets(&mut a, &mut b);
        assert!(result.polygons().is_empty());

        let mut a = PolygonSet::new();
        a.insert_contour(Contour::new(vec![pt(0, 0), pt(10, 0), pt(10, 10)]));
        let mut empty = PolygonSet::new();
        let mut result = convolve_sets(&mut a, &mut empty);
        assert!(result.polygons().is_empty());
    }
}
