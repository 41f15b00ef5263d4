//! No-Fit Polygon computation.
//!
//! The NFP of a stationary polygon A and an orbiting polygon B is the
//! boundary separating reference positions of B that overlap A from those
//! that do not. It equals the boundary of the Minkowski sum of A and B
//! point-reflected through the origin, which this module computes by
//! edge convolution over boolean polygon sets.

use crate::convolve::convolve_sets;
use crate::error::{Error, Result};
use crate::geometry::Polygon;
use crate::scale::ScaleContext;
use crate::set::PolygonSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One polygon of an NFP result: an outer boundary plus holes, in input
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NfpPolygon {
    /// Outer boundary vertices.
    pub outer: Vec<(f64, f64)>,

    /// Hole boundaries, each a region where the orbiting polygon fits
    /// entirely inside a hole of the stationary one.
    pub holes: Vec<Vec<(f64, f64)>>,
}

/// NFP computation result.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Nfp {
    /// The computed NFP polygon(s). Multiple polygons can result from
    /// disconnected regions.
    pub polygons: Vec<NfpPolygon>,

    /// The output anchor: the orbiting polygon's original first vertex,
    /// which maps onto the origin of every returned coordinate.
    pub anchor: (f64, f64),
}

impl Nfp {
    /// Returns true if the NFP has no polygons.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Returns the total vertex count across all polygons and holes.
    pub fn vertex_count(&self) -> usize {
        self.polygons
            .iter()
            .map(|p| p.outer.len() + p.holes.iter().map(Vec::len).sum::<usize>())
            .sum()
    }
}

/// Computes the No-Fit Polygon of two polygons.
///
/// `stationary` stays fixed; the result describes reference positions of
/// `orbiting` relative to it. Both polygons may carry holes. The pipeline
/// is a pure function of its input: quantize, compose boolean sets,
/// convolve, extract.
///
/// # Errors
/// Returns [`Error::InvalidGeometry`] if either outer boundary has fewer
/// than 3 vertices. Degenerate hole contours are skipped silently.
///
/// Self-intersecting input is not detected and produces silently
/// incorrect geometry.
pub fn compute_nfp(stationary: &Polygon, orbiting: &Polygon) -> Result<Nfp> {
    if stationary.outer().len() < 3 || orbiting.outer().len() < 3 {
        return Err(Error::InvalidGeometry(
            "polygons must have at least 3 vertices".into(),
        ));
    }

    let ctx = ScaleContext::for_pair(stationary, orbiting);
    log::debug!(
        "nfp: input_scale={:.3}, anchor=({}, {})",
        ctx.input_scale,
        ctx.x_shift,
        ctx.y_shift
    );

    // Set A: union the outer boundary, subtract each hole.
    let mut a = PolygonSet::new();
    a.insert_contour(ctx.quantize_contour(stationary.outer()));
    for hole in stationary.holes() {
        a.subtract_contour(ctx.quantize_contour(hole));
    }

    // Set B: the same from the point-reflected coordinates.
    let mut b = PolygonSet::new();
    b.insert_contour(ctx.quantize_contour_negated(orbiting.outer()));
    for hole in orbiting.holes() {
        b.subtract_contour(ctx.quantize_contour_negated(hole));
    }

    let result = convolve_sets(&mut a, &mut b);

    let polygons: Vec<NfpPolygon> = result
        .into_polygons()
        .iter()
        .map(|polygon| NfpPolygon {
            outer: polygon
                .outer
                .points()
                .iter()
                .map(|&p| ctx.unquantize(p))
                .collect(),
            holes: polygon
                .holes
                .iter()
                .map(|hole| hole.points().iter().map(|&p| ctx.unquantize(p)).collect())
                .collect(),
        })
        .collect();

    log::debug!("nfp: {} polygon(s)", polygons.len());

    Ok(Nfp {
        polygons,
        anchor: (ctx.x_shift, ctx.y_shift),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_outer() {
        let a = Polygon::new(vec![(0.0, 0.0), (1.0, 0.0)]);
        let b = Polygon::rectangle(1.0, 1.0);
        assert!(matches!(
            compute_nfp(&a, &b),
            Err(Error::InvalidGeometry(_))
        ));
        assert!(matches!(
            compute_nfp(&b, &a),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_two_squares() {
        let a = Polygon::rectangle(10.0, 10.0);
        let b = Polygon::rectangle(2.0, 2.0);

        let nfp = compute_nfp(&a, &b).unwrap();
        assert_eq!(nfp.polygons.len(), 1);
        assert!(nfp.polygons[0].holes.is_empty());
        assert_eq!(nfp.anchor, (0.0, 0.0));
        assert!(nfp.vertex_count() >= 4);
    }

    #[test]
    fn test_degenerate_hole_skipped() {
        let a = Polygon::rectangle(10.0, 10.0).with_hole(vec![(5.0, 5.0)]);
        let b = Polygon::rectangle(2.0, 2.0);

        let with_point_hole = compute_nfp(&a, &b).unwrap();
        let without = compute_nfp(&Polygon::rectangle(10.0, 10.0), &b).unwrap();
        assert_eq!(with_point_hole.polygons, without.polygons);
    }
}
