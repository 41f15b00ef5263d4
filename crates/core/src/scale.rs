//! Integer quantization of input coordinates.
//!
//! The convolution and boolean set operations run on integer coordinates.
//! The scale factor is sized per call from the combined extents of both
//! inputs so that every coordinate produced anywhere in the pipeline stays
//! representable; the bound is the additive combination of the per-axis
//! extents of A and B, a conservative overestimate of the Minkowski sum's
//! bounding box.

use crate::geometry::{Contour, IntPoint, Polygon};

/// Per-axis extents of a vertex list, folded from zero.
///
/// Folding from zero (rather than the true min/max) keeps the bound
/// anchored at the origin, which is where the reflected orbiting polygon
/// ends up.
#[derive(Debug, Clone, Copy, Default)]
struct Extents {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Extents {
    fn of(points: &[(f64, f64)]) -> Self {
        let mut e = Self::default();
        for &(x, y) in points {
            e.max_x = e.max_x.max(x);
            e.min_x = e.min_x.min(x);
            e.max_y = e.max_y.max(y);
            e.min_y = e.min_y.min(y);
        }
        e
    }
}

/// Call-scoped quantization context: one scale factor plus the output
/// anchor shift, computed once per NFP computation and threaded through
/// every stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleContext {
    /// Multiplier taking input coordinates into the integer domain.
    pub input_scale: f64,

    /// X coordinate of the orbiting polygon's first vertex, pre-negation.
    pub x_shift: f64,

    /// Y coordinate of the orbiting polygon's first vertex, pre-negation.
    pub y_shift: f64,
}

impl ScaleContext {
    /// Derives the context for a stationary/orbiting polygon pair.
    ///
    /// Only the outer boundaries feed the extents; holes lie inside them
    /// for valid input. Empty boundaries contribute zero extents.
    pub fn for_pair(stationary: &Polygon, orbiting: &Polygon) -> Self {
        let ea = Extents::of(stationary.outer());
        let eb = Extents::of(orbiting.outer());

        let max_x_abs = (ea.max_x + eb.max_x).max((ea.min_x + eb.min_x).abs());
        let max_y_abs = (ea.max_y + eb.max_y).max((ea.min_y + eb.min_y).abs());

        let mut max_extent = max_x_abs.max(max_y_abs);
        if max_extent < 1.0 {
            max_extent = 1.0;
        }

        let input_scale = (0.1 * i32::MAX as f64) / max_extent;

        let (x_shift, y_shift) = orbiting.outer().first().copied().unwrap_or((0.0, 0.0));

        Self {
            input_scale,
            x_shift,
            y_shift,
        }
    }

    /// Quantizes a vertex.
    pub fn quantize(&self, (x, y): (f64, f64)) -> IntPoint {
        IntPoint::new(
            (self.input_scale * x).round() as i64,
            (self.input_scale * y).round() as i64,
        )
    }

    /// Quantizes a vertex with point reflection through the origin.
    ///
    /// This is the transform applied to the orbiting polygon; it is what
    /// turns the Minkowski sum into the no-fit polygon.
    pub fn quantize_negated(&self, (x, y): (f64, f64)) -> IntPoint {
        IntPoint::new(
            -(self.input_scale * x).round() as i64,
            -(self.input_scale * y).round() as i64,
        )
    }

    /// Quantizes a whole vertex list into a contour.
    pub fn quantize_contour(&self, points: &[(f64, f64)]) -> Contour {
        Contour::new(points.iter().map(|&p| self.quantize(p)).collect())
    }

    /// Quantizes a whole vertex list into a point-reflected contour.
    pub fn quantize_contour_negated(&self, points: &[(f64, f64)]) -> Contour {
        Contour::new(points.iter().map(|&p| self.quantize_negated(p)).collect())
    }

    /// Maps an integer point back to input coordinates, re-anchored at the
    /// orbiting polygon's original first vertex.
    pub fn unquantize(&self, p: IntPoint) -> (f64, f64) {
        (
            p.x as f64 / self.input_scale + self.x_shift,
            p.y as f64 / self.input_scale + self.y_shift,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scale_from_combined_extents() {
        let a = Polygon::rectangle(10.0, 10.0);
        let b = Polygon::rectangle(2.0, 2.0);
        let ctx = ScaleContext::for_pair(&a, &b);

        // Combined extent is 12 on both axes.
        assert_relative_eq!(ctx.input_scale, 0.1 * i32::MAX as f64 / 12.0);
        assert_eq!((ctx.x_shift, ctx.y_shift), (0.0, 0.0));
    }

    #[test]
    fn test_scale_divisor_clamped() {
        let a = Polygon::rectangle(0.1, 0.1);
        let b = Polygon::rectangle(0.2, 0.2);
        let ctx = ScaleContext::for_pair(&a, &b);

        // Extents below 1 clamp the divisor to 1.
        assert_relative_eq!(ctx.input_scale, 0.1 * i32::MAX as f64);
    }

    #[test]
    fn test_negative_extents() {
        let a = Polygon::new(vec![(-20.0, 0.0), (0.0, 0.0), (0.0, -20.0)]);
        let b = Polygon::rectangle(2.0, 2.0);
        let ctx = ScaleContext::for_pair(&a, &b);

        // |min| dominates: Amin + Bmin = -20, Amax + Bmax = 2.
        assert_relative_eq!(ctx.input_scale, 0.1 * i32::MAX as f64 / 20.0);
    }

    #[test]
    fn test_empty_outer_contributes_nothing() {
        let a = Polygon::rectangle(5.0, 5.0);
        let b = Polygon::new(Vec::new());
        let ctx = ScaleContext::for_pair(&a, &b);

        assert_relative_eq!(ctx.input_scale, 0.1 * i32::MAX as f64 / 5.0);
        assert_eq!((ctx.x_shift, ctx.y_shift), (0.0, 0.0));
    }

    #[test]
    fn test_quantize_round_trip() {
        let a = Polygon::rectangle(10.0, 10.0);
        let b = Polygon::rectangle(2.0, 2.0);
        let ctx = ScaleContext::for_pair(&a, &b);

        let p = (3.25, -7.5);
        let (x, y) = ctx.unquantize(ctx.quantize(p));
        assert_relative_eq!(x, p.0, epsilon = 1e-6);
        assert_relative_eq!(y, p.1, epsilon = 1e-6);
    }

    #[test]
    fn test_quantize_negated_is_point_reflection() {
        let a = Polygon::rectangle(10.0, 10.0);
        let b = Polygon::rectangle(2.0, 2.0);
        let ctx = ScaleContext::for_pair(&a, &b);

        let q = ctx.quantize((3.0, -4.0));
        let r = ctx.quantize_negated((3.0, -4.0));
        assert_eq!(r, IntPoint::new(-q.x, -q.y));
    }

    #[test]
    fn test_anchor_from_first_vertex() {
        let a = Polygon::rectangle(10.0, 10.0);
        let b = Polygon::rectangle(2.0, 2.0).translated(5.0, 3.0);
        let ctx = ScaleContext::for_pair(&a, &b);
        assert_eq!((ctx.x_shift, ctx.y_shift), (5.0, 3.0));
    }
}
