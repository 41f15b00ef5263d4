//! # nfp-core
//!
//! Convolution-based No-Fit Polygon (NFP) computation for 2D nesting.
//!
//! The NFP of a stationary polygon A and an orbiting polygon B marks every
//! reference position of B that would make it overlap A. This crate
//! computes it as the boundary of the Minkowski sum of A and B reflected
//! through the origin, using integer-quantized edge convolution over
//! boolean polygon sets.
//!
//! ## Quick Start
//!
//! ```rust
//! use nfp_core::{compute_nfp, Polygon};
//!
//! let stationary = Polygon::rectangle(10.0, 10.0);
//! let orbiting = Polygon::rectangle(2.0, 2.0);
//!
//! let nfp = compute_nfp(&stationary, &orbiting).unwrap();
//! assert_eq!(nfp.polygons.len(), 1);
//! ```
//!
//! Holes are supported on both polygons:
//!
//! ```rust
//! use nfp_core::{compute_nfp, Polygon};
//!
//! let plate = Polygon::rectangle(100.0, 100.0)
//!     .with_hole(vec![(25.0, 25.0), (75.0, 25.0), (75.0, 75.0), (25.0, 75.0)]);
//! let part = Polygon::rectangle(10.0, 10.0);
//!
//! let nfp = compute_nfp(&plate, &part).unwrap();
//! assert!(!nfp.is_empty());
//! ```
//!
//! ## Pipeline
//!
//! 1. **Quantize** ([`scale`]): both inputs map into a bounded integer
//!    coordinate space sized from their combined extents; the orbiting
//!    polygon is point-reflected through the origin.
//! 2. **Compose** ([`set`]): each input becomes a boolean polygon set,
//!    outer boundary unioned and holes subtracted, backed by `i_overlay`.
//! 3. **Convolve** ([`convolve`]): every edge pair across every boundary
//!    ring contributes a quad, unioned together with two translated
//!    polygon copies per polygon pair.
//! 4. **Extract** ([`nfp`]): result contours map back to input
//!    coordinates, anchored at the orbiting polygon's first vertex.
//!
//! ## Limitations
//!
//! - Self-intersecting (non-simple) input polygons are not detected and
//!   produce silently incorrect output.
//! - Robustness rests on a heuristic integer scale factor, not exact
//!   rational arithmetic.
//! - Runtime is quadratic in edge count per contour pair; bound input
//!   vertex counts to bound latency.
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialization/deserialization of the public types.

pub mod convolve;
pub mod error;
pub mod geometry;
pub mod nfp;
pub mod scale;
pub mod set;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Contour, IntPoint, IntPolygon, Polygon};
pub use nfp::{compute_nfp, Nfp, NfpPolygon};
pub use scale::ScaleContext;
pub use set::PolygonSet;
