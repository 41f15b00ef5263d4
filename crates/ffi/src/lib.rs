//! # nfp-ffi
//!
//! C FFI interface for convolution-based No-Fit Polygon computation.
//!
//! This crate exposes [`nfp_compute`] and its paired release operation
//! [`nfp_free_result`] for use from other languages. Input crosses the
//! boundary as flat point/length buffers; the result comes back as an
//! owned tree of plain C aggregates.
//!
//! ## Functions
//!
//! - [`nfp_compute`] - Computes the NFP of a stationary and an orbiting
//!   polygon, both optionally holed
//! - [`nfp_free_result`] - Releases a result tree, exactly once
//! - [`nfp_version`] - Returns the library version
//!
//! ## Ownership contract
//!
//! `nfp_compute` returns either a complete, exclusively caller-owned tree
//! or null, never a partially built one. Null is returned for invalid
//! input (null mandatory pointer, outer boundary shorter than 3 vertices,
//! inconsistent hole arguments) without allocating. `nfp_free_result`
//! frees the entire tree leaf-to-root, is a safe no-op on null, and must
//! be called exactly once per non-null result.
//!
//! The binding layer that marshals host-language objects into the point
//! buffers is expected to validate argument presence before calling in,
//! and to call `nfp_free_result` exactly once after extracting the
//! values it needs.
//!
//! ## C Example
//!
//! ```c
//! #include "nfp.h"
//!
//! struct NfpPoint a[] = {{0, 0}, {10, 0}, {10, 10}, {0, 10}};
//! struct NfpPoint b[] = {{0, 0}, {2, 0}, {2, 2}, {0, 2}};
//!
//! struct NfpResult *result =
//!     nfp_compute(a, 4, NULL, NULL, 0, b, 4, NULL, NULL, 0);
//! if (result != NULL) {
//!     for (int i = 0; i < result->num_polygons; i++) {
//!         /* result->polygons[i].points, .holes ... */
//!     }
//!     nfp_free_result(result);
//! }
//! ```

mod api;
mod types;

pub use api::*;
pub use types::*;
