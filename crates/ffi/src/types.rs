//! C ABI type definitions.
//!
//! The result of an NFP computation crosses the boundary as a three-level
//! owned tree of plain aggregates: result → polygons → (points, holes →
//! points). The caller owns the tree exclusively and releases it with
//! exactly one `nfp_free_result` call.

use std::os::raw::c_int;

/// A point with x and y coordinates, in input coordinate space.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct NfpPoint {
    pub x: f64,
    pub y: f64,
}

/// A hole boundary: an owned points array.
#[repr(C)]
#[derive(Debug)]
pub struct NfpHole {
    /// Owned vertex array; null when `num_points` is 0.
    pub points: *mut NfpPoint,
    pub num_points: c_int,
}

/// One NFP polygon: an owned outer boundary plus an owned hole list.
#[repr(C)]
#[derive(Debug)]
pub struct NfpPolygon {
    /// Owned outer-boundary vertex array; null when `num_points` is 0.
    pub points: *mut NfpPoint,
    pub num_points: c_int,
    /// Owned hole array; null when `num_holes` is 0.
    pub holes: *mut NfpHole,
    pub num_holes: c_int,
}

/// An NFP computation result: an owned polygon list.
#[repr(C)]
#[derive(Debug)]
pub struct NfpResult {
    /// Owned polygon array; null when `num_polygons` is 0.
    pub polygons: *mut NfpPolygon,
    pub num_polygons: c_int,
}
