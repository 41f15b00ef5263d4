//! C FFI API functions.

use crate::types::{NfpHole, NfpPoint, NfpPolygon, NfpResult};
use std::os::raw::{c_char, c_int};
use std::ptr;

use nfp_core::{compute_nfp, Nfp, Polygon};

/// Computes the No-Fit Polygon of a stationary polygon A and an orbiting
/// polygon B.
///
/// Each boundary is an array of points; holes are passed as an array of
/// point-array pointers with a parallel length array. Returns an owned
/// result tree on success, or null on invalid input (null mandatory
/// pointer, outer boundary shorter than 3 vertices, inconsistent hole
/// arguments) without allocating.
///
/// The caller owns the returned tree exclusively and must release it with
/// exactly one `nfp_free_result` call.
///
/// # Safety
/// - `a_points`/`b_points` must point to `a_len`/`b_len` readable points
/// - `a_holes`/`b_holes`, when non-null, must point to `a_num_holes`/
///   `b_num_holes` pointers, each readable for the matching entry of
///   `a_hole_lens`/`b_hole_lens`
#[no_mangle]
pub unsafe extern "C" fn nfp_compute(
    a_points: *const NfpPoint,
    a_len: c_int,
    a_holes: *const *const NfpPoint,
    a_hole_lens: *const c_int,
    a_num_holes: c_int,
    b_points: *const NfpPoint,
    b_len: c_int,
    b_holes: *const *const NfpPoint,
    b_hole_lens: *const c_int,
    b_num_holes: c_int,
) -> *mut NfpResult {
    let a = match read_polygon(a_points, a_len, a_holes, a_hole_lens, a_num_holes) {
        Some(polygon) => polygon,
        None => return ptr::null_mut(),
    };
    let b = match read_polygon(b_points, b_len, b_holes, b_hole_lens, b_num_holes) {
        Some(polygon) => polygon,
        None => return ptr::null_mut(),
    };

    let nfp = match compute_nfp(&a, &b) {
        Ok(nfp) => nfp,
        Err(_) => return ptr::null_mut(),
    };

    export_result(&nfp)
}

/// Releases a result tree returned by `nfp_compute`.
///
/// Frees recursively, leaf to root: hole points, hole arrays, polygon
/// points, the polygon array, then the result itself. Safe to call with
/// null; must be called exactly once per non-null result.
///
/// # Safety
/// - `result` must be null or a pointer returned by `nfp_compute` that
///   has not been freed yet
#[no_mangle]
pub unsafe extern "C" fn nfp_free_result(result: *mut NfpResult) {
    if result.is_null() {
        return;
    }
    let result = Box::from_raw(result);

    if !result.polygons.is_null() && result.num_polygons > 0 {
        let polygons = reclaim_slice(result.polygons, result.num_polygons);
        for polygon in polygons.iter() {
            if !polygon.holes.is_null() && polygon.num_holes > 0 {
                let holes = reclaim_slice(polygon.holes, polygon.num_holes);
                for hole in holes.iter() {
                    free_points(hole.points, hole.num_points);
                }
                drop(holes);
            }
            free_points(polygon.points, polygon.num_points);
        }
        drop(polygons);
    }
}

/// Returns the library version from Cargo.toml.
///
/// # Safety
/// - The returned string is statically allocated and must not be freed
#[no_mangle]
pub extern "C" fn nfp_version() -> *const c_char {
    // Use version from Cargo.toml at compile time
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

// Internal marshalling helpers

/// Reads one polygon argument group. Returns None on any inconsistency so
/// the caller can reject the call before allocating anything.
unsafe fn read_polygon(
    points: *const NfpPoint,
    len: c_int,
    holes: *const *const NfpPoint,
    hole_lens: *const c_int,
    num_holes: c_int,
) -> Option<Polygon> {
    if points.is_null() || len < 3 || num_holes < 0 {
        return None;
    }
    if num_holes > 0 && (holes.is_null() || hole_lens.is_null()) {
        return None;
    }

    let outer = std::slice::from_raw_parts(points, len as usize)
        .iter()
        .map(|p| (p.x, p.y))
        .collect();
    let mut polygon = Polygon::new(outer);

    for i in 0..num_holes as usize {
        let hole_points = *holes.add(i);
        let hole_len = *hole_lens.add(i);
        if hole_points.is_null() || hole_len < 0 {
            return None;
        }
        let hole = std::slice::from_raw_parts(hole_points, hole_len as usize)
            .iter()
            .map(|p| (p.x, p.y))
            .collect();
        polygon = polygon.with_hole(hole);
    }

    Some(polygon)
}

/// Converts a computed NFP into the owned C tree.
///
/// The safe `Nfp` is fully built before any raw allocation happens, and
/// the conversion itself cannot fail partway, so the caller either gets a
/// complete tree or (on invalid input, earlier) no tree at all.
fn export_result(nfp: &Nfp) -> *mut NfpResult {
    let polygons: Vec<NfpPolygon> = nfp
        .polygons
        .iter()
        .map(|polygon| {
            let (points, num_points) = leak_points(&polygon.outer);
            let holes: Vec<NfpHole> = polygon
                .holes
                .iter()
                .map(|hole| {
                    let (points, num_points) = leak_points(hole);
                    NfpHole { points, num_points }
                })
                .collect();
            let (holes, num_holes) = leak_slice(holes);
            NfpPolygon {
                points,
                num_points,
                holes,
                num_holes,
            }
        })
        .collect();

    let (polygons, num_polygons) = leak_slice(polygons);
    Box::into_raw(Box::new(NfpResult {
        polygons,
        num_polygons,
    }))
}

fn leak_points(points: &[(f64, f64)]) -> (*mut NfpPoint, c_int) {
    let converted: Vec<NfpPoint> = points.iter().map(|&(x, y)| NfpPoint { x, y }).collect();
    leak_slice(converted)
}

fn leak_slice<T>(items: Vec<T>) -> (*mut T, c_int) {
    if items.is_empty() {
        return (ptr::null_mut(), 0);
    }
    let len = items.len() as c_int;
    (Box::into_raw(items.into_boxed_slice()) as *mut T, len)
}

unsafe fn reclaim_slice<T>(data: *mut T, len: c_int) -> Box<[T]> {
    Box::from_raw(ptr::slice_from_raw_parts_mut(data, len as usize))
}

unsafe fn free_points(data: *mut NfpPoint, len: c_int) {
    if !data.is_null() && len > 0 {
        drop(reclaim_slice(data, len));
    }
}
