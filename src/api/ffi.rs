//! C-compatible API.
//!
//! Points are passed by address and only read. Nothing allocated here is
//! handed to the caller, so there is no matching free function.

use std::ffi::CStr;
use std::os::raw::c_char;

use crate::common::error::{DistCode, DistError, DistResult};
use crate::common::log;
use crate::geometry::domain::Point;
use crate::geometry::service;

/// ABI version to coordinate with foreign callers.
pub const ABI_VERSION: u32 = 1;

/// Returned by [`point_distance`] when a pointer is null.
pub const DISTANCE_SENTINEL: i32 = -1;

#[no_mangle]
pub extern "C" fn pointdist_api_version() -> u32 {
    ABI_VERSION
}

/// Truncated distance between two points, as `int`.
///
/// Returns `-1` if either pointer is null. Distances above `INT_MAX` saturate.
///
/// # Safety
///
/// Non-null pointers must point to valid, aligned `Point` values for the
/// duration of the call.
#[no_mangle]
pub unsafe extern "C" fn point_distance(p1: *const Point, p2: *const Point) -> i32 {
    match unsafe { read_pair(p1, p2) } {
        Ok((p1, p2)) => service::distance(p1, p2),
        Err(_) => DISTANCE_SENTINEL,
    }
}

/// Truncated distance as `int`, reporting overflow instead of saturating.
///
/// `out` is written only when the returned code is `Ok`.
///
/// # Safety
///
/// Non-null pointers must be valid and aligned for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn pointdist_distance_checked(
    p1: *const Point,
    p2: *const Point,
    out: *mut i32,
) -> u32 {
    let result = unsafe { read_pair(p1, p2) }
        .and_then(|(p1, p2)| service::checked_distance(p1, p2));
    unsafe { write_out(result, out) }
}

/// Truncated distance as a 64-bit integer. Cannot overflow.
///
/// # Safety
///
/// Non-null pointers must be valid and aligned for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn pointdist_distance_wide(
    p1: *const Point,
    p2: *const Point,
    out: *mut i64,
) -> u32 {
    let result = unsafe { read_pair(p1, p2) }.map(|(p1, p2)| service::distance_wide(p1, p2));
    unsafe { write_out(result, out) }
}

/// Real-valued distance. Returns NaN if either pointer is null.
///
/// # Safety
///
/// Non-null pointers must be valid and aligned for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn pointdist_distance_f64(p1: *const Point, p2: *const Point) -> f64 {
    match unsafe { read_pair(p1, p2) } {
        Ok((p1, p2)) => service::distance_exact(p1, p2),
        Err(_) => f64::NAN,
    }
}

/// Static, NUL-terminated description of a status code. Must not be freed.
#[no_mangle]
pub extern "C" fn pointdist_code_message(code: u32) -> *const c_char {
    code_message(code).as_ptr()
}

/// Install the logging subscriber configured by `POINTDIST_LOG` and
/// `POINTDIST_LOG_FORMAT`. Safe to call repeatedly.
#[no_mangle]
pub extern "C" fn pointdist_init_logging() -> u32 {
    match log::init_from_env() {
        Ok(()) => DistCode::Ok.raw(),
        Err(err) => {
            eprintln!("pointdist: logging not initialised: {err}");
            err.code.raw()
        }
    }
}

pub fn code_message(code: u32) -> &'static CStr {
    match DistCode::from_raw(code) {
        Some(DistCode::Ok) => c"ok",
        Some(DistCode::NullPointer) => c"null pointer argument",
        Some(DistCode::Overflow) => c"result does not fit the requested integer width",
        Some(DistCode::InvalidConfig) => c"invalid configuration",
        Some(DistCode::Internal) => c"internal error",
        None => c"unknown status code",
    }
}

unsafe fn read_pair<'a>(
    p1: *const Point,
    p2: *const Point,
) -> DistResult<(&'a Point, &'a Point)> {
    match unsafe { (p1.as_ref(), p2.as_ref()) } {
        (Some(p1), Some(p2)) => Ok((p1, p2)),
        _ => {
            tracing::warn!(
                p1_null = p1.is_null(),
                p2_null = p2.is_null(),
                "null point argument"
            );
            Err(DistError::null_pointer("point argument is null"))
        }
    }
}

unsafe fn write_out<T>(result: DistResult<T>, out: *mut T) -> u32 {
    if out.is_null() {
        tracing::warn!("null output argument");
        return DistCode::NullPointer.raw();
    }
    match result {
        Ok(value) => {
            unsafe { out.write(value) };
            DistCode::Ok.raw()
        }
        Err(err) => err.code.raw(),
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    #[test]
    fn abi_version() {
        assert_eq!(pointdist_api_version(), 1);
    }

    #[test]
    fn distance_through_pointers() {
        let p1 = Point::new(0, 0);
        let p2 = Point::new(3, 4);
        assert_eq!(unsafe { point_distance(&p1, &p2) }, 5);
    }

    #[test]
    fn null_inputs_use_sentinels() {
        let p = Point::new(1, 1);
        assert_eq!(unsafe { point_distance(ptr::null(), &p) }, -1);
        assert_eq!(unsafe { point_distance(&p, ptr::null()) }, -1);
        assert!(unsafe { pointdist_distance_f64(ptr::null(), ptr::null()) }.is_nan());
    }

    #[test]
    fn out_untouched_on_error() {
        let lo = Point::new(i32::MIN, i32::MIN);
        let hi = Point::new(i32::MAX, i32::MAX);
        let mut out = 42i32;
        let code = unsafe { pointdist_distance_checked(&lo, &hi, &mut out) };
        assert_eq!(code, DistCode::Overflow.raw());
        assert_eq!(out, 42);

        let code = unsafe { pointdist_distance_checked(ptr::null(), &hi, &mut out) };
        assert_eq!(code, DistCode::NullPointer.raw());
        assert_eq!(out, 42);
    }

    #[test]
    fn null_out_is_reported() {
        let p = Point::new(1, 1);
        let code = unsafe { pointdist_distance_wide(&p, &p, ptr::null_mut()) };
        assert_eq!(code, DistCode::NullPointer.raw());
    }

    #[test]
    fn messages_cover_every_code() {
        for raw in 0..=4 {
            assert!(!code_message(raw).to_bytes().is_empty());
        }
        assert_eq!(code_message(1000).to_str().unwrap(), "unknown status code");
        assert!(!pointdist_code_message(2).is_null());
    }
}
