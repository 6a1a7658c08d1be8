//! Error handling primitives shared across the crate.

use thiserror::Error;

/// Stable status codes that cross the FFI boundary.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DistCode {
    /// Success code used as a sentinel.
    Ok = 0,
    /// A required pointer argument was null.
    NullPointer = 1,
    /// The result does not fit the requested integer width.
    Overflow = 2,
    /// Environment configuration could not be parsed or applied.
    InvalidConfig = 3,
    /// Catch-all for bugs.
    Internal = 4,
}

impl DistCode {
    /// Map a raw code received from a foreign caller back to a known variant.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Ok),
            1 => Some(Self::NullPointer),
            2 => Some(Self::Overflow),
            3 => Some(Self::InvalidConfig),
            4 => Some(Self::Internal),
            _ => None,
        }
    }

    pub const fn raw(self) -> u32 {
        self as u32
    }
}

/// Canonical error type for the crate.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
#[error("{msg} ({code:?})")]
pub struct DistError {
    /// Machine parsable error code.
    pub code: DistCode,
    /// Developer facing message (kept `&'static str` so it can cross the boundary).
    pub msg: &'static str,
}

/// Result alias used throughout the crate.
pub type DistResult<T> = Result<T, DistError>;

impl DistError {
    pub const fn new(code: DistCode, msg: &'static str) -> Self {
        Self { code, msg }
    }

    pub const fn null_pointer(msg: &'static str) -> Self {
        Self::new(DistCode::NullPointer, msg)
    }

    pub const fn overflow(msg: &'static str) -> Self {
        Self::new(DistCode::Overflow, msg)
    }

    pub const fn invalid_config(msg: &'static str) -> Self {
        Self::new(DistCode::InvalidConfig, msg)
    }

    pub const fn internal(msg: &'static str) -> Self {
        Self::new(DistCode::Internal, msg)
    }
}
