//! Validation utilities for decoders

use super::{Error, Result};

/// Validate an exact encoding length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::MalformedEncoding {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a decoded value is in canonical form
#[inline(always)]
pub fn canonical(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::NonCanonicalEncoding { context, reason });
    }
    Ok(())
}

/// Validate the curve equation
#[inline(always)]
pub fn on_curve(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::NotOnCurve { context });
    }
    Ok(())
}

/// Validate prime-order subgroup membership of a curve point
#[inline(always)]
pub fn subgroup(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::NotInSubgroup { context });
    }
    Ok(())
}

/// Validate target-group membership
#[inline(always)]
pub fn element(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidElement { context });
    }
    Ok(())
}
