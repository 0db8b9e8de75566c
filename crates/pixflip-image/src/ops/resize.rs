/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Resize validation
//!
//! Only the factor is checked, resampling is not performed and a valid
//! resize leaves the image as it is.
use crate::errors::ImageErrors;

/// Smallest accepted factor is anything above this
pub const MIN_FACTOR: f64 = 0.10;

/// Scale an image by a factor, e.g 0.5x or 2x
#[derive(Copy, Clone, Debug)]
pub struct Resize {
    factor: f64
}

impl Resize {
    /// Create a resize operation, validating `factor`
    ///
    /// # Errors
    /// [`InvalidModifier`](ImageErrors::InvalidModifier) if the factor is at most
    /// [`MIN_FACTOR`] or lies strictly between 1.00 and 1.01
    pub fn new(factor: f64) -> Result<Resize, ImageErrors> {
        if factor <= MIN_FACTOR || (factor > 1.00 && factor < 1.01) {
            return Err(ImageErrors::InvalidModifier(factor));
        }
        Ok(Resize { factor })
    }

    pub const fn factor(&self) -> f64 {
        self.factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_and_near_identity_factors_are_rejected() {
        for factor in [0.05, 0.1, 0.0, -2.0, 1.005, 1.0099, f64::NEG_INFINITY] {
            assert!(
                matches!(Resize::new(factor), Err(ImageErrors::InvalidModifier(_))),
                "{factor} should be rejected"
            );
        }
    }

    #[test]
    fn usual_factors_are_accepted() {
        for factor in [0.11, 0.5, 1.0, 1.01, 2.0, 4.0] {
            assert_eq!(Resize::new(factor).unwrap().factor(), factor);
        }
    }

    #[test]
    fn only_the_two_ranges_are_rejected() {
        // comparisons with NaN are false and infinity is above both ranges
        assert!(Resize::new(f64::INFINITY).is_ok());
        assert!(Resize::new(f64::NAN).is_ok());
        assert!(Resize::new(f64::MAX).is_ok());
    }
}
