/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits shared by image operations
use log::trace;
use zune_core::bit_depth::BitDepth;

use crate::errors::ImageErrors;
use crate::image::PixelImage;

/// An operation that builds a new image from an existing one
///
/// Operations never modify their input, the caller decides whether
/// to replace its image with the result.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Run the operation on an image that is known to be present
    ///
    /// Implementors should not call this directly, call [`execute`](Self::execute)
    /// which validates the input first.
    ///
    /// # Errors
    /// Any operations error will be propagated to the caller
    fn execute_impl(&self, image: &PixelImage) -> Result<PixelImage, ImageErrors>;

    /// Bit depths this operation understands
    fn supported_depths(&self) -> &'static [BitDepth] {
        &[BitDepth::Eight, BitDepth::Sixteen]
    }

    /// Run the operation
    ///
    /// # Errors
    /// - [`NoImageLoaded`](ImageErrors::NoImageLoaded) if `image` is `None`
    /// - [`NotImplemented`](ImageErrors::NotImplemented) if the image depth is not
    ///   in [`supported_depths`](Self::supported_depths)
    /// - whatever [`execute_impl`](Self::execute_impl) returns
    ///
    /// # Example
    /// ```
    /// use zune_core::colorspace::ColorSpace;
    /// use pixflip_image::image::PixelImage;
    /// use pixflip_image::ops::flip::{Flip, FlipDirection};
    /// use pixflip_image::traits::OperationsTrait;
    ///
    /// let image = PixelImage::from_fn(4, 4, ColorSpace::RGB, |x, y| [x as u8, y as u8, 0, 0]).unwrap();
    /// let flipped = Flip::new(FlipDirection::Vertical).execute(Some(&image)).unwrap();
    /// assert_eq!(flipped.at(0, 0), image.at(0, 3));
    /// ```
    fn execute(&self, image: Option<&PixelImage>) -> Result<PixelImage, ImageErrors> {
        let image = image.ok_or(ImageErrors::NoImageLoaded)?;

        if !self.supported_depths().contains(&image.depth()) {
            return Err(ImageErrors::NotImplemented(self.name(), image.depth()));
        }
        trace!("Running {} on {:?}", self.name(), image);

        self.execute_impl(image)
    }
}
