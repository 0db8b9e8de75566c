/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Mirror an image on both axes, the same as rotating it by 180 degrees.
use crate::errors::ImageErrors;
use crate::image::PixelImage;
use crate::ops::flip::{Flip, FlipDirection};
use crate::traits::OperationsTrait;

/// Flip an image vertically, then horizontally
///
/// ```text
///
///old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │j i h g f │
/// │f g h i j│   │e d c b a │
/// └─────────┘   └──────────┘
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Mirror;

impl Mirror {
    /// Create a new mirror operation
    #[must_use]
    pub fn new() -> Mirror {
        Mirror
    }
}

impl OperationsTrait for Mirror {
    fn name(&self) -> &'static str {
        "Mirror"
    }

    fn execute_impl(&self, image: &PixelImage) -> Result<PixelImage, ImageErrors> {
        // a failing stage stops the composition, its error is returned as is
        let flipped = Flip::new(FlipDirection::Vertical).execute(Some(image))?;

        Flip::new(FlipDirection::Horizontal).execute(Some(&flipped))
    }
}

#[cfg(test)]
mod tests {
    use zune_core::colorspace::ColorSpace;

    use super::*;

    #[test]
    fn mirror_rotates_by_half_a_turn() {
        let image = PixelImage::from_fn(5, 3, ColorSpace::RGB, |x, y| {
            [x as u8, y as u8, (x + y) as u8, 0]
        })
        .unwrap();
        let mirrored = Mirror::new().execute(Some(&image)).unwrap();

        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(mirrored.at(x, y), image.at(4 - x, 2 - y));
            }
        }
    }

    #[test]
    fn mirror_without_image_fails() {
        assert!(matches!(
            Mirror::new().execute(None),
            Err(ImageErrors::NoImageLoaded)
        ));
    }
}
