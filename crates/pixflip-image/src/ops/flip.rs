/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Flip filter: reflect an image around one of its midlines.
//!
//! Both directions read from a [`PixelGrid`] of the source and write into a
//! freshly allocated image, so the source is never modified while it is read.
use crate::errors::ImageErrors;
use crate::grid::PixelGrid;
use crate::image::PixelImage;
use crate::traits::OperationsTrait;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FlipDirection {
    /// Reflect the rows around the horizontal midline,
    /// row `y` trades places with row `height - 1 - y`
    ///
    /// ```text
    ///
    ///old image     new image
    /// ┌─────────┐   ┌──────────┐
    /// │a b c d e│   │f g h i j │
    /// │f g h i j│   │a b c d e │
    /// └─────────┘   └──────────┘
    /// ```
    Vertical,
    /// Reflect the columns around the vertical midline,
    /// column `x` trades places with column `width - 1 - x`
    ///
    ///```text
    ///old image     new image
    ///┌─────────┐   ┌──────────┐
    ///│a b c d e│   │e d c b a │
    ///│f g h i j│   │j i h g f │
    ///└─────────┘   └──────────┘
    ///```
    Horizontal
}

/// Flip an image to a certain direction
#[derive(Copy, Clone, Debug)]
pub struct Flip {
    direction: FlipDirection
}

impl Flip {
    /// Create a new flip operation
    #[must_use]
    pub fn new(direction: FlipDirection) -> Flip {
        Self { direction }
    }

    pub const fn direction(&self) -> FlipDirection {
        self.direction
    }
}

impl OperationsTrait for Flip {
    fn name(&self) -> &'static str {
        match self.direction {
            FlipDirection::Vertical => "Vertical flip",
            FlipDirection::Horizontal => "Horizontal flip"
        }
    }

    fn execute_impl(&self, image: &PixelImage) -> Result<PixelImage, ImageErrors> {
        match self.direction {
            FlipDirection::Vertical => Ok(vertical_flip(image)),
            FlipDirection::Horizontal => Ok(horizontal_flip(image))
        }
    }
}

/// Return a copy of `image` with its rows in reverse order
///
/// Only rows up to and including `height / 2` are visited, each visit writes
/// both the row and its partner. For even heights this writes the two middle
/// rows twice with the same values, for odd heights the centre row is its own
/// partner and keeps its pixels.
pub fn vertical_flip(image: &PixelImage) -> PixelImage {
    let pixels = PixelGrid::extract(image);
    let mut output = image.blank_like();

    let height = image.height();

    for (x, column) in pixels.columns().iter().enumerate() {
        for (y, pixel) in column.iter().enumerate() {
            if y > height / 2 {
                continue;
            }
            let inverse = height - y - 1;

            output.set(x, y, pixels[x][inverse]);
            output.set(x, inverse, *pixel);
        }
    }
    output
}

/// Return a copy of `image` with its columns in reverse order
///
/// Mirrors [`vertical_flip`] with the roles of x and y swapped.
pub fn horizontal_flip(image: &PixelImage) -> PixelImage {
    let pixels = PixelGrid::extract(image);
    let mut output = image.blank_like();

    let width = image.width();

    for (x, column) in pixels.columns().iter().enumerate() {
        if x > width / 2 {
            continue;
        }
        let inverse = width - x - 1;

        for (y, pixel) in column.iter().enumerate() {
            output.set(x, y, pixels[inverse][y]);
            output.set(inverse, y, *pixel);
        }
    }
    output
}
