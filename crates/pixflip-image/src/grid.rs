/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Random access pixel grid
//!
//! A grid is the image reshaped into columns, so that `grid[x][y]` is the
//! pixel at column `x` and row `y`. Nothing is resampled or converted.
use std::ops::Index;

use crate::image::PixelImage;
use crate::pixel::Pixel;

/// An image as a sequence of columns, each a sequence of pixels
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PixelGrid {
    columns: Vec<Vec<Pixel>>
}

impl PixelGrid {
    /// Extract every pixel of `image`, column by column
    pub fn extract(image: &PixelImage) -> PixelGrid {
        let (width, height) = image.dimensions();

        let columns = (0..width)
            .map(|x| (0..height).map(|y| image.at(x, y)).collect())
            .collect();

        PixelGrid { columns }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn columns(&self) -> &[Vec<Pixel>] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Vec<Pixel>> {
        self.columns
    }
}

impl Index<usize> for PixelGrid {
    type Output = [Pixel];

    fn index(&self, x: usize) -> &Self::Output {
        &self.columns[x]
    }
}
