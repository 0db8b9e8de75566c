/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single decoded image
//!
//! An image is represented as
//!
//! - interleaved samples, row by row
//!     - of a certain bit depth (8 or 16 bits)
//!         - representing a colorspace
//!             - with a fixed width and height
//!
//! Every coordinate inside the image has a defined color, images are never sparse.
use std::fmt::{Debug, Formatter};

use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;

use crate::errors::ImageErrors;
use crate::pixel::Pixel;

/// Maximum supported color channels
pub const MAX_CHANNELS: usize = 4;

/// A rectangular grid of color samples
#[derive(Clone, PartialEq)]
pub struct PixelImage {
    width:      usize,
    height:     usize,
    colorspace: ColorSpace,
    depth:      BitDepth,
    data:       Vec<u8>
}

impl PixelImage {
    /// Create a new image with every sample set to zero
    ///
    /// # Errors
    /// - [`ZeroDimensions`](ImageErrors::ZeroDimensions) if width or height is zero
    /// - [`NotImplemented`](ImageErrors::NotImplemented) if depth is neither 8 nor 16 bits
    /// - [`GenericString`](ImageErrors::GenericString) if the colorspace has more than
    ///   [`MAX_CHANNELS`] components
    pub fn new(
        width: usize, height: usize, colorspace: ColorSpace, depth: BitDepth
    ) -> Result<PixelImage, ImageErrors> {
        let length = expected_length(width, height, colorspace, depth)?;

        Ok(PixelImage {
            width,
            height,
            colorspace,
            depth,
            data: vec![0; length]
        })
    }

    /// Create a zeroed image sharing this image's dimensions,
    /// colorspace and depth
    pub fn blank_like(&self) -> PixelImage {
        PixelImage {
            width:      self.width,
            height:     self.height,
            colorspace: self.colorspace,
            depth:      self.depth,
            data:       vec![0; self.data.len()]
        }
    }

    /// Create a new image from raw 8 bit pixels
    ///
    /// Pixels are expected to be interleaved according to the colorspace
    /// I.e if the image is RGB, pixel layout should be `[R,G,B,R,G,B]`
    ///
    /// # Errors
    /// Same as [`new`](Self::new), and [`DimensionsMisMatch`](ImageErrors::DimensionsMisMatch)
    /// if the length of `pixels` doesn't match the dimensions
    pub fn from_u8(
        pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<PixelImage, ImageErrors> {
        let expected = expected_length(width, height, colorspace, BitDepth::Eight)?;

        if pixels.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }
        Ok(PixelImage {
            width,
            height,
            colorspace,
            depth: BitDepth::Eight,
            data: pixels.to_vec()
        })
    }

    /// Create an image from raw 16 bit pixels
    ///
    /// Pixels are expected to be interleaved according to number of components in the colorspace
    ///
    /// # Errors
    /// Same as [`from_u8`](Self::from_u8)
    pub fn from_u16(
        pixels: &[u16], width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<PixelImage, ImageErrors> {
        let expected = expected_length(width, height, colorspace, BitDepth::Sixteen)?;
        let bytes: &[u8] = bytemuck::cast_slice(pixels);

        if bytes.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected / 2, pixels.len()));
        }
        Ok(PixelImage {
            width,
            height,
            colorspace,
            depth: BitDepth::Sixteen,
            data: bytes.to_vec()
        })
    }

    /// Create an image with a static color in it
    ///
    /// # Errors
    /// Same as [`new`](Self::new), and [`DimensionsMisMatch`](ImageErrors::DimensionsMisMatch)
    /// if the pixel size doesn't match the colorspace and depth
    pub fn fill(
        pixel: Pixel, width: usize, height: usize, colorspace: ColorSpace, depth: BitDepth
    ) -> Result<PixelImage, ImageErrors> {
        let mut image = PixelImage::new(width, height, colorspace, depth)?;
        let bpp = image.bytes_per_pixel();

        if pixel.len() != bpp {
            return Err(ImageErrors::DimensionsMisMatch(bpp, pixel.len()));
        }
        for chunk in image.data.chunks_exact_mut(bpp) {
            chunk.copy_from_slice(pixel.as_bytes());
        }
        Ok(image)
    }

    /// Create an 8 bit image from a function
    ///
    /// The function receives the x and y coordinate and returns
    /// an array with [`MAX_CHANNELS`] elements, elements past the
    /// number of components in the colorspace are ignored.
    ///
    /// ```
    /// use zune_core::colorspace::ColorSpace;
    /// use pixflip_image::image::{PixelImage, MAX_CHANNELS};
    ///
    /// fn gradient(x: usize, y: usize) -> [u8; MAX_CHANNELS] {
    ///     [((x + y) % 256) as u8, 0, 0, 0]
    /// }
    /// let image = PixelImage::from_fn(30, 20, ColorSpace::Luma, gradient).unwrap();
    /// assert_eq!(image.dimensions(), (30, 20));
    /// ```
    ///
    /// # Errors
    /// Same as [`new`](Self::new)
    pub fn from_fn<F>(
        width: usize, height: usize, colorspace: ColorSpace, func: F
    ) -> Result<PixelImage, ImageErrors>
    where
        F: Fn(usize, usize) -> [u8; MAX_CHANNELS]
    {
        let mut image = PixelImage::new(width, height, colorspace, BitDepth::Eight)?;
        let components = colorspace.num_components();

        for (i, chunk) in image.data.chunks_exact_mut(components).enumerate() {
            let value = (func)(i % width, i / width);
            chunk.copy_from_slice(&value[..components]);
        }
        Ok(image)
    }
}

impl PixelImage {
    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the colorspace this image is stored in
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Get the image depth of this image
    pub const fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Number of bytes a single pixel occupies
    pub fn bytes_per_pixel(&self) -> usize {
        self.colorspace.num_components() * self.depth.size_of()
    }

    /// Return the raw interleaved samples
    ///
    /// 16 bit samples are in native endian order
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Return the samples of a 16 bit image as `u16` values
    ///
    /// For 8 bit images every sample is widened.
    pub fn to_u16(&self) -> Vec<u16> {
        match self.depth {
            BitDepth::Sixteen => self
                .data
                .chunks_exact(2)
                .map(|x| u16::from_ne_bytes([x[0], x[1]]))
                .collect(),
            _ => self.data.iter().map(|x| u16::from(*x)).collect()
        }
    }

    /// Return the color at `(x, y)`
    ///
    /// # Panics
    /// If the coordinate lies outside the image
    pub fn at(&self, x: usize, y: usize) -> Pixel {
        assert!(
            x < self.width && y < self.height,
            "Coordinate ({x},{y}) outside of a {}x{} image",
            self.width,
            self.height
        );
        let (start, end) = self.offsets(x, y);
        Pixel::from_bytes(&self.data[start..end])
    }

    /// Return the color at `(x, y)` or `None` if the coordinate
    /// lies outside the image
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x < self.width && y < self.height {
            let (start, end) = self.offsets(x, y);
            return Some(Pixel::from_bytes(&self.data[start..end]));
        }
        None
    }

    /// Write the color at `(x, y)`
    ///
    /// # Panics
    /// - If the coordinate lies outside the image
    /// - If the pixel size doesn't match the image's pixel size
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) {
        assert!(
            x < self.width && y < self.height,
            "Coordinate ({x},{y}) outside of a {}x{} image",
            self.width,
            self.height
        );
        let (start, end) = self.offsets(x, y);
        self.data[start..end].copy_from_slice(pixel.as_bytes());
    }

    fn offsets(&self, x: usize, y: usize) -> (usize, usize) {
        let bpp = self.bytes_per_pixel();
        let start = (y * self.width + x) * bpp;

        (start, start + bpp)
    }
}

impl Debug for PixelImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("colorspace", &self.colorspace)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

fn expected_length(
    width: usize, height: usize, colorspace: ColorSpace, depth: BitDepth
) -> Result<usize, ImageErrors> {
    if width == 0 || height == 0 {
        return Err(ImageErrors::ZeroDimensions(width, height));
    }
    if !matches!(depth, BitDepth::Eight | BitDepth::Sixteen) {
        return Err(ImageErrors::NotImplemented("PixelImage", depth));
    }
    let components = colorspace.num_components();

    if components == 0 || components > MAX_CHANNELS {
        return Err(ImageErrors::GenericString(format!(
            "Colorspace {colorspace:?} with {components} components is not supported"
        )));
    }
    width
        .checked_mul(height)
        .and_then(|x| x.checked_mul(components))
        .and_then(|x| x.checked_mul(depth.size_of()))
        .ok_or(ImageErrors::GenericStr(
            "Image dimensions overflow the addressable size"
        ))
}
