/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image metadata
//!
//! A snapshot of what is known about a loaded image, used for
//! reporting, it is never written back into files.
use std::path::{Path, PathBuf};

use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;

use crate::codecs::ImageFormat;
use crate::image::PixelImage;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageMetadata {
    // REMEMBER: If you add a field here add it's serialization
    // to serde.rs
    pub(crate) path:       Option<PathBuf>,
    pub(crate) width:      usize,
    pub(crate) height:     usize,
    pub(crate) colorspace: ColorSpace,
    pub(crate) depth:      BitDepth,
    pub(crate) format:     Option<ImageFormat>
}

impl ImageMetadata {
    pub fn new(image: &PixelImage, format: Option<ImageFormat>, path: Option<&Path>) -> ImageMetadata {
        let (width, height) = image.dimensions();

        ImageMetadata {
            path: path.map(Path::to_path_buf),
            width,
            height,
            colorspace: image.colorspace(),
            depth: image.depth(),
            format
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    pub const fn depth(&self) -> BitDepth {
        self.depth
    }

    pub const fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// Resolution formatted as `WIDTHxHEIGHT`
    pub fn resolution(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}
