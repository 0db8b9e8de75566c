/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An image tracked from load to save
//!
//! [`TrackedImage`] remembers where an image came from and how it was encoded,
//! so it can be transformed and written back without the caller repeating
//! either. Each transform produces a new [`PixelImage`] which replaces the held
//! one only when the transform succeeds.
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;

use crate::codecs::{ImageCodec, ImageFormat, ZuneCodec};
use crate::errors::ImageErrors;
use crate::grid::PixelGrid;
use crate::image::PixelImage;
use crate::metadata::ImageMetadata;
use crate::ops::flip::{Flip, FlipDirection};
use crate::ops::mirror::Mirror;
use crate::ops::resize::Resize;
use crate::store::{DiskStore, FileStore};
use crate::traits::OperationsTrait;

/// Image session state
///
/// # Example
/// ```no_run
/// use pixflip_image::tracked::TrackedImage;
///
/// let mut image = TrackedImage::new();
/// image.load("ss.png").unwrap();
/// image.flip_vertical().unwrap();
/// // overwrite ss.png
/// image.save(None).unwrap();
/// ```
pub struct TrackedImage<C: ImageCodec = ZuneCodec, S: FileStore = DiskStore> {
    codec:       C,
    store:       S,
    source_path: Option<PathBuf>,
    format:      Option<ImageFormat>,
    image:       Option<PixelImage>,
    options:     EncoderOptions
}

impl TrackedImage {
    /// Create an empty image using the zune codecs and the local file system
    pub fn new() -> TrackedImage {
        TrackedImage::with_backends(ZuneCodec::new(), DiskStore::new())
    }
}

impl Default for TrackedImage {
    fn default() -> Self {
        TrackedImage::new()
    }
}

impl<C: ImageCodec, S: FileStore> TrackedImage<C, S> {
    /// Create an empty image with a custom codec and store
    pub fn with_backends(codec: C, store: S) -> TrackedImage<C, S> {
        TrackedImage {
            codec,
            store,
            source_path: None,
            format: None,
            image: None,
            options: EncoderOptions::default()
        }
    }

    /// Read and decode the image at `path`
    ///
    /// On success the path, format and pixels are replaced together,
    /// on failure the previous state is kept.
    ///
    /// # Errors
    /// Any store or decoding error, unchanged
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ImageErrors> {
        let path = path.as_ref();

        let bytes = self.store.read(path)?;

        let start = Instant::now();
        let (image, format) = self.codec.decode(&bytes)?;
        debug!("Decoding took {} ms", start.elapsed().as_millis());

        info!(
            "Loaded {:?} as {:?}, {}x{}",
            path,
            format,
            image.width(),
            image.height()
        );
        self.source_path = Some(path.to_path_buf());
        self.format = Some(format);
        self.image = Some(image);

        Ok(())
    }

    /// Encode the image and write it to `path`, or to the path it was
    /// loaded from when `path` is `None`
    ///
    /// # Errors
    /// - [`UnsupportedFormat`](ImageErrors::UnsupportedFormat) if the format can't be
    ///   encoded, the store is not touched in that case
    /// - [`NoImageLoaded`](ImageErrors::NoImageLoaded) if nothing was loaded
    /// - any encoding or store error, unchanged
    pub fn save(&self, path: Option<&Path>) -> Result<(), ImageErrors> {
        let format = self.format.ok_or(ImageErrors::NoImageLoaded)?;

        if !format.has_encoder() {
            return Err(ImageErrors::UnsupportedFormat(format));
        }
        let image = self.image.as_ref().ok_or(ImageErrors::NoImageLoaded)?;

        let path = match path {
            Some(path) => path,
            None => self
                .source_path
                .as_deref()
                .ok_or(ImageErrors::NoImageLoaded)?
        };
        let bytes = self.codec.encode(image, format, self.options)?;

        self.store.write(path, &bytes)?;
        info!("Saved {:?} as {:?}, {} bytes", path, format, bytes.len());

        Ok(())
    }

    /// Run an operation and keep its output
    ///
    /// # Errors
    /// Whatever the operation returns, the held image is left as is
    pub fn apply(&mut self, operation: &dyn OperationsTrait) -> Result<(), ImageErrors> {
        let start = Instant::now();
        let output = operation.execute(self.image.as_ref())?;

        debug!(
            "Finished {} in {} ms",
            operation.name(),
            start.elapsed().as_millis()
        );
        self.image = Some(output);

        Ok(())
    }

    /// Reflect rows around the horizontal midline
    ///
    /// # Errors
    /// [`NoImageLoaded`](ImageErrors::NoImageLoaded) if nothing was loaded
    pub fn flip_vertical(&mut self) -> Result<(), ImageErrors> {
        self.apply(&Flip::new(FlipDirection::Vertical))
    }

    /// Reflect columns around the vertical midline
    ///
    /// # Errors
    /// [`NoImageLoaded`](ImageErrors::NoImageLoaded) if nothing was loaded
    pub fn flip_horizontal(&mut self) -> Result<(), ImageErrors> {
        self.apply(&Flip::new(FlipDirection::Horizontal))
    }

    /// Flip both ways, rotating the image by 180 degrees
    ///
    /// # Errors
    /// The error of the first flip that fails
    pub fn mirror(&mut self) -> Result<(), ImageErrors> {
        self.apply(&Mirror::new())
    }

    /// Resize by `factor`
    ///
    /// The factor is validated but the image is not resampled.
    ///
    /// # Errors
    /// [`InvalidModifier`](ImageErrors::InvalidModifier) for factors of 0.10 and below
    /// and for factors strictly between 1.00 and 1.01
    pub fn resize(&mut self, factor: f64) -> Result<(), ImageErrors> {
        let resize = Resize::new(factor)?;

        debug!("Resize by {}x accepted, resampling is not performed", resize.factor());
        Ok(())
    }

    /// Extract the pixel grid, `None` if nothing is loaded
    pub fn pixels(&self) -> Option<PixelGrid> {
        self.image.as_ref().map(PixelGrid::extract)
    }

    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&PixelImage> {
        self.image.as_ref()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub const fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// Change the format used by the next [`save`](Self::save)
    pub fn set_format(&mut self, format: ImageFormat) {
        self.format = Some(format);
    }

    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.image.as_ref().map(PixelImage::dimensions)
    }

    pub fn colorspace(&self) -> Option<ColorSpace> {
        self.image.as_ref().map(PixelImage::colorspace)
    }

    pub fn depth(&self) -> Option<BitDepth> {
        self.image.as_ref().map(PixelImage::depth)
    }

    /// Metadata of the held image, `None` if nothing is loaded
    pub fn metadata(&self) -> Option<ImageMetadata> {
        self.image
            .as_ref()
            .map(|x| ImageMetadata::new(x, self.format, self.source_path.as_deref()))
    }

    pub const fn encoder_options(&self) -> EncoderOptions {
        self.options
    }

    /// Options passed to the encoder on save, e.g jpeg quality
    pub fn set_encoder_options(&mut self, options: EncoderOptions) {
        self.options = options;
    }
}
