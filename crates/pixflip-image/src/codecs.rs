/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for all supported codecs the library understands
//!
//! Decoding and encoding of container bytes is delegated to the zune family
//! of decoders and to `jpeg-encoder`, this module only picks the right one.
//!
//! The codecs here can be enabled and disabled at will through cargo features,
//! a format whose feature is disabled reports an error instead of decoding.
//!
//! | Format | Decoder     | Encoder        |
//! |--------|-------------|----------------|
//! | PNG    | zune-png    | zune-png       |
//! | JPEG   | zune-jpeg   | jpeg-encoder   |
//! | BMP    | zune-bmp    | -              |
#![allow(unused_variables)]

use std::path::Path;

use log::{debug, trace};
use zune_core::options::EncoderOptions;

use crate::errors::ImageErrors;
use crate::image::PixelImage;

pub mod bmp;
pub mod jpeg;
pub mod png;

/// All supported image formats
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ImageFormat {
    /// Portable Network Graphics
    PNG,
    /// Joint Photographic Experts Group
    JPEG,
    /// Windows Bitmap Files, decode only
    BMP
}

impl ImageFormat {
    /// All formats, in detection order
    pub const ALL: [ImageFormat; 3] = [ImageFormat::PNG, ImageFormat::JPEG, ImageFormat::BMP];

    /// Return true if images can be saved in this format
    pub const fn has_encoder(self) -> bool {
        matches!(self, ImageFormat::PNG | ImageFormat::JPEG)
    }

    /// Guess the format of an image from the first bytes of its container
    ///
    /// Returns `None` if no supported format matches
    pub fn guess_format(bytes: &[u8]) -> Option<ImageFormat> {
        const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

        if bytes.starts_with(&PNG_SIGNATURE) {
            return Some(ImageFormat::PNG);
        }
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ImageFormat::JPEG);
        }
        if bytes.starts_with(b"BM") {
            return Some(ImageFormat::BMP);
        }
        None
    }

    /// Map a file extension to a format, case insensitive
    pub fn from_extension(extension: &str) -> Option<ImageFormat> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::PNG),
            "jpg" | "jpeg" => Some(ImageFormat::JPEG),
            "bmp" => Some(ImageFormat::BMP),
            _ => None
        }
    }

    /// Map a path's extension to a format
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<ImageFormat> {
        path.as_ref()
            .extension()
            .and_then(|x| x.to_str())
            .and_then(ImageFormat::from_extension)
    }

    /// Lower case name of the format, as used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            ImageFormat::PNG => "png",
            ImageFormat::JPEG => "jpeg",
            ImageFormat::BMP => "bmp"
        }
    }
}

/// Turns container bytes into images and images back into bytes
pub trait ImageCodec {
    /// Decode a container, returning the image and the detected format
    ///
    /// # Errors
    /// [`ImageDecodeErrors`](ImageErrors::ImageDecodeErrors) if the bytes are not
    /// a supported or well formed image
    fn decode(&self, bytes: &[u8]) -> Result<(PixelImage, ImageFormat), ImageErrors>;

    /// Encode an image into a container of the given format
    ///
    /// # Errors
    /// - [`UnsupportedFormat`](ImageErrors::UnsupportedFormat) if the format has no encoder
    /// - [`EncodeErrors`](ImageErrors::EncodeErrors) if encoding fails
    fn encode(
        &self, image: &PixelImage, format: ImageFormat, options: EncoderOptions
    ) -> Result<Vec<u8>, ImageErrors>;
}

/// Codec backed by the zune decoders and `jpeg-encoder`
#[derive(Copy, Clone, Debug, Default)]
pub struct ZuneCodec;

impl ZuneCodec {
    pub fn new() -> ZuneCodec {
        ZuneCodec
    }
}

impl ImageCodec for ZuneCodec {
    fn decode(&self, bytes: &[u8]) -> Result<(PixelImage, ImageFormat), ImageErrors> {
        let format = ImageFormat::guess_format(bytes).ok_or_else(|| {
            ImageErrors::ImageDecodeErrors("unknown image format, not png, jpeg or bmp".to_string())
        })?;
        debug!("Treating input as a {format:?} file");

        let image = match format {
            ImageFormat::PNG => {
                #[cfg(feature = "png")]
                {
                    png::decode(bytes)?
                }
                #[cfg(not(feature = "png"))]
                {
                    return Err(ImageErrors::ImageDecodeErrors(
                        "png feature is disabled".to_string()
                    ));
                }
            }
            ImageFormat::JPEG => {
                #[cfg(feature = "jpeg")]
                {
                    jpeg::decode(bytes)?
                }
                #[cfg(not(feature = "jpeg"))]
                {
                    return Err(ImageErrors::ImageDecodeErrors(
                        "jpeg feature is disabled".to_string()
                    ));
                }
            }
            ImageFormat::BMP => {
                #[cfg(feature = "bmp")]
                {
                    bmp::decode(bytes)?
                }
                #[cfg(not(feature = "bmp"))]
                {
                    return Err(ImageErrors::ImageDecodeErrors(
                        "bmp feature is disabled".to_string()
                    ));
                }
            }
        };
        trace!("Decoded {:?}", image);

        Ok((image, format))
    }

    fn encode(
        &self, image: &PixelImage, format: ImageFormat, options: EncoderOptions
    ) -> Result<Vec<u8>, ImageErrors> {
        let options = create_options_for_encoder(options, image);

        match format {
            ImageFormat::PNG => {
                #[cfg(feature = "png")]
                {
                    png::encode(image, options)
                }
                #[cfg(not(feature = "png"))]
                {
                    Err(ImageErrors::UnsupportedFormat(format))
                }
            }
            ImageFormat::JPEG => {
                #[cfg(feature = "jpeg")]
                {
                    jpeg::encode(image, options)
                }
                #[cfg(not(feature = "jpeg"))]
                {
                    Err(ImageErrors::UnsupportedFormat(format))
                }
            }
            ImageFormat::BMP => Err(ImageErrors::UnsupportedFormat(format))
        }
    }
}

/// Copy the image configuration into user supplied options,
/// keeping quality and effort
pub(crate) fn create_options_for_encoder(
    options: EncoderOptions, image: &PixelImage
) -> EncoderOptions {
    let (width, height) = image.dimensions();

    options
        .set_width(width)
        .set_height(height)
        .set_depth(image.depth())
        .set_colorspace(image.colorspace())
}

#[cfg(test)]
mod tests {
    use zune_core::bit_depth::BitDepth;
    use zune_core::colorspace::ColorSpace;

    use super::*;

    #[test]
    fn magic_bytes_pick_the_format() {
        let png = [137, 80, 78, 71, 13, 10, 26, 10, 0, 0];
        assert_eq!(ImageFormat::guess_format(&png), Some(ImageFormat::PNG));
        assert_eq!(
            ImageFormat::guess_format(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ImageFormat::JPEG)
        );
        assert_eq!(ImageFormat::guess_format(b"BM\x00\x00"), Some(ImageFormat::BMP));
        assert_eq!(ImageFormat::guess_format(b"GIF89a"), None);
        assert_eq!(ImageFormat::guess_format(&[]), None);
    }

    #[test]
    fn extensions_map_to_formats() {
        assert_eq!(ImageFormat::from_extension("PNG"), Some(ImageFormat::PNG));
        assert_eq!(ImageFormat::from_extension("jpg"), Some(ImageFormat::JPEG));
        assert_eq!(ImageFormat::from_extension("jpeg"), Some(ImageFormat::JPEG));
        assert_eq!(ImageFormat::from_path("a/b/c.bmp"), Some(ImageFormat::BMP));
        assert_eq!(ImageFormat::from_path("no_extension"), None);
    }

    #[test]
    fn only_png_and_jpeg_encode() {
        assert!(ImageFormat::PNG.has_encoder());
        assert!(ImageFormat::JPEG.has_encoder());
        assert!(!ImageFormat::BMP.has_encoder());
    }

    #[test]
    fn unknown_bytes_fail_to_decode() {
        let err = ZuneCodec::new().decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ImageErrors::ImageDecodeErrors(_)));
    }

    #[test]
    fn bmp_never_encodes() {
        let image = PixelImage::new(1, 1, ColorSpace::RGB, BitDepth::Eight).unwrap();
        let err = ZuneCodec::new()
            .encode(&image, ImageFormat::BMP, EncoderOptions::default())
            .unwrap_err();
        assert!(matches!(err, ImageErrors::UnsupportedFormat(ImageFormat::BMP)));
    }
}
